//! Board input and result output.
//!
//! ## Search records
//!
//! One record per strategy, in run order:
//!
//! ```text
//! <expanded>
//! <cost>
//! <path>
//! ```
//!
//! Classic paths are direction symbols (`U R D`); multi-blank paths name the
//! blank that moved (`(2, 1)->U, (1, 1)->R`). A search that exhausts its
//! frontier writes `no solution` in place of the cost and path lines.
//!
//! ## Duel report
//!
//! Three lines: utility for the first mover, expanded count, max moves.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::Board;
use crate::duel::DuelReport;
use crate::error::{Error, Result};
use crate::puzzle::{Step, Variant};
use crate::search::SearchOutcome;

/// Line written when a search finds no solution.
pub const NO_SOLUTION: &str = "no solution";

/// Read and parse a board file.
pub fn read_board(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("read board {}", path.display()), e))?;
    Board::parse(&text)
}

/// Render a move sequence in the variant's path notation.
#[must_use]
pub fn format_path(variant: Variant, path: &[Step]) -> String {
    match variant {
        Variant::Classic => path
            .iter()
            .map(|step| step.dir.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" "),
        Variant::MultiBlank => path
            .iter()
            .map(Step::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Write one record per outcome.
pub fn write_search_outcomes<W: Write>(
    writer: &mut W,
    variant: Variant,
    outcomes: &[SearchOutcome],
) -> Result<()> {
    let write_err = |e: std::io::Error| Error::io("write search results", e);
    for outcome in outcomes {
        writeln!(writer, "{}", outcome.expanded).map_err(write_err)?;
        match &outcome.solution {
            Some(solution) => {
                writeln!(writer, "{}", solution.cost).map_err(write_err)?;
                writeln!(writer, "{}", format_path(variant, &solution.path)).map_err(write_err)?;
            }
            None => writeln!(writer, "{NO_SOLUTION}").map_err(write_err)?,
        }
    }
    writer.flush().map_err(write_err)
}

/// Write the duel report.
pub fn write_duel_report<W: Write>(writer: &mut W, report: &DuelReport) -> Result<()> {
    let write_err = |e: std::io::Error| Error::io("write duel report", e);
    writeln!(writer, "{}", report.utility).map_err(write_err)?;
    writeln!(writer, "{}", report.expanded).map_err(write_err)?;
    writeln!(writer, "{}", report.max_moves).map_err(write_err)?;
    writer.flush().map_err(write_err)
}

/// Create (truncating) `path` and hand a buffered writer to `write`.
pub fn write_file<F>(path: impl AsRef<Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut std::io::BufWriter<fs::File>) -> Result<()>,
{
    let path = path.as_ref();
    let file = fs::File::create(path)
        .map_err(|e| Error::io(format!("create {}", path.display()), e))?;
    let mut writer = std::io::BufWriter::new(file);
    write(&mut writer)
}
