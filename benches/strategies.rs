use criterion::{criterion_group, criterion_main, Criterion};
use slide_search::duel::{DuelConfig, DuelState, Minimax, Side};
use slide_search::puzzle::{scramble_batch, PuzzleState, Variant};
use slide_search::search::{Solver, SearchConfig, Strategy};
use std::hint::black_box;

fn corpus(variant: Variant) -> Vec<PuzzleState> {
    scramble_batch(variant, 40, 8, 1337)
        .into_iter()
        .filter_map(|board| PuzzleState::new(board, variant).ok())
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let solver = Solver::new(SearchConfig::default());
    for variant in [Variant::Classic, Variant::MultiBlank] {
        let boards = corpus(variant);
        for strategy in [Strategy::BreadthFirst, Strategy::UniformCost, Strategy::AStar] {
            c.bench_function(&format!("{variant}/{strategy}"), |b| {
                b.iter(|| {
                    let mut expanded = 0u64;
                    for start in &boards {
                        expanded += solver.run(start, strategy).expanded;
                    }
                    black_box(expanded)
                })
            });
        }
    }
}

fn bench_minimax(c: &mut Criterion) {
    let config = DuelConfig::default().with_depth(6);
    let root = DuelState::parse("1 0 0\n0 5 2\n8 0 9", Side::One, &config.layout)
        .expect("bench board is valid");
    let minimax = Minimax::new(config);
    c.bench_function("duel/minimax-depth-6", |b| {
        b.iter(|| black_box(minimax.search(&root).value))
    });
}

criterion_group!(strategies, bench_strategies, bench_minimax);
criterion_main!(strategies);
