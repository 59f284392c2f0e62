use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_minimax::games::tictactoe::{Board, TicTacToe};
use rust_minimax::games::tree::RandomTree;
use rust_minimax::search::{MinimaxSearch, SearchConfig};

fn quiet() -> SearchConfig {
    SearchConfig::default().with_logging(false)
}

fn bench_tictactoe(c: &mut Criterion) {
    let board = Board::new();

    let cached = MinimaxSearch::new(TicTacToe::new(), quiet());
    c.bench_function("tictactoe_solve_cached", |b| {
        b.iter(|| cached.decide(black_box(&board)))
    });

    let plain = MinimaxSearch::new(TicTacToe::new(), quiet().with_transposition_table(false));
    c.bench_function("tictactoe_solve_plain", |b| {
        b.iter(|| plain.decide(black_box(&board)))
    });
}

fn bench_random_tree(c: &mut Criterion) {
    let game = RandomTree::default()
        .depth(8)
        .max_branching(4)
        .share_probability(0.2)
        .generate(42)
        .expect("random tree");
    let root = game.root();
    let search = MinimaxSearch::new(game, quiet());

    c.bench_function("random_tree_depth8", |b| {
        b.iter(|| search.decide(black_box(&root)))
    });
}

criterion_group!(benches, bench_tictactoe, bench_random_tree);
criterion_main!(benches);
