use criterion::{black_box, criterion_group, criterion_main, Criterion};

use peg_solitaire::agents::RandomAgent;
use peg_solitaire::analysis;
use peg_solitaire::observer::NoopObserver;
use peg_solitaire::rules::GameEngine;
use peg_solitaire::training::play_episode;
use peg_solitaire::BoardConfig;

fn bench_legal_moves(c: &mut Criterion) {
    let triangle = GameEngine::new(&BoardConfig::triangle(8).with_hole(0, 0)).unwrap();
    let diamond = GameEngine::new(&BoardConfig::diamond(7).with_hole(3, 3)).unwrap();

    c.bench_function("legal_moves_triangle_8", |b| {
        b.iter(|| black_box(&triangle).legal_moves())
    });
    c.bench_function("legal_moves_diamond_7", |b| {
        b.iter(|| black_box(&diamond).legal_moves())
    });
    c.bench_function("direct_moves_diamond_7", |b| {
        b.iter(|| analysis::direct_moves(black_box(&diamond)))
    });
}

fn bench_random_episode(c: &mut Criterion) {
    let config = BoardConfig::triangle(8).with_hole(0, 0);
    let mut agent = RandomAgent::new(42);

    c.bench_function("random_episode_triangle_8", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(&config).unwrap();
            play_episode(&mut engine, &mut agent, &mut NoopObserver, 0.0, false).unwrap()
        })
    });
}

fn bench_solve(c: &mut Criterion) {
    let engine = GameEngine::new(&BoardConfig::triangle(5).with_hole(0, 0)).unwrap();

    c.bench_function("solve_triangle_5", |b| {
        b.iter(|| analysis::solve(black_box(&engine)))
    });
}

criterion_group!(benches, bench_legal_moves, bench_random_episode, bench_solve);
criterion_main!(benches);
