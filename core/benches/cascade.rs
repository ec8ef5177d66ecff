use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gemfall_core::*;
use std::hint::black_box;

/// Board with a swap at (0, 0)-(0, 1) queued, ready to resolve.
fn swapped_game(size: Coord2) -> GameState {
    let mut game = GameState::new(GameConfig::new(size).expect("valid size"));
    game.pointer_down((0, 0));
    game.pointer_down((0, 1));
    game
}

fn bench_find_all_groups(c: &mut Criterion) {
    let grid = Grid::new((8, 8));
    let striped = Grid::from_fn((32, 32), |(x, y)| Shape::from_index(usize::from(x / 2 + y / 2)));

    c.bench_function("find_all_groups_8x8", |b| {
        b.iter(|| find_all_groups(black_box(&grid), MIN_GROUP_SIZE))
    });
    c.bench_function("find_all_groups_32x32_blocks", |b| {
        b.iter(|| find_all_groups(black_box(&striped), MIN_GROUP_SIZE))
    });
}

fn bench_settle(c: &mut Criterion) {
    let holey = Grid::from_fn((32, 32), |(x, y)| {
        if (x + y) % 3 == 0 {
            Shape::Empty
        } else {
            Shape::from_index(usize::from(x))
        }
    });

    c.bench_function("settle_all_32x32", |b| {
        b.iter_batched(
            || holey.clone(),
            |mut grid| settle_all(&mut grid),
            BatchSize::SmallInput,
        )
    });
}

fn bench_full_cascade(c: &mut Criterion) {
    for size in [(8, 8), (32, 32)] {
        c.bench_function(&format!("full_cascade_{}x{}", size.0, size.1), |b| {
            b.iter_batched(
                || swapped_game(size),
                |mut game| {
                    while game.phase().is_resolving() {
                        game.advance_phase();
                    }
                    game.score()
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(
    benches,
    bench_find_all_groups,
    bench_settle,
    bench_full_cascade
);
criterion_main!(benches);
