use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{choose_best, merge_line, GameState, Grid};
use tui_2048::types::{Direction, Tile};

fn mid_game_grid() -> Grid {
    Grid::from_values([
        [2, 4, 8, 16],
        [4, 0, 16, 2],
        [2, 2, 0, 4],
        [0, 8, 8, 2],
    ])
}

fn bench_apply_move(c: &mut Criterion) {
    let grid = mid_game_grid();

    c.bench_function("apply_move_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                let mut g = black_box(grid);
                g.apply_move(dir);
            }
        })
    });
}

fn bench_merge_line(c: &mut Criterion) {
    c.bench_function("merge_line", |b| {
        b.iter(|| {
            let mut line = [Tile::new(2), Tile::new(2), Tile::new(4), Tile::new(4)];
            merge_line(black_box(&mut line));
        })
    });
}

fn bench_choose_best(c: &mut Criterion) {
    let state = GameState::with_grid(mid_game_grid(), 12345);

    c.bench_function("choose_best", |b| {
        b.iter(|| choose_best(black_box(&state)))
    });
}

fn bench_auto_game(c: &mut Criterion) {
    c.bench_function("auto_game_200_moves", |b| {
        b.iter(|| {
            let mut state = GameState::new(12345);
            for _ in 0..200 {
                if !state.auto_move() {
                    break;
                }
            }
            state.score()
        })
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_merge_line,
    bench_choose_best,
    bench_auto_game
);
criterion_main!(benches);
