//! Grid tests: line primitives, rotation, and whole-grid moves

use tui_2048::core::{compress_line, merge_line, GameState, Grid};
use tui_2048::types::{Direction, Tile, GRID_SIZE};

fn tiles(values: [u32; 4]) -> [Tile; 4] {
    values.map(Tile::new)
}

fn mirror(values: [[u32; 4]; 4]) -> [[u32; 4]; 4] {
    values.map(|mut row| {
        row.reverse();
        row
    })
}

fn mid_game() -> Grid {
    Grid::from_values([
        [2, 2, 4, 0],
        [0, 4, 4, 8],
        [16, 0, 16, 2],
        [2, 8, 0, 8],
    ])
}

#[test]
fn test_compress_is_idempotent() {
    let mut line = tiles([0, 4, 0, 2]);
    assert!(compress_line(&mut line));
    assert_eq!(line, tiles([4, 2, 0, 0]));
    assert!(!compress_line(&mut line));
    assert_eq!(line, tiles([4, 2, 0, 0]));
}

#[test]
fn test_merge_preserves_total() {
    for values in [[2, 2, 2, 2], [4, 4, 8, 0], [2, 4, 8, 16], [8, 8, 8, 0]] {
        let mut line = tiles(values);
        let before: u32 = line.iter().map(|t| t.value()).sum();
        let merged = merge_line(&mut line);
        let after: u32 = line.iter().map(|t| t.value()).sum();
        assert_eq!(before, after, "merge of {:?} changed the total", values);
        assert!(merged.points <= before);
    }
}

#[test]
fn test_merge_points_are_sum_of_new_tiles() {
    let mut line = tiles([2, 2, 4, 4]);
    let merged = merge_line(&mut line);
    assert!(merged.merged);
    assert_eq!(line, tiles([4, 8, 0, 0]));
    assert_eq!(merged.points, 12);
    assert_eq!(merged.max_merged, 8);
}

#[test]
fn test_four_equal_tiles_make_two_pairs() {
    let mut grid = Grid::from_values([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let outcome = grid.apply_move(Direction::Left);
    assert!(outcome.changed);
    assert_eq!(outcome.points, 8);
    assert_eq!(grid.row(0), tiles([4, 4, 0, 0]));
}

#[test]
fn test_rotation_round_trip() {
    let grid = mid_game();
    assert_eq!(grid.rotated(4), grid);
    assert_eq!(grid.rotated(0), grid);
    for turns in 1..4 {
        assert_eq!(grid.rotated(turns).rotated(4 - turns), grid);
        assert_ne!(grid.rotated(turns), grid);
    }
}

#[test]
fn test_right_mirrors_left() {
    let values = mid_game().values();

    let (right, right_outcome) = Grid::from_values(values).shifted(Direction::Right);
    let (left, left_outcome) = Grid::from_values(mirror(values)).shifted(Direction::Left);

    assert_eq!(right.values(), mirror(left.values()));
    assert_eq!(right_outcome, left_outcome);
}

#[test]
fn test_moves_preserve_total() {
    let grid = mid_game();
    for dir in Direction::ALL {
        let (next, _) = grid.shifted(dir);
        assert_eq!(next.total(), grid.total(), "{} changed the total", dir.as_str());
    }
}

#[test]
fn test_shifted_does_not_touch_source() {
    let grid = mid_game();
    let copy = grid;
    let _ = grid.shifted(Direction::Up);
    assert_eq!(grid, copy);
}

#[test]
fn test_locked_grid_has_no_move() {
    let grid = Grid::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(grid.is_full());
    assert!(!grid.has_move());
    for dir in Direction::ALL {
        assert!(!grid.shifted(dir).1.changed);
    }
}

#[test]
fn test_full_grid_with_pair_can_move() {
    let grid = Grid::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
    assert!(grid.is_full());
    assert!(grid.has_move());
}

#[test]
fn test_tiles_stay_powers_of_two_over_long_play() {
    let mut state = GameState::new(2024);
    let mut last_score = 0;

    for _ in 0..2000 {
        if !state.playable() {
            state.reset();
            last_score = 0;
        }
        state.random_move();

        assert!(state.score() >= last_score);
        last_score = state.score();

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = state.grid().get(row, col).map(Tile::value).unwrap_or(0);
                assert!(
                    value == 0 || (value >= 2 && value.is_power_of_two()),
                    "cell ({}, {}) holds {}",
                    row,
                    col,
                    value
                );
            }
        }
    }
}
