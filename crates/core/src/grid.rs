//! Grid module - the 4x4 board and its transform engine
//!
//! The grid is a flat row-major array of tiles (`row * GRID_SIZE + col`).
//! Only the canonical `Left` move is implemented on lines; the other three
//! directions rotate the grid onto `Left`, slide, and rotate back:
//!
//! | Direction | Before | After |
//! |-----------|--------|-------|
//! | Left | - | - |
//! | Right | 2 turns | 2 turns |
//! | Up | 3 turns | 1 turn |
//! | Down | 1 turn | 3 turns |

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Direction, Tile, GRID_CELLS, GRID_SIZE};

/// One row of the grid, as consumed by compress/merge
pub type Line = [Tile; GRID_SIZE];

/// Result of merging one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineMerge {
    /// At least one pair merged
    pub merged: bool,
    /// Sum of the values produced by merges
    pub points: u32,
    /// Largest value produced by a merge (0 if none)
    pub max_merged: u32,
}

/// Result of sliding the whole grid in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Any tile moved or merged
    pub changed: bool,
    /// Points earned by the move's merges
    pub points: u32,
    /// Largest tile produced by the move's merges (0 if none)
    pub max_merged: u32,
}

impl MoveOutcome {
    fn absorb(&mut self, merge: LineMerge) {
        self.changed |= merge.merged;
        self.points += merge.points;
        self.max_merged = self.max_merged.max(merge.max_merged);
    }
}

/// Slide all non-empty tiles toward the start of the line, preserving order.
///
/// Returns true iff at least one tile changed position.
pub fn compress_line(line: &mut [Tile]) -> bool {
    let mut changed = false;
    let mut write = 0;
    for read in 0..line.len() {
        let tile = line[read];
        if tile.is_empty() {
            continue;
        }
        if read != write {
            line[write] = tile;
            line[read] = Tile::EMPTY;
            changed = true;
        }
        write += 1;
    }
    changed
}

/// Merge equal adjacent tiles, scanning from the start of the line.
///
/// A merged tile lands at the left position, the tail shifts one step left and
/// the last cell becomes empty. The scan continues after the merged tile, so a
/// tile takes part in at most one merge per pass.
pub fn merge_line(line: &mut [Tile]) -> LineMerge {
    let mut out = LineMerge::default();
    let len = line.len();
    let mut i = 0;
    while i + 1 < len {
        if !line[i].is_empty() && line[i] == line[i + 1] {
            let merged = line[i].doubled();
            line[i] = merged;
            line.copy_within(i + 2..len, i + 1);
            line[len - 1] = Tile::EMPTY;

            out.merged = true;
            out.points += merged.value();
            out.max_merged = out.max_merged.max(merged.value());
        }
        i += 1;
    }
    out
}

/// The 4x4 game grid using flat array storage
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    /// Flat array of tiles, row-major order (row * GRID_SIZE + col)
    cells: [Tile; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Tile::EMPTY; GRID_CELLS],
        }
    }

    /// Build a grid from row-major tile values
    pub fn from_values(values: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (row, line) in values.iter().enumerate() {
            for (col, &v) in line.iter().enumerate() {
                grid.cells[row * GRID_SIZE + col] = Tile::new(v);
            }
        }
        grid
    }

    /// Export tile values row-major
    pub fn values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
        self.write_values(&mut out);
        out
    }

    /// Write tile values into an existing buffer (no allocation)
    pub fn write_values(&self, out: &mut [[u32; GRID_SIZE]; GRID_SIZE]) {
        for (row, line) in out.iter_mut().enumerate() {
            for (col, v) in line.iter_mut().enumerate() {
                *v = self.cells[row * GRID_SIZE + col].value();
            }
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get tile at (row, col); None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        Self::index(row, col).map(|i| self.cells[i])
    }

    /// Set tile at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match Self::index(row, col) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Set tile by flat index; returns false if out of bounds
    pub fn set_index(&mut self, index: usize, tile: Tile) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Copy of one row; rows past the edge read as empty
    pub fn row(&self, row: usize) -> Line {
        let mut line = [Tile::EMPTY; GRID_SIZE];
        if row < GRID_SIZE {
            line.copy_from_slice(&self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE]);
        }
        line
    }

    pub fn set_row(&mut self, row: usize, line: Line) {
        if row < GRID_SIZE {
            self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE].copy_from_slice(&line);
        }
    }

    /// A new grid rotated 90° clockwise
    pub fn rotate_clockwise(&self) -> Grid {
        let mut out = Grid::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[col * GRID_SIZE + (GRID_SIZE - 1 - row)] = self.cells[row * GRID_SIZE + col];
            }
        }
        out
    }

    /// A new grid rotated clockwise `turns` quarter turns
    pub fn rotated(&self, turns: usize) -> Grid {
        let mut out = *self;
        for _ in 0..turns % 4 {
            out = out.rotate_clockwise();
        }
        out
    }

    /// Slide the grid in `direction`: rotate onto Left, then per row
    /// compress, merge, compress, then rotate back.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let turns = direction.quarter_turns();
        let mut work = self.rotated(turns);
        let mut outcome = MoveOutcome::default();

        for r in 0..GRID_SIZE {
            let mut line = work.row(r);
            outcome.changed |= compress_line(&mut line);
            outcome.absorb(merge_line(&mut line));
            outcome.changed |= compress_line(&mut line);
            work.set_row(r, line);
        }

        *self = work.rotated(4 - turns);
        outcome
    }

    /// The grid after sliding in `direction`, leaving `self` untouched
    pub fn shifted(&self, direction: Direction) -> (Grid, MoveOutcome) {
        let mut next = *self;
        let outcome = next.apply_move(direction);
        (next, outcome)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|t| t.is_empty()).count()
    }

    /// Flat indices of all empty cells (stack-only)
    pub fn empty_cells(&self) -> ArrayVec<usize, GRID_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|t| !t.is_empty())
    }

    /// Largest tile value currently on the grid
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().map(|t| t.value()).max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn total(&self) -> u32 {
        self.cells.iter().map(|t| t.value()).sum()
    }

    /// True iff any cell is empty or two orthogonal neighbours hold equal values
    pub fn has_move(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let tile = self.cells[row * GRID_SIZE + col];
                if tile.is_empty() {
                    return true;
                }
                if row + 1 < GRID_SIZE && tile == self.cells[(row + 1) * GRID_SIZE + col] {
                    return true;
                }
                if col + 1 < GRID_SIZE && tile == self.cells[row * GRID_SIZE + col + 1] {
                    return true;
                }
            }
        }
        false
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [Tile::EMPTY; GRID_CELLS];
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values().iter()).finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let v = self.cells[row * GRID_SIZE + col].value();
                if col > 0 {
                    f.write_str(" ")?;
                }
                if v == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", v)?;
                }
            }
            if row + 1 < GRID_SIZE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(values: [u32; 4]) -> Line {
        values.map(Tile::new)
    }

    fn line_values(line: &Line) -> [u32; 4] {
        line.map(|t| t.value())
    }

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 3), Some(3));
        assert_eq!(Grid::index(1, 0), Some(4));
        assert_eq!(Grid::index(3, 3), Some(15));
        assert_eq!(Grid::index(4, 0), None);
        assert_eq!(Grid::index(0, 4), None);
    }

    #[test]
    fn test_compress_line() {
        let mut l = line([0, 2, 0, 4]);
        assert!(compress_line(&mut l));
        assert_eq!(line_values(&l), [2, 4, 0, 0]);

        // Already compressed.
        assert!(!compress_line(&mut l));
        assert_eq!(line_values(&l), [2, 4, 0, 0]);
    }

    #[test]
    fn test_compress_line_empty_and_full() {
        let mut empty = line([0, 0, 0, 0]);
        assert!(!compress_line(&mut empty));

        let mut full = line([2, 4, 8, 16]);
        assert!(!compress_line(&mut full));
        assert_eq!(line_values(&full), [2, 4, 8, 16]);
    }

    #[test]
    fn test_merge_line_single_pair() {
        let mut l = line([2, 2, 0, 0]);
        let m = merge_line(&mut l);
        assert_eq!(line_values(&l), [4, 0, 0, 0]);
        assert_eq!(
            m,
            LineMerge {
                merged: true,
                points: 4,
                max_merged: 4
            }
        );
    }

    #[test]
    fn test_merge_line_two_pairs() {
        let mut l = line([2, 2, 2, 2]);
        let m = merge_line(&mut l);
        assert_eq!(line_values(&l), [4, 4, 0, 0]);
        assert_eq!(m.points, 8);
        assert_eq!(m.max_merged, 4);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        let mut l = line([4, 4, 8, 0]);
        let m = merge_line(&mut l);
        assert_eq!(line_values(&l), [8, 8, 0, 0]);
        assert_eq!(m.points, 8);

        let mut l = line([2, 2, 4, 0]);
        merge_line(&mut l);
        assert_eq!(line_values(&l), [4, 4, 0, 0]);
    }

    #[test]
    fn test_merge_line_odd_run() {
        let mut l = line([2, 2, 2, 0]);
        merge_line(&mut l);
        assert_eq!(line_values(&l), [4, 2, 0, 0]);
    }

    #[test]
    fn test_merge_line_no_pairs() {
        let mut l = line([2, 4, 2, 4]);
        let m = merge_line(&mut l);
        assert_eq!(m, LineMerge::default());
        assert_eq!(line_values(&l), [2, 4, 2, 4]);
    }

    #[test]
    fn test_rotate_clockwise() {
        let g = Grid::from_values([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ]);
        let r = g.rotate_clockwise();
        assert_eq!(
            r.values(),
            [
                [13, 9, 5, 1],
                [14, 10, 6, 2],
                [15, 11, 7, 3],
                [16, 12, 8, 4],
            ]
        );
        assert_eq!(g.rotated(4), g);
        assert_eq!(g.rotated(3).rotate_clockwise(), g);
    }

    #[test]
    fn test_move_left() {
        let mut g = Grid::from_values([[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let out = g.apply_move(Direction::Left);
        assert!(out.changed);
        assert_eq!(out.points, 4);
        assert_eq!(out.max_merged, 4);
        assert_eq!(g.row(0).map(|t| t.value()), [4, 0, 0, 0]);
    }

    #[test]
    fn test_move_right() {
        let mut g = Grid::from_values([[2, 2, 4, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let out = g.apply_move(Direction::Right);
        assert!(out.changed);
        assert_eq!(g.row(0).map(|t| t.value()), [0, 0, 4, 4]);
        assert_eq!(out.points, 4);
    }

    #[test]
    fn test_move_up() {
        let mut g = Grid::from_values([[2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let out = g.apply_move(Direction::Up);
        assert!(out.changed);
        assert_eq!(out.points, 4);
        assert_eq!(
            g.values(),
            [[4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
    }

    #[test]
    fn test_move_down() {
        let mut g = Grid::from_values([[0, 4, 0, 0], [0, 0, 0, 0], [0, 4, 0, 0], [0, 2, 0, 0]]);
        let out = g.apply_move(Direction::Down);
        assert!(out.changed);
        assert_eq!(
            g.values(),
            [[0, 0, 0, 0], [0, 0, 0, 0], [0, 8, 0, 0], [0, 2, 0, 0]]
        );
        assert_eq!(out.points, 8);
    }

    #[test]
    fn test_slide_without_merge_reports_change() {
        let mut g = Grid::from_values([[0, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let out = g.apply_move(Direction::Left);
        assert!(out.changed);
        assert_eq!(out.points, 0);
        assert_eq!(g.get(0, 0), Some(Tile::new(2)));
    }

    #[test]
    fn test_blocked_move_reports_no_change() {
        let start = Grid::from_values([[2, 4, 0, 0], [8, 16, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let mut g = start;
        let out = g.apply_move(Direction::Left);
        assert!(!out.changed);
        assert_eq!(g, start);

        let (shifted, out) = start.shifted(Direction::Up);
        assert!(!out.changed);
        assert_eq!(shifted, start);
    }

    #[test]
    fn test_has_move() {
        let locked = Grid::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!locked.has_move());

        let mut vertical_pair = locked;
        vertical_pair.set(1, 0, Tile::new(2));
        assert!(vertical_pair.has_move());

        let mut horizontal_pair = locked;
        horizontal_pair.set(3, 3, Tile::new(4));
        assert!(horizontal_pair.has_move());

        let mut with_hole = locked;
        with_hole.set(2, 2, Tile::EMPTY);
        assert!(with_hole.has_move());
    }

    #[test]
    fn test_empty_cells() {
        let mut g = Grid::new();
        assert_eq!(g.empty_count(), 16);
        g.set(0, 1, Tile::new(2));
        g.set(3, 3, Tile::new(4));
        let empty = g.empty_cells();
        assert_eq!(empty.len(), 14);
        assert!(!empty.contains(&1));
        assert!(!empty.contains(&15));
        assert_eq!(g.max_tile(), 4);
        assert_eq!(g.total(), 6);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut g = Grid::new();
        assert_eq!(g.get(4, 0), None);
        assert!(!g.set(0, 4, Tile::new(2)));
        assert!(!g.set_index(16, Tile::new(2)));
        assert_eq!(g.row(7), [Tile::EMPTY; 4]);
    }
}
