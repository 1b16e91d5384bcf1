//! RNG module - deterministic randomness for tile spawns and random moves
//!
//! A small LCG keeps every game reproducible from its seed, which the headless
//! runner and the tests rely on. Trial copies used by the auto-player clone the
//! generator, so ranking moves never advances the live sequence.

use crate::types::{GRID_CELLS, SPAWN_FOUR_PERCENT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            let _ = self.next_u32();
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Returns true with the given probability in percent
    pub fn chance_percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }

    /// Value of a freshly spawned tile: 2 with 90% probability, 4 otherwise
    pub fn spawn_value(&mut self) -> u32 {
        if self.chance_percent(SPAWN_FOUR_PERCENT) {
            4
        } else {
            2
        }
    }

    /// Pick one cell index out of `cells`, or None when empty
    pub fn pick_cell(&mut self, cells: &[usize]) -> Option<usize> {
        if cells.is_empty() || cells.len() > GRID_CELLS {
            return None;
        }
        let i = self.next_range(cells.len() as u32) as usize;
        cells.get(i).copied()
    }

    /// Current generator state (a seed that resumes the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
