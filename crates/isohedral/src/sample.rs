//! Random simply-connected polyominoes with replay tokens.
//!
//! Growth model: start from the origin cell and repeatedly add a uniformly
//! chosen free edge-neighbour of the current shape. A draw that encloses a
//! hole is discarded and regrown from the same RNG stream, so a token always
//! maps to the same polyomino.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{IsohedralError, Result};
use crate::omino::{Cell, Polyomino};

/// Replay token: `(seed, index)` selects one draw reproducibly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Regrowth budget per token when draws keep enclosing holes.
const MAX_ATTEMPTS: usize = 256;

/// Sampler for polyominoes of a fixed cell count.
#[derive(Clone, Copy, Debug)]
pub struct PolyominoSampler {
    cells: usize,
}

impl PolyominoSampler {
    pub fn new(cells: usize) -> Result<Self> {
        if cells == 0 {
            return Err(IsohedralError::invalid_input("sampler needs at least one cell"));
        }
        Ok(Self { cells })
    }

    #[inline]
    pub fn cells(&self) -> usize {
        self.cells
    }

    pub fn draw(&self, tok: ReplayToken) -> Result<Polyomino> {
        let mut rng = tok.to_std_rng();
        for _ in 0..MAX_ATTEMPTS {
            let poly = Polyomino::from_cells(grow(self.cells, &mut rng))?;
            if poly.is_simply_connected() {
                return Ok(poly);
            }
        }
        Err(IsohedralError::invalid_input(format!(
            "no hole-free {}-omino after {} attempts",
            self.cells, MAX_ATTEMPTS
        )))
    }

    /// Draws for indices `0..count` under one seed.
    pub fn draw_many(&self, seed: u64, count: u64) -> Result<Vec<Polyomino>> {
        (0..count).map(|index| self.draw(ReplayToken::new(seed, index))).collect()
    }
}

fn grow<R: Rng>(size: usize, rng: &mut R) -> Vec<Cell> {
    let mut cells = vec![Cell::zeros()];
    let mut taken: HashSet<Cell> = cells.iter().copied().collect();
    while cells.len() < size {
        // frontier in insertion order so the draw only depends on the RNG
        let mut frontier = Vec::new();
        let mut queued = HashSet::new();
        for c in &cells {
            for d in [Cell::new(1, 0), Cell::new(0, 1), Cell::new(-1, 0), Cell::new(0, -1)] {
                let nb = c + d;
                if !taken.contains(&nb) && queued.insert(nb) {
                    frontier.push(nb);
                }
            }
        }
        let pick = frontier[rng.gen_range(0..frontier.len())];
        taken.insert(pick);
        cells.push(pick);
    }
    cells
}
