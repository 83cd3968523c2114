//! Isohedral tiling decisions for polyforms given by their boundary words.
//!
//! A polyform is described by the cyclic sequence of edge directions along
//! its clockwise boundary. The crate decides whether copies of the shape
//! tile the plane isohedrally by searching the boundary word for one of the
//! known factorization patterns.
//!
//! Layers, bottom-up:
//! - `algebra`: per-grid direction tables ([`DirectionAlgebra`]) and presets.
//! - `word`: cyclic words, factors and their index arithmetic.
//! - `factors`: maximal factors with a self-symmetry (mirror, rotadrome,
//!   reflect square) that serve as tile sides.
//! - `tilings`: one decider per tiling case, and the overall decision.
//!
//! Around the core: `omino` extracts boundary words from cell sets and
//! `sample` draws random polyominoes for tests and benches.

pub mod algebra;
pub mod api;
pub mod error;
pub mod factors;
pub mod omino;
pub mod sample;
pub mod tilings;
pub mod word;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algebra::{grids, DirectionAlgebra, Grid, Step, Symbol};
pub use error::{IsohedralError, Result};
pub use tilings::{classify, decide, has_isohedral_tiling, Analysis, Tiling, TilingCase, Witness};
pub use word::{BoundaryWord, Factor};

/// Validates `letters` against `algebra`, then runs the full decision.
pub fn is_isohedral<S: Symbol>(letters: &[S], algebra: &DirectionAlgebra<S>) -> Result<bool> {
    let word = BoundaryWord::new(letters.to_vec(), algebra)?;
    has_isohedral_tiling(&word)
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algebra::{grids, DirectionAlgebra, Grid, Step};
    pub use crate::omino::{Cell, Polyomino};
    pub use crate::sample::{PolyominoSampler, ReplayToken};
    pub use crate::tilings::{classify, decide, has_isohedral_tiling, Tiling, TilingCase};
    pub use crate::word::{BoundaryWord, Factor};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_point_validates() {
        let alg = grids::square().unwrap();
        let word = Grid::Square.parse_word("NNESESSWNW").unwrap();
        assert!(is_isohedral(&word, &alg).unwrap());
        assert!(matches!(
            is_isohedral(&[], &alg),
            Err(IsohedralError::InvalidInput { .. })
        ));
        assert!(matches!(
            is_isohedral(&[Step::new(3, 3)], &alg),
            Err(IsohedralError::InvalidSymbol { .. })
        ));
    }
}
