//! Direction algebra: the grid's symbolic geometry.
//!
//! - `types`: [`DirectionAlgebra`] (complement, elementary rotations, axis
//!   reflections) and small table builders.
//! - `grids`: the square, hex, iamond and kite presets over lattice steps.
//!
//! The engine never looks at coordinates; a grid is fully described by its
//! algebra value, which callers construct once and pass by reference.

pub mod grids;
mod types;

pub use grids::{Grid, Step};
pub use types::{cyclic, involution, DirectionAlgebra, Symbol, SymbolMap};

#[cfg(test)]
mod tests;
