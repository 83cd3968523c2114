//! Curated surface for the batch driver and benches.
//!
//! Everything here is re-exported from its home module; prefer these names
//! in callers so the driver does not depend on the module layout.

// Grids and words
pub use crate::algebra::{grids, DirectionAlgebra, Grid, Step};
pub use crate::word::{tiles_cycle, BoundaryWord, Factor};
// Factor finders
pub use crate::factors::{
    admissible_gapped_mirror_factor_pairs, admissible_gapped_reflect_square_factor_pairs,
    admissible_mirror_factors, admissible_palindrome_factors, admissible_reflect_square_factors,
    admissible_rotadrome_factors, admissible_rotation_factors, FactorPair,
};
// Deciders
pub use crate::tilings::{
    classify, decide, has_case_7_tiling, has_case_8a_tiling, has_case_8b_tiling,
    has_half_turn_tiling, has_isohedral_tiling, has_quarter_turn_tiling,
    has_translation_tiling, has_type_1_half_turn_reflection_tiling,
    has_type_1_reflection_tiling, has_type_2_half_turn_reflection_tiling,
    has_type_2_reflection_tiling, Analysis, Tiling, TilingCase, Witness,
};
// Shapes
pub use crate::omino::{Cell, Polyomino};
pub use crate::sample::{PolyominoSampler, ReplayToken as PolyominoReplay};
