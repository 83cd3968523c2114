//! Factor finders: the candidate sides of every tiling pattern.
//!
//! Each finder scans all anchor positions of the cyclic word and, per anchor,
//! grows the longest arc satisfying one self-symmetry predicate. Results are
//! maximal factors (or factor pairs) in anchor order; duplicates only where a
//! finder documents them.
//!
//! - `mirror`: `A` with `inv_comp(A)` antipodal, and gapped `(A, Â)` pairs.
//! - `rotadrome`: θ-dromes, palindromes and the 60°/120° rotation sides.
//! - `reflect`: reflect squares `X·f_θ(X)` and gapped `(X, f_θ(X))` pairs.
//!
//! All finders validate nothing: the word was checked when it was built, so
//! the only error path is a missing reflection axis.

mod mirror;
mod reflect;
mod rotadrome;

use crate::word::Factor;

/// Two related factors, e.g. `(A, Â)` or `(X, f_θ(X))`.
pub type FactorPair = (Factor, Factor);

pub use mirror::{admissible_gapped_mirror_factor_pairs, admissible_mirror_factors};
pub use reflect::{
    admissible_gapped_reflect_square_factor_pairs, admissible_reflect_square_factors,
    is_reflect_square_factor,
};
pub use rotadrome::{
    admissible_palindrome_factors, admissible_rotadrome_factors, admissible_rotation_factors,
};
