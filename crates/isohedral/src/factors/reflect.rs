//! Reflect squares and gapped reflect pairs.
//!
//! A reflect square is a factor `X · f_θ(X)` for some reflection axis θ,
//! maximal in the sense that the match does not run on past the factor.
//! A gapped reflect pair is two arcs `X` and `f_θ(X)` of the same length at
//! arbitrary positions.

use super::FactorPair;
use crate::algebra::Symbol;
use crate::error::Result;
use crate::word::{longest_match, BoundaryWord, Factor};

/// Whether `[i..=j]` splits into halves `X · f_θ(X)`, where `mirrored` is the
/// word reflected across θ, and the correspondence stops at the factor's end.
pub fn is_reflect_square_factor<S: Symbol>(
    word: &BoundaryWord<'_, S>,
    mirrored: &BoundaryWord<'_, S>,
    i: usize,
    j: usize,
) -> bool {
    let len = Factor::new(i, j).len(word.len());
    if len % 2 != 0 {
        return false;
    }
    let half = len / 2;
    let (i, half_i) = (i as isize, half as isize);
    longest_match(word.forward(i), mirrored.forward(i + half_i), half + 1) == half
}

/// All `(i, j)`, `i ≠ j`, that are reflect squares for at least one axis.
/// Each factor appears once regardless of how many axes admit it.
pub fn admissible_reflect_square_factors<S: Symbol>(
    word: &BoundaryWord<'_, S>,
) -> Result<Vec<Factor>> {
    let n = word.len();
    let mirrored = word
        .algebra()
        .reflection_angles()
        .map(|theta| word.reflected(theta))
        .collect::<Result<Vec<_>>>()?;

    let mut factors = Vec::new();
    for i in 0..n {
        for j in (0..n).filter(|&j| j != i) {
            if mirrored.iter().any(|m| is_reflect_square_factor(word, m, i, j)) {
                factors.push(Factor::new(i, j));
            }
        }
    }
    Ok(factors)
}

/// Maximal pairs `(X, f_θ(X))` starting at `i < j`, each at most as long as
/// the shorter of the two arcs separating `i` and `j`.
pub fn admissible_gapped_reflect_square_factor_pairs<S: Symbol>(
    word: &BoundaryWord<'_, S>,
    theta: i32,
) -> Result<Vec<FactorPair>> {
    let n = word.len();
    let mirrored = word.reflected(theta)?;
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            let d = (j - i).min(n - (j - i));
            let l = longest_match(word.forward(i as isize), mirrored.forward(j as isize), d + 1);
            if (1..=d).contains(&l) {
                pairs.push((Factor::new(i, i + l - 1), Factor::new(j, (j + l - 1) % n)));
            }
        }
    }
    Ok(pairs)
}
