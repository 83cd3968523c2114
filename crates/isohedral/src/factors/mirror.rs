//! Mirror factors: arcs equal to the inverse complement of another arc.
//!
//! Anchors come in two kinds. A seam anchor `i` sits between letters `i-1`
//! and `i`; a letter anchor sits in the middle of letter `i`. For a seam
//! anchor the factor spreads `l` letters back and `r` letters forward, and is
//! admissible when the partner read backwards from the partner anchor matches
//! on both sides equally far (`l == r`).

use super::FactorPair;
use crate::algebra::Symbol;
use crate::error::Result;
use crate::word::{longest_match, BoundaryWord, Factor};

/// Maximal factors `A` whose partner `Â = inv_comp(A)` sits antipodally,
/// `n/2` letters further around the cycle.
pub fn admissible_mirror_factors<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Vec<Factor>> {
    let n = word.len();
    let comp = word.complemented()?;
    let half = (n / 2) as isize;
    let mut factors = Vec::new();

    let bound = n / 4;
    for i in 0..n as isize {
        let h = i + half;
        let l = longest_match(comp.backward(i - 1), word.forward(h), bound);
        let r = longest_match(word.forward(i), comp.backward(h - 1), bound);
        if l == r && r > 0 {
            factors.push(Factor::wrapped(i - l as isize, i - 1 + r as isize, n));
        }
    }

    let bound = n.saturating_sub(2) / 4;
    for i in 0..n as isize {
        let h = i + half;
        if word.at(i) != comp.at(h) {
            continue;
        }
        let l = longest_match(comp.backward(i - 1), word.forward(h + 1), bound);
        let r = longest_match(word.forward(i + 1), comp.backward(h - 1), bound);
        if l == r {
            factors.push(Factor::wrapped(i - l as isize, i + r as isize, n));
        }
    }
    Ok(factors)
}

/// Maximal pairs `(A, Â)` with `Â = inv_comp(A)` anchored at any two
/// positions `i < j`; the gap between them is unconstrained.
pub fn admissible_gapped_mirror_factor_pairs<S: Symbol>(
    word: &BoundaryWord<'_, S>,
) -> Result<Vec<FactorPair>> {
    let n = word.len() as isize;
    let comp = word.complemented()?;
    let nu = word.len();
    let mut pairs = Vec::new();

    for i in 0..n {
        for j in i + 1..n {
            let l = longest_match(comp.backward(i - 1), word.forward(j), ((i + n - j) / 2) as usize);
            let r = longest_match(word.forward(i), comp.backward(j - 1), ((j - i) / 2) as usize);
            if l == r && r > 0 {
                let (l, r) = (l as isize, r as isize);
                pairs.push((
                    Factor::wrapped(i - l, i - 1 + r, nu),
                    Factor::wrapped(j - l, j - 1 + r, nu),
                ));
            }
        }
    }

    for i in 0..n {
        for j in i + 1..n {
            if word.at(i) != comp.at(j) {
                continue;
            }
            let l = longest_match(
                comp.backward(i - 1),
                word.forward(j + 1),
                ((i + n - j - 1) / 2) as usize,
            );
            let r = longest_match(word.forward(i + 1), comp.backward(j - 1), ((j - i - 1) / 2) as usize);
            if l == r {
                let (l, r) = (l as isize, r as isize);
                pairs.push((
                    Factor::wrapped(i - l, i + r, nu),
                    Factor::wrapped(j - l, j + r, nu),
                ));
            }
        }
    }
    Ok(pairs)
}
