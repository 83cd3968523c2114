//! Cases that only exist on 60° grids: sides related by 60° and 120°
//! rotations.

use super::analysis::Analysis;
use super::index::closed_chain;
use super::Witness;
use crate::algebra::Symbol;
use crate::error::Result;

/// `A t₁₂₀(A) B t₁₂₀(B) C t₁₂₀(C)`, one of the three possibly empty.
pub(super) fn case_7<S: Symbol>(an: &Analysis<'_, '_, S>) -> Result<Option<Witness>> {
    let n = an.len();
    let t120 = an.rotadromes(120)?;
    Ok(closed_chain(&[t120, t120], n).or_else(|| closed_chain(&[t120, t120, t120], n)))
}

/// `A t₆₀(A) B t₁₂₀(B) C` with `C` a palindrome; any one of the three
/// may be empty.
pub(super) fn case_8a<S: Symbol>(an: &Analysis<'_, '_, S>) -> Result<Option<Witness>> {
    let n = an.len();
    let pal = an.palindromes()?;
    let t60 = an.rotadromes(60)?;
    let t120 = an.rotadromes(120)?;
    Ok(closed_chain(&[pal, t120], n)
        .or_else(|| closed_chain(&[pal, t60], n))
        .or_else(|| closed_chain(&[pal, t60, t120], n))
        .or_else(|| closed_chain(&[t60, t120], n))
        .or_else(|| closed_chain(&[t60, t60], n)))
}

/// `A t₆₀(A) B C t₁₂₀(C)` with `B` a palindrome; any one of the three
/// may be empty.
pub(super) fn case_8b<S: Symbol>(an: &Analysis<'_, '_, S>) -> Result<Option<Witness>> {
    let n = an.len();
    let pal = an.palindromes()?;
    let t60 = an.rotadromes(60)?;
    let t120 = an.rotadromes(120)?;
    Ok(closed_chain(&[pal, t60], n)
        .or_else(|| closed_chain(&[pal, t120], n))
        .or_else(|| closed_chain(&[pal, t120, t60], n))
        .or_else(|| closed_chain(&[t120, t60], n)))
}
