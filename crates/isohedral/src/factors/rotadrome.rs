//! Rotadromes: factors that read the same backwards after a fixed rotation.
//!
//! A θ-drome is an even-length factor whose first half, read backwards, is
//! its second half rotated by `180 - θ`. A 180-drome is an ordinary
//! palindrome (odd lengths included); a 90-drome is a side of a
//! quarter-turn tile.

use crate::algebra::Symbol;
use crate::error::Result;
use crate::word::{longest_match, BoundaryWord, Factor};

/// Maximal θ-dromes of the word, where the letter-wise rotation is
/// `180 - θ` degrees counterclockwise.
///
/// Returns nothing when `180 - θ` is not a multiple of the grid's elementary
/// turn. Odd-length palindromes (centred on a letter) are only searched for
/// `θ = 180`; a rotadrome for any other angle cannot have a middle letter.
pub fn admissible_rotadrome_factors<S: Symbol>(
    word: &BoundaryWord<'_, S>,
    theta: i32,
) -> Result<Vec<Factor>> {
    let n = word.len();
    let Some(rot) = word.rotated(180 - theta)? else {
        return Ok(Vec::new());
    };
    let mut factors = Vec::new();

    for i in 0..n as isize {
        let l = longest_match(word.backward(i - 1), rot.forward(i), n / 2);
        if l > 0 {
            let l = l as isize;
            factors.push(Factor::wrapped(i - l, i - 1 + l, n));
        }
    }

    if theta == 180 {
        // a palindrome centred on a letter spans at most n-1 letters
        let bound = (n - 1) / 2;
        for i in 0..n as isize {
            let l = longest_match(word.backward(i - 1), word.forward(i + 1), bound) as isize;
            factors.push(Factor::wrapped(i - l, i + l, n));
        }
    }
    Ok(factors)
}

/// Maximal palindromes.
#[inline]
pub fn admissible_palindrome_factors<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Vec<Factor>> {
    admissible_rotadrome_factors(word, 180)
}

/// Sides admissible in the 60° and 120° rotation tilings.
///
/// These are exactly the θ-dromes for the same angle, so this delegates.
#[inline]
pub fn admissible_rotation_factors<S: Symbol>(
    word: &BoundaryWord<'_, S>,
    theta: i32,
) -> Result<Vec<Factor>> {
    admissible_rotadrome_factors(word, theta)
}
