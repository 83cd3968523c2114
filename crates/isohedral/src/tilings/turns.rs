//! Translation, half-turn and quarter-turn tilings.

use super::analysis::Analysis;
use super::index::closed_chain;
use super::Witness;
use crate::algebra::Symbol;
use crate::error::Result;
use crate::word::Factor;

/// `A B C Â B̂ Ĉ`, with `C` possibly empty; every hatted factor sits exactly
/// half the word after its partner.
pub(super) fn translation<S: Symbol>(an: &Analysis<'_, '_, S>) -> Result<Option<Witness>> {
    let n = an.len();
    if n % 2 != 0 {
        return Ok(None);
    }
    let half = n / 2;
    let mirror = an.mirror()?;
    for a in mirror.iter() {
        for &b in mirror.starting_at(a.after(n)) {
            let ab = a.len(n) + b.len(n);
            if ab > half {
                continue;
            }
            let (a_hat, b_hat) = (a.shifted(half, n), b.shifted(half, n));
            if ab == half {
                return Ok(Some(vec![a, b, a_hat, b_hat]));
            }
            let c = Factor::new(b.after(n), (a.start + half + n - 1) % n);
            if mirror.contains(&c) {
                return Ok(Some(vec![a, b, c, a_hat, b_hat, c.shifted(half, n)]));
            }
        }
    }
    Ok(None)
}

/// `A B Â C` with `B` and `C` each a double palindrome, or with no mirror
/// factor at all: two double palindromes.
pub(super) fn half_turn<S: Symbol>(an: &Analysis<'_, '_, S>) -> Result<Option<Witness>> {
    let n = an.len();
    let pal = an.palindromes()?;
    for &(a, a_hat) in an.mirror_pairs()? {
        let Some(left) = pal.split_in_two_or_empty(Factor::gap(&a, &a_hat, n)) else {
            continue;
        };
        let Some(right) = pal.split_in_two_or_empty(Factor::gap(&a_hat, &a, n)) else {
            continue;
        };
        let mut witness = vec![a];
        witness.extend(left);
        witness.push(a_hat);
        witness.extend(right);
        return Ok(Some(witness));
    }

    for i in 0..n {
        for j in i + 1..n {
            let first = Factor::new(i, j - 1);
            let second = Factor::new(j, (i + n - 1) % n);
            if let (Some(mut witness), Some(rest)) = (pal.split_in_two(first), pal.split_in_two(second)) {
                witness.extend(rest);
                return Ok(Some(witness));
            }
        }
    }
    Ok(None)
}

/// `A B C` with `C` a palindrome and `A`, `B` 90-dromes; any one of the
/// three may be empty.
pub(super) fn quarter_turn<S: Symbol>(an: &Analysis<'_, '_, S>) -> Result<Option<Witness>> {
    let n = an.len();
    let pal = an.palindromes()?;
    let ninety = an.rotadromes(90)?;
    Ok(closed_chain(&[pal, ninety], n)
        .or_else(|| closed_chain(&[pal, ninety, ninety], n))
        .or_else(|| closed_chain(&[ninety, ninety], n)))
}
