//! Tilings whose tile group contains reflections (glide or mirror edges).

use std::collections::HashMap;

use super::analysis::Analysis;
use super::index::closed_chain;
use super::Witness;
use crate::algebra::{DirectionAlgebra, Symbol};
use crate::error::Result;
use crate::factors::FactorPair;
use crate::word::Factor;

/// Reflect pairs keyed by the arc they span, `(f.start, cf.end)`.
type Tips = HashMap<Factor, Vec<FactorPair>>;

fn tips_by_span(pairs: &[FactorPair]) -> Tips {
    let mut tips = Tips::new();
    for &(f, cf) in pairs {
        tips.entry(Factor::new(f.start, cf.end)).or_default().push((f, cf));
    }
    tips
}

/// Peels up to `depth` nested reflect pairs off `span` from both ends until
/// the arc left in the middle has exactly `core_len` letters. Returns the
/// pairs outermost first and the middle arc (`None` when empty).
fn peel(
    tips: &Tips,
    span: Factor,
    core_len: usize,
    depth: usize,
    n: usize,
) -> Option<(Vec<FactorPair>, Option<Factor>)> {
    if depth == 0 {
        return None;
    }
    for &(f, cf) in tips.get(&span).into_iter().flatten() {
        let core = Factor::gap(&f, &cf, n);
        if core.map_or(0, |c| c.len(n)) == core_len {
            return Some((vec![(f, cf)], core));
        }
        if let Some(inner) = core.and_then(|c| peel(tips, c, core_len, depth - 1, n)) {
            let (mut layers, core) = inner;
            layers.insert(0, (f, cf));
            return Some((layers, core));
        }
    }
    None
}

fn nested_witness(head: Option<Factor>, layers: &[FactorPair], core: Option<Factor>) -> Witness {
    let mut witness: Witness = head.into_iter().collect();
    witness.extend(layers.iter().map(|&(f, _)| f));
    witness.extend(core);
    witness.extend(layers.iter().rev().map(|&(_, cf)| cf));
    witness
}

/// `A B Â C` with `B` and `C` reflect squares, or two reflect squares.
pub(super) fn type_1_reflection<S: Symbol>(an: &Analysis<'_, '_, S>) -> Result<Option<Witness>> {
    let n = an.len();
    let squares = an.reflect_squares()?;
    for &(a, a_hat) in an.mirror_pairs()? {
        let first = Factor::gap(&a, &a_hat, n);
        let second = Factor::gap(&a_hat, &a, n);
        if squares.contains_or_empty(first) && squares.contains_or_empty(second) {
            let mut witness = vec![a];
            witness.extend(first);
            witness.push(a_hat);
            witness.extend(second);
            return Ok(Some(witness));
        }
    }
    Ok(closed_chain(&[squares, squares], n))
}

/// `A B C Â f(C) f(B)` for one axis θ, where `A` is a mirror factor (possibly
/// empty) and `(B, f(B))`, `(C, f(C))` are nested θ-reflect pairs.
pub(super) fn type_2_reflection<S: Symbol>(an: &Analysis<'_, '_, S>) -> Result<Option<Witness>> {
    let n = an.len();
    let mirror = an.mirror()?;
    for theta in an.word().algebra().reflection_angles() {
        let tips = tips_by_span(an.reflect_pairs(theta)?);
        if tips.is_empty() {
            continue;
        }
        for a in mirror.iter() {
            let rest = Factor::new(a.after(n), a.before(n));
            if let Some((layers, core)) = peel(&tips, rest, a.len(n), 2, n) {
                return Ok(Some(nested_witness(Some(a), &layers, core)));
            }
        }
        for i in 0..n {
            let whole = Factor::new((i + 1) % n, i);
            if let Some((layers, core)) = peel(&tips, whole, 0, 2, n) {
                return Ok(Some(nested_witness(None, &layers, core)));
            }
        }
    }
    Ok(None)
}

/// `A B Â C` with `B` a double palindrome and `C` a reflect square (either
/// orientation of the mirror pair), or a reflect square followed by a double
/// palindrome.
pub(super) fn type_1_half_turn_reflection<S: Symbol>(
    an: &Analysis<'_, '_, S>,
) -> Result<Option<Witness>> {
    let n = an.len();
    let pal = an.palindromes()?;
    let squares = an.reflect_squares()?;
    for &(p, q) in an.mirror_pairs()? {
        for (a, a_hat) in [(p, q), (q, p)] {
            let square = Factor::gap(&a_hat, &a, n);
            if !squares.contains_or_empty(square) {
                continue;
            }
            if let Some(parts) = pal.split_in_two_or_empty(Factor::gap(&a, &a_hat, n)) {
                let mut witness = vec![a];
                witness.extend(parts);
                witness.push(a_hat);
                witness.extend(square);
                return Ok(Some(witness));
            }
        }
    }
    for square in squares.iter() {
        if let Some(parts) = pal.split_in_two_or_empty(Factor::gap(&square, &square, n)) {
            let mut witness = vec![square];
            witness.extend(parts);
            return Ok(Some(witness));
        }
    }
    Ok(None)
}

/// `B D A f(B) C f'(D)` where `(B, f(B))` is a reflect pair for θ,
/// `(D, f'(D))` one for the perpendicular axis, and `A`, `C` palindromes
/// (each possibly empty). With `D` empty, `A` and `C` are both palindromes;
/// with `B` empty, the arc between `D` and `f'(D)` is a double palindrome.
pub(super) fn type_2_half_turn_reflection<S: Symbol>(
    an: &Analysis<'_, '_, S>,
) -> Result<Option<Witness>> {
    let n = an.len();
    let pal = an.palindromes()?;
    for theta in an.word().algebra().reflection_angles() {
        let perpendicular = DirectionAlgebra::<S>::perpendicular(theta);
        let inner_pairs = an.reflect_pairs(perpendicular)?;
        let inner = tips_by_span(inner_pairs);

        for &(f1, cf1) in an.reflect_pairs(theta)? {
            let a = Factor::gap(&f1, &cf1, n);
            let c = Factor::gap(&cf1, &f1, n);
            if pal.contains_or_empty(a) && pal.contains_or_empty(c) {
                let mut witness = vec![f1];
                witness.extend(a);
                witness.push(cf1);
                witness.extend(c);
                return Ok(Some(witness));
            }

            let span = Factor::new(f1.after(n), f1.before(n));
            for &(f2, cf2) in inner.get(&span).into_iter().flatten() {
                let a = Factor::gap(&f2, &cf1, n);
                let c = Factor::gap(&cf1, &cf2, n);
                if !(pal.contains_or_empty(a) && pal.contains_or_empty(c)) {
                    continue;
                }
                let mut witness = vec![f1, f2];
                witness.extend(a);
                witness.push(cf1);
                witness.extend(c);
                witness.push(cf2);
                if witness.iter().map(|f| f.len(n)).sum::<usize>() == n {
                    return Ok(Some(witness));
                }
            }
        }

        for &(d, fd) in inner_pairs {
            if fd.after(n) != d.start {
                continue;
            }
            if let Some(parts) = pal.split_in_two_or_empty(Factor::gap(&d, &fd, n)) {
                let mut witness = vec![d];
                witness.extend(parts);
                witness.push(fd);
                return Ok(Some(witness));
            }
        }
    }
    Ok(None)
}
