//! Position buckets over one factor family, and the searches built on them.

use std::collections::HashSet;

use crate::error::{IsohedralError, Result};
use crate::word::Factor;

/// One factor family bucketed by start and by end index.
#[derive(Clone, Debug, Default)]
pub struct FactorIndex {
    n: usize,
    factors: Vec<Factor>,
    starts: Vec<Vec<Factor>>,
    ends: Vec<Vec<Factor>>,
    members: HashSet<Factor>,
}

impl FactorIndex {
    /// Buckets `factors` on a cycle of length `n`; repeated factors are kept once,
    /// first occurrence wins. Fails when an endpoint is not below `n`.
    pub fn new(factors: impl IntoIterator<Item = Factor>, n: usize) -> Result<Self> {
        let mut idx = Self {
            n,
            factors: Vec::new(),
            starts: vec![Vec::new(); n],
            ends: vec![Vec::new(); n],
            members: HashSet::new(),
        };
        for f in factors {
            if f.start >= n || f.end >= n {
                return Err(IsohedralError::invalid_input(format!(
                    "factor ({}, {}) outside a cycle of length {n}",
                    f.start, f.end
                )));
            }
            if idx.members.insert(f) {
                idx.factors.push(f);
                idx.starts[f.start].push(f);
                idx.ends[f.end].push(f);
            }
        }
        Ok(idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Factors in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = Factor> + '_ {
        self.factors.iter().copied()
    }

    #[inline]
    pub fn starting_at(&self, i: usize) -> &[Factor] {
        self.starts.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn ending_at(&self, i: usize) -> &[Factor] {
        self.ends.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn contains(&self, f: &Factor) -> bool {
        self.members.contains(f)
    }

    /// Membership where an absent arc counts as the empty member.
    #[inline]
    pub fn contains_or_empty(&self, f: Option<Factor>) -> bool {
        f.map_or(true, |f| self.contains(&f))
    }

    /// Split of `f` into one or two consecutive members of this family: a
    /// member equal to `f`, or a member starting at `f.start` followed by one
    /// ending at `f.end`.
    pub fn split_in_two(&self, f: Factor) -> Option<Vec<Factor>> {
        let n = self.n;
        let len = f.len(n);
        for &first in self.starting_at(f.start) {
            let first_len = first.len(n);
            if first_len == len {
                return Some(vec![first]);
            }
            if let Some(&second) = self
                .ending_at(f.end)
                .iter()
                .find(|g| first_len + g.len(n) == len)
            {
                return Some(vec![first, second]);
            }
        }
        None
    }

    /// [`FactorIndex::split_in_two`], with an absent arc splitting into nothing.
    #[inline]
    pub fn split_in_two_or_empty(&self, f: Option<Factor>) -> Option<Vec<Factor>> {
        match f {
            Some(f) => self.split_in_two(f),
            None => Some(Vec::new()),
        }
    }
}

/// First chain `f0 f1 … fk` with `f_t` drawn from `families[t]`, every factor
/// starting right after the previous one ends, and lengths summing to
/// exactly `n`. Such a chain closes up and covers the cycle once.
pub fn closed_chain(families: &[&FactorIndex], n: usize) -> Option<Vec<Factor>> {
    let (first, rest) = families.split_first()?;
    let mut chain = Vec::with_capacity(families.len());
    for f in first.iter() {
        let used = f.len(n);
        if used > n {
            continue;
        }
        chain.clear();
        chain.push(f);
        if extend(rest, n, used, &mut chain) {
            return Some(chain);
        }
    }
    None
}

fn extend(families: &[&FactorIndex], n: usize, used: usize, chain: &mut Vec<Factor>) -> bool {
    let Some((family, rest)) = families.split_first() else {
        return used == n;
    };
    let Some(last) = chain.last().copied() else {
        return false;
    };
    for &f in family.starting_at(last.after(n)) {
        let total = used + f.len(n);
        if total > n {
            continue;
        }
        chain.push(f);
        if extend(rest, n, total, chain) {
            return true;
        }
        chain.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::tiles_cycle;

    fn f(start: usize, end: usize) -> Factor {
        Factor::new(start, end)
    }

    #[test]
    fn buckets_and_dedup() {
        let idx = FactorIndex::new([f(0, 1), f(2, 3), f(0, 1), f(3, 0)], 4).unwrap();
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.starting_at(0), &[f(0, 1)]);
        assert_eq!(idx.ending_at(0), &[f(3, 0)]);
        assert!(idx.starting_at(9).is_empty());
        assert!(idx.contains(&f(2, 3)));
        assert!(!idx.contains(&f(1, 2)));
        assert!(idx.contains_or_empty(None));
    }

    #[test]
    fn two_part_splits() {
        let n = 8;
        let idx = FactorIndex::new([f(0, 2), f(3, 4), f(6, 7), f(5, 7)], n).unwrap();
        assert_eq!(idx.split_in_two(f(0, 2)), Some(vec![f(0, 2)]));
        assert_eq!(idx.split_in_two(f(0, 4)), Some(vec![f(0, 2), f(3, 4)]));
        assert_eq!(idx.split_in_two(f(0, 7)), None);
        assert_eq!(idx.split_in_two(f(1, 4)), None);
        assert_eq!(idx.split_in_two_or_empty(None), Some(Vec::new()));
    }

    #[test]
    fn chains_close_exactly() {
        let n = 6;
        let a = FactorIndex::new([f(0, 1), f(4, 5)], n).unwrap();
        let b = FactorIndex::new([f(2, 5), f(2, 3), f(0, 3)], n).unwrap();
        let chain = closed_chain(&[&a, &b], n).unwrap();
        assert_eq!(chain, vec![f(0, 1), f(2, 5)]);
        assert!(tiles_cycle(&chain, n));

        let chain = closed_chain(&[&a, &b, &a], n).unwrap();
        assert_eq!(chain, vec![f(0, 1), f(2, 3), f(4, 5)]);

        let short = FactorIndex::new([f(0, 0), f(1, 1)], n).unwrap();
        assert!(closed_chain(&[&short, &short], n).is_none());
        assert!(closed_chain(&[], n).is_none());
    }

    #[test]
    fn endpoints_must_lie_on_the_cycle() {
        assert!(matches!(
            FactorIndex::new([f(0, 1), f(4, 0)], 4),
            Err(IsohedralError::InvalidInput { .. })
        ));
        assert!(FactorIndex::new([f(3, 4)], 4).is_err());
        assert!(FactorIndex::new([f(3, 3)], 4).is_ok());
    }
}
