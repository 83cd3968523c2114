//! Per-word factor families, computed on first use and kept for every
//! decider that asks again.

use std::cell::OnceCell;
use std::collections::BTreeMap;

use super::index::FactorIndex;
use crate::algebra::Symbol;
use crate::error::{IsohedralError, Result};
use crate::factors::{self, FactorPair};
use crate::word::BoundaryWord;

fn cached<T>(cell: &OnceCell<T>, init: impl FnOnce() -> Result<T>) -> Result<&T> {
    if let Some(v) = cell.get() {
        return Ok(v);
    }
    let v = init()?;
    Ok(cell.get_or_init(|| v))
}

/// A boundary word together with lazily computed factor families.
///
/// A full classification touches each family at most once. Not `Sync`; build
/// one per word and per thread.
pub struct Analysis<'w, 'a, S: Symbol> {
    word: &'w BoundaryWord<'a, S>,
    mirror: OnceCell<FactorIndex>,
    mirror_pairs: OnceCell<Vec<FactorPair>>,
    palindromes: OnceCell<FactorIndex>,
    ninety: OnceCell<FactorIndex>,
    sixty: OnceCell<FactorIndex>,
    one_twenty: OnceCell<FactorIndex>,
    reflect_squares: OnceCell<FactorIndex>,
    reflect_pairs: OnceCell<BTreeMap<i32, Vec<FactorPair>>>,
}

impl<'w, 'a, S: Symbol> Analysis<'w, 'a, S> {
    pub fn new(word: &'w BoundaryWord<'a, S>) -> Self {
        Self {
            word,
            mirror: OnceCell::new(),
            mirror_pairs: OnceCell::new(),
            palindromes: OnceCell::new(),
            ninety: OnceCell::new(),
            sixty: OnceCell::new(),
            one_twenty: OnceCell::new(),
            reflect_squares: OnceCell::new(),
            reflect_pairs: OnceCell::new(),
        }
    }

    #[inline]
    pub fn word(&self) -> &'w BoundaryWord<'a, S> {
        self.word
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Antipodal mirror factors.
    pub fn mirror(&self) -> Result<&FactorIndex> {
        cached(&self.mirror, || {
            FactorIndex::new(factors::admissible_mirror_factors(self.word)?, self.len())
        })
    }

    /// Gapped `(A, Â)` pairs with `A` before `Â`.
    pub fn mirror_pairs(&self) -> Result<&[FactorPair]> {
        cached(&self.mirror_pairs, || factors::admissible_gapped_mirror_factor_pairs(self.word))
            .map(Vec::as_slice)
    }

    pub fn palindromes(&self) -> Result<&FactorIndex> {
        cached(&self.palindromes, || {
            FactorIndex::new(factors::admissible_palindrome_factors(self.word)?, self.len())
        })
    }

    /// θ-dromes for θ in {60, 90, 120}; 180 gives the palindromes.
    pub fn rotadromes(&self, theta: i32) -> Result<&FactorIndex> {
        let cell = match theta {
            180 => return self.palindromes(),
            90 => &self.ninety,
            60 => &self.sixty,
            120 => &self.one_twenty,
            other => {
                return Err(IsohedralError::invalid_input(format!(
                    "no rotadrome family for {other} degrees"
                )))
            }
        };
        cached(cell, || {
            let found = if theta == 90 {
                factors::admissible_rotadrome_factors(self.word, theta)?
            } else {
                factors::admissible_rotation_factors(self.word, theta)?
            };
            FactorIndex::new(found, self.len())
        })
    }

    pub fn reflect_squares(&self) -> Result<&FactorIndex> {
        cached(&self.reflect_squares, || {
            FactorIndex::new(factors::admissible_reflect_square_factors(self.word)?, self.len())
        })
    }

    /// Gapped `(X, f_θ(X))` pairs for axis `theta`, each pair also listed in
    /// reverse order `(f_θ(X), X)`.
    pub fn reflect_pairs(&self, theta: i32) -> Result<&[FactorPair]> {
        let all = cached(&self.reflect_pairs, || {
            let mut all = BTreeMap::new();
            for axis in self.word.algebra().reflection_angles() {
                let mut pairs = factors::admissible_gapped_reflect_square_factor_pairs(self.word, axis)?;
                let reversed: Vec<FactorPair> = pairs.iter().map(|&(a, b)| (b, a)).collect();
                pairs.extend(reversed);
                all.insert(axis, pairs);
            }
            Ok(all)
        })?;
        Ok(all.get(&theta).map(Vec::as_slice).unwrap_or(&[]))
    }
}
