//! Cyclic boundary words and factors.
//!
//! All modular index arithmetic lives here: factors are inclusive `(start, end)`
//! pairs on a cycle of length `n`, a factor with `end < start` wraps through
//! index 0, and every cyclic lookup goes through [`BoundaryWord::at`] with a
//! Euclidean remainder. The finders compare cyclic continuations through
//! [`longest_match`] on lazy iterators, so nothing longer than the match bound
//! is ever materialized.

use std::fmt;

use crate::algebra::{DirectionAlgebra, Symbol};
use crate::error::{IsohedralError, Result};

/// Contiguous cyclic arc `word[start], word[start + 1], …, word[end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Factor {
    pub start: usize,
    pub end: usize,
}

impl Factor {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Factor from possibly negative or overflowing indices, reduced mod `n`.
    #[inline]
    pub fn wrapped(start: isize, end: isize, n: usize) -> Self {
        Self::new(wrap(start, n), wrap(end, n))
    }

    /// `end - start + 1 + n·[end < start]`; always in `[1, n]`.
    #[inline]
    pub fn len(&self, n: usize) -> usize {
        if self.end < self.start {
            self.end + n + 1 - self.start
        } else {
            self.end + 1 - self.start
        }
    }

    /// Index right after the last letter.
    #[inline]
    pub fn after(&self, n: usize) -> usize {
        (self.end + 1) % n
    }

    /// Index right before the first letter.
    #[inline]
    pub fn before(&self, n: usize) -> usize {
        (self.start + n - 1) % n
    }

    /// The arc strictly between `left` and `right`: from the letter after
    /// `left` to the letter before `right`. When the two abut, the result
    /// reads as the full cycle starting after `left`.
    #[inline]
    pub fn between(left: &Factor, right: &Factor, n: usize) -> Self {
        Self::new(left.after(n), right.before(n))
    }

    /// Like [`Factor::between`], but `None` when the two abut.
    #[inline]
    pub fn gap(left: &Factor, right: &Factor, n: usize) -> Option<Self> {
        (left.after(n) != right.start).then(|| Self::between(left, right, n))
    }

    /// The same arc moved `by` letters forward.
    #[inline]
    pub fn shifted(&self, by: usize, n: usize) -> Self {
        Self::new((self.start + by) % n, (self.end + by) % n)
    }

    /// Letters of the factor, in order.
    pub fn letters<S: Symbol>(&self, word: &BoundaryWord<'_, S>) -> Vec<S> {
        let n = word.len();
        (0..self.len(n)).map(|k| word.at_offset(self.start, k)).collect()
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.start, self.end)
    }
}

/// Euclidean remainder of a signed index.
#[inline]
pub fn wrap(i: isize, n: usize) -> usize {
    i.rem_euclid(n as isize) as usize
}

/// Length of the longest common prefix of `a` and `b`, capped at `bound` and
/// at the shorter sequence.
pub fn longest_match<S, A, B>(a: A, b: B, bound: usize) -> usize
where
    S: PartialEq,
    A: IntoIterator<Item = S>,
    B: IntoIterator<Item = S>,
{
    a.into_iter()
        .zip(b)
        .take(bound)
        .take_while(|(x, y)| x == y)
        .count()
}

/// Reverse the word and complement every letter.
pub fn inv_comp<S: Symbol>(word: &[S], alg: &DirectionAlgebra<S>) -> Result<Vec<S>> {
    word.iter().rev().map(|&s| alg.complement(s)).collect()
}

/// A validated, immutable cyclic boundary word bound to its grid algebra.
#[derive(Clone, Debug)]
pub struct BoundaryWord<'a, S: Symbol> {
    letters: Vec<S>,
    algebra: &'a DirectionAlgebra<S>,
}

impl<'a, S: Symbol> BoundaryWord<'a, S> {
    /// Validates once: non-empty and every letter in the algebra's alphabet.
    /// Closure of the path is assumed, not checked.
    pub fn new(letters: Vec<S>, algebra: &'a DirectionAlgebra<S>) -> Result<Self> {
        if letters.is_empty() {
            return Err(IsohedralError::invalid_input("empty boundary word"));
        }
        if let Some(bad) = letters.iter().find(|s| !algebra.contains(s)) {
            return Err(IsohedralError::invalid_symbol(bad));
        }
        Ok(Self { letters, algebra })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    pub fn letters(&self) -> &[S] {
        &self.letters
    }

    #[inline]
    pub fn algebra(&self) -> &'a DirectionAlgebra<S> {
        self.algebra
    }

    /// Letter at a cyclic (possibly negative) index.
    #[inline]
    pub fn at(&self, i: isize) -> S {
        self.letters[wrap(i, self.len())]
    }

    #[inline]
    fn at_offset(&self, start: usize, k: usize) -> S {
        self.letters[(start + k) % self.len()]
    }

    /// Letters `i, i+1, i+2, …` around the cycle, without end.
    pub fn forward(&self, i: isize) -> impl Iterator<Item = S> + '_ {
        (0..).map(move |k: isize| self.at(i + k))
    }

    /// Letters `i, i-1, i-2, …` around the cycle, without end.
    pub fn backward(&self, i: isize) -> impl Iterator<Item = S> + '_ {
        (0..).map(move |k: isize| self.at(i - k))
    }

    /// The word with `f` applied to every letter; same algebra.
    pub fn map(&self, f: impl Fn(S) -> Result<S>) -> Result<Self> {
        let letters = self.letters.iter().map(|&s| f(s)).collect::<Result<Vec<_>>>()?;
        Ok(Self {
            letters,
            algebra: self.algebra,
        })
    }

    /// Every letter complemented (not reversed).
    pub fn complemented(&self) -> Result<Self> {
        self.map(|s| self.algebra.complement(s))
    }

    /// Every letter rotated counterclockwise by `degrees`, or `None` when the
    /// angle is not a multiple of the grid's elementary turn.
    pub fn rotated(&self, degrees: i32) -> Result<Option<Self>> {
        match self.algebra.rotation_steps(degrees) {
            Some(steps) => self.map(|s| self.algebra.rotate_ccw_by(s, steps)).map(Some),
            None => Ok(None),
        }
    }

    /// Every letter reflected across the axis at `theta`.
    pub fn reflected(&self, theta: i32) -> Result<Self> {
        self.map(|s| self.algebra.reflect(theta, s))
    }

    /// `len` letters read forward from `start`, wrapping past the end.
    pub fn cyclic_slice(&self, start: usize, len: usize) -> Vec<S> {
        (0..len).map(|k| self.at_offset(start, k)).collect()
    }

    /// The same boundary traced from `shift` letters later.
    pub fn rotated_start(&self, shift: usize) -> Self {
        Self {
            letters: self.cyclic_slice(shift % self.len(), self.len()),
            algebra: self.algebra,
        }
    }
}

/// True when `factors` are consecutive around the cycle and cover every
/// letter exactly once.
pub fn tiles_cycle(factors: &[Factor], n: usize) -> bool {
    if factors.is_empty() {
        return false;
    }
    let total: usize = factors.iter().map(|f| f.len(n)).sum();
    total == n
        && factors
            .iter()
            .zip(factors.iter().cycle().skip(1))
            .all(|(a, b)| a.after(n) == b.start)
}
