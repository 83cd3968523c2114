//! Tiling case deciders and the isohedral decision.
//!
//! A boundary word admits an isohedral tiling exactly when it factors, as a
//! cycle, into one of a handful of patterns (translation, half-turn,
//! quarter-turn, two reflection kinds, two half-turn-plus-reflection kinds,
//! and three rotation patterns that only exist on 60° grids). Each decider
//! searches one pattern over precomputed factor families and returns a
//! witness: consecutive non-empty factors covering the word exactly once.
//!
//! - `index`: [`FactorIndex`] buckets and the generic closed-chain search.
//! - `analysis`: [`Analysis`], the per-word family cache.
//! - `turns`, `reflections`, `triangular`: the ten deciders.
//!
//! Deciders are pure; "no tiling" is `Ok(None)` (an empty list in the
//! `has_*` helpers), never an error.

mod analysis;
mod index;
mod reflections;
mod triangular;
mod turns;

use std::fmt;
use std::str::FromStr;

pub use analysis::Analysis;
pub use index::{closed_chain, FactorIndex};

use crate::algebra::{DirectionAlgebra, Symbol};
use crate::error::{IsohedralError, Result};
use crate::word::{BoundaryWord, Factor};

/// Consecutive factors covering the word, in cyclic order.
pub type Witness = Vec<Factor>;

/// The ten factorization patterns, in decision order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TilingCase {
    Translation,
    HalfTurn,
    QuarterTurn,
    Type1Reflection,
    Type2Reflection,
    Type1HalfTurnReflection,
    Type2HalfTurnReflection,
    Case7,
    Case8a,
    Case8b,
}

impl TilingCase {
    pub const ALL: [TilingCase; 10] = [
        TilingCase::Translation,
        TilingCase::HalfTurn,
        TilingCase::QuarterTurn,
        TilingCase::Type1Reflection,
        TilingCase::Type2Reflection,
        TilingCase::Type1HalfTurnReflection,
        TilingCase::Type2HalfTurnReflection,
        TilingCase::Case7,
        TilingCase::Case8a,
        TilingCase::Case8b,
    ];

    /// Stable snake_case name, used as a column and JSON key.
    pub fn name(self) -> &'static str {
        match self {
            TilingCase::Translation => "translation",
            TilingCase::HalfTurn => "half_turn",
            TilingCase::QuarterTurn => "quarter_turn",
            TilingCase::Type1Reflection => "type_1_reflection",
            TilingCase::Type2Reflection => "type_2_reflection",
            TilingCase::Type1HalfTurnReflection => "type_1_half_turn_reflection",
            TilingCase::Type2HalfTurnReflection => "type_2_half_turn_reflection",
            TilingCase::Case7 => "case_7",
            TilingCase::Case8a => "case_8a",
            TilingCase::Case8b => "case_8b",
        }
    }

    /// The 60°/120° rotation patterns need a 60° grid.
    pub fn applies_to<S: Symbol>(self, algebra: &DirectionAlgebra<S>) -> bool {
        match self {
            TilingCase::Case7 | TilingCase::Case8a | TilingCase::Case8b => algebra.min_angle() == 60,
            _ => true,
        }
    }

    fn search<S: Symbol>(self, an: &Analysis<'_, '_, S>) -> Result<Option<Witness>> {
        match self {
            TilingCase::Translation => turns::translation(an),
            TilingCase::HalfTurn => turns::half_turn(an),
            TilingCase::QuarterTurn => turns::quarter_turn(an),
            TilingCase::Type1Reflection => reflections::type_1_reflection(an),
            TilingCase::Type2Reflection => reflections::type_2_reflection(an),
            TilingCase::Type1HalfTurnReflection => reflections::type_1_half_turn_reflection(an),
            TilingCase::Type2HalfTurnReflection => reflections::type_2_half_turn_reflection(an),
            TilingCase::Case7 => triangular::case_7(an),
            TilingCase::Case8a => triangular::case_8a(an),
            TilingCase::Case8b => triangular::case_8b(an),
        }
    }
}

impl fmt::Display for TilingCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TilingCase {
    type Err = IsohedralError;

    fn from_str(s: &str) -> Result<Self> {
        TilingCase::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| IsohedralError::invalid_input(format!("unknown tiling case '{s}'")))
    }
}

/// A satisfied case and its witness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tiling {
    pub case: TilingCase,
    pub witness: Witness,
}

impl<'w, 'a, S: Symbol> Analysis<'w, 'a, S> {
    /// Witness for one case; `None` when the case does not apply to the
    /// word's grid or has no factorization.
    pub fn witness(&self, case: TilingCase) -> Result<Option<Witness>> {
        if !case.applies_to(self.word().algebra()) {
            return Ok(None);
        }
        case.search(self)
    }

    /// First satisfied case in decision order.
    pub fn decide(&self) -> Result<Option<Tiling>> {
        for case in TilingCase::ALL {
            if let Some(witness) = self.witness(case)? {
                return Ok(Some(Tiling { case, witness }));
            }
        }
        Ok(None)
    }

    /// Every satisfied case with its witness, in decision order.
    pub fn classify(&self) -> Result<Vec<Tiling>> {
        let mut found = Vec::new();
        for case in TilingCase::ALL {
            if let Some(witness) = self.witness(case)? {
                found.push(Tiling { case, witness });
            }
        }
        Ok(found)
    }
}

fn witness_or_empty<S: Symbol>(word: &BoundaryWord<'_, S>, case: TilingCase) -> Result<Witness> {
    Ok(Analysis::new(word).witness(case)?.unwrap_or_default())
}

pub fn has_translation_tiling<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Witness> {
    witness_or_empty(word, TilingCase::Translation)
}

pub fn has_half_turn_tiling<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Witness> {
    witness_or_empty(word, TilingCase::HalfTurn)
}

pub fn has_quarter_turn_tiling<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Witness> {
    witness_or_empty(word, TilingCase::QuarterTurn)
}

pub fn has_type_1_reflection_tiling<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Witness> {
    witness_or_empty(word, TilingCase::Type1Reflection)
}

pub fn has_type_2_reflection_tiling<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Witness> {
    witness_or_empty(word, TilingCase::Type2Reflection)
}

pub fn has_type_1_half_turn_reflection_tiling<S: Symbol>(
    word: &BoundaryWord<'_, S>,
) -> Result<Witness> {
    witness_or_empty(word, TilingCase::Type1HalfTurnReflection)
}

pub fn has_type_2_half_turn_reflection_tiling<S: Symbol>(
    word: &BoundaryWord<'_, S>,
) -> Result<Witness> {
    witness_or_empty(word, TilingCase::Type2HalfTurnReflection)
}

/// Empty on 90° grids.
pub fn has_case_7_tiling<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Witness> {
    witness_or_empty(word, TilingCase::Case7)
}

/// Empty on 90° grids.
pub fn has_case_8a_tiling<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Witness> {
    witness_or_empty(word, TilingCase::Case8a)
}

/// Empty on 90° grids.
pub fn has_case_8b_tiling<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Witness> {
    witness_or_empty(word, TilingCase::Case8b)
}

/// First satisfied case in decision order, short-circuiting the rest.
pub fn decide<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Option<Tiling>> {
    Analysis::new(word).decide()
}

/// Every satisfied case; no short-circuit.
pub fn classify<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<Vec<Tiling>> {
    Analysis::new(word).classify()
}

pub fn has_isohedral_tiling<S: Symbol>(word: &BoundaryWord<'_, S>) -> Result<bool> {
    Ok(decide(word)?.is_some())
}

#[cfg(test)]
mod tests;
