//! Error type shared by the algebra, the word utilities and the deciders.
//!
//! An empty witness is never an error: "this tiling case does not apply" is
//! the normal outcome and is reported as `Ok(None)` / an empty `Vec`.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IsohedralError {
    /// A direction outside the configured alphabet reached the algebra.
    InvalidSymbol { symbol: String },
    /// The boundary word (or the shape it was extracted from) is malformed.
    InvalidInput { reason: String },
    /// The algebra tables are inconsistent.
    InvalidAlgebra { reason: String },
}

impl IsohedralError {
    pub(crate) fn invalid_symbol(symbol: &impl fmt::Debug) -> Self {
        Self::InvalidSymbol {
            symbol: format!("{symbol:?}"),
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_algebra(reason: impl Into<String>) -> Self {
        Self::InvalidAlgebra {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for IsohedralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { symbol } => write!(f, "symbol {symbol} is not in the alphabet"),
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::InvalidAlgebra { reason } => write!(f, "invalid direction algebra: {reason}"),
        }
    }
}

impl std::error::Error for IsohedralError {}

pub type Result<T> = std::result::Result<T, IsohedralError>;
