//! Error types for the LMSR engine
//!
//! Codes are stable so the settlement backend and clients can agree on them.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use thiserror::Error;

/// Result alias used across the crate
pub type LmsrResult<T> = Result<T, LmsrError>;

#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum LmsrError {
    // Precondition violations (7000-7009)
    #[error("Liquidity parameter must be positive and finite")]
    InvalidLiquidityParameter = 7000,

    #[error("Quantity must be non-negative and finite")]
    NegativeQuantity = 7001,

    #[error("Invalid fee rate")]
    InvalidFeeRate = 7002,

    #[error("Invalid outcome")]
    InvalidOutcome = 7003,

    #[error("Invalid engine configuration")]
    InvalidConfiguration = 7004,

    // Trade rejections (7010-7019)
    #[error("Insufficient outstanding shares")]
    InsufficientShares = 7010,

    #[error("Slippage tolerance exceeded")]
    SlippageExceeded = 7011,

    // Internal invariants (7020-7029)
    #[error("Share solver did not converge")]
    NonConvergence = 7020,

    #[error("Numerical overflow")]
    NumericalOverflow = 7021,
}

impl LmsrError {
    /// Stable numeric code for this error
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Decode an error from its numeric code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }

    /// True for conditions the caller caused and can fix by changing the trade
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InsufficientShares | Self::SlippageExceeded)
    }
}
