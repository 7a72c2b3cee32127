//! Fee module
//!
//! One rounding rule for both sides of a trade: the fee is the ceiling of
//! `amount * rate / 10_000` in ledger units, so rounding always favours the
//! protocol. This matches the settlement backend's integer settlement and is
//! pinned by the golden tests under `tests/`.

pub mod fee_policy;

pub use fee_policy::*;

/// Rounding direction for fractional fees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeRounding {
    /// Round toward the protocol
    Up,
    /// Round toward the trader
    Down,
}

/// Fee rounding used for every quote. Must agree with settlement.
pub const FEE_ROUNDING: FeeRounding = FeeRounding::Up;
