//! Precision boundary between ledger integers and pricing floats
//!
//! Ledger quantities are `u128`. The pricing math runs in `f64`, which holds
//! integers exactly only up to 2^53; above that the low-order bits are rounded
//! away on the way in. Results come back to the ledger through [`floor_to_ledger`]
//! or [`ceil_to_ledger`], so every rounding direction is explicit at the call site.

use tracing::error;

use crate::{
    constants::MAX_EXACT_F64_INTEGER,
    error::{LmsrError, LmsrResult},
};

/// Convert a ledger quantity to `f64`
#[inline]
pub fn ledger_to_f64(value: u128) -> f64 {
    value as f64
}

/// `a - b` as `f64`, rounded once from the exact integer difference
#[inline]
pub fn signed_difference(a: u128, b: u128) -> f64 {
    if a >= b {
        (a - b) as f64
    } else {
        -((b - a) as f64)
    }
}

/// True when `value` survives the conversion to `f64` unchanged
#[inline]
pub fn is_exact_in_f64(value: u128) -> bool {
    value <= MAX_EXACT_F64_INTEGER
}

/// Round a non-negative float down to ledger units
pub fn floor_to_ledger(value: f64) -> LmsrResult<u128> {
    to_ledger(value.floor(), value)
}

/// Round a non-negative float up to ledger units
pub fn ceil_to_ledger(value: f64) -> LmsrResult<u128> {
    to_ledger(value.ceil(), value)
}

fn to_ledger(rounded: f64, original: f64) -> LmsrResult<u128> {
    if rounded.is_nan() || rounded < 0.0 {
        error!(value = original, "cannot express value in ledger units");
        return Err(LmsrError::NegativeQuantity);
    }
    // u128::MAX as f64 rounds up to 2^128, which is itself out of range
    if rounded >= u128::MAX as f64 {
        error!(value = original, "value exceeds ledger range");
        return Err(LmsrError::NumericalOverflow);
    }
    Ok(rounded as u128)
}

/// Validate a caller-supplied float quantity
pub fn validate_quantity(value: f64) -> LmsrResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(LmsrError::NegativeQuantity);
    }
    Ok(value)
}
