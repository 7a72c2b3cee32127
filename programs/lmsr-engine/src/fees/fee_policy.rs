//! Ceiling-rounded fee split shared by buy and sell quotes

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{BPS_DENOMINATOR, MAX_FEE_BPS},
    error::{LmsrError, LmsrResult},
};

use super::{FeeRounding, FEE_ROUNDING};

/// An amount split into what the trader keeps and what the protocol takes
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeSplit {
    pub net: u128,
    pub fee: u128,
}

/// Validate a fee rate in basis points
pub fn validate_fee_rate(fee_rate_bps: u16) -> LmsrResult<()> {
    if fee_rate_bps > MAX_FEE_BPS {
        return Err(LmsrError::InvalidFeeRate);
    }
    Ok(())
}

/// Fee owed on `amount`: `amount * fee_rate_bps / 10_000`, rounded per
/// [`FEE_ROUNDING`] (up: `ceil`).
///
/// Splitting `amount` into whole and remainder parts of 10_000 keeps the
/// computation exact for the full `u128` range.
pub fn calculate_fee(amount: u128, fee_rate_bps: u16) -> LmsrResult<u128> {
    validate_fee_rate(fee_rate_bps)?;

    let bps = fee_rate_bps as u128;
    let whole = (amount / BPS_DENOMINATOR) * bps;
    let remainder = (amount % BPS_DENOMINATOR) * bps;
    let remainder_fee = match FEE_ROUNDING {
        FeeRounding::Up => (remainder + BPS_DENOMINATOR - 1) / BPS_DENOMINATOR,
        FeeRounding::Down => remainder / BPS_DENOMINATOR,
    };

    Ok(whole + remainder_fee)
}

/// Split `amount` into net and fee
pub fn net_after_fee(amount: u128, fee_rate_bps: u16) -> LmsrResult<FeeSplit> {
    let fee = calculate_fee(amount, fee_rate_bps)?;
    // fee <= amount whenever the rate is at most 100%
    let net = amount.checked_sub(fee).ok_or(LmsrError::NumericalOverflow)?;
    Ok(FeeSplit { net, fee })
}

/// Smallest gross amount whose net after fee is at least `net`
pub fn gross_for_net(net: u128, fee_rate_bps: u16) -> LmsrResult<u128> {
    validate_fee_rate(fee_rate_bps)?;
    if net == 0 {
        return Ok(0);
    }
    if fee_rate_bps == MAX_FEE_BPS {
        // Every unit goes to the fee
        return Err(LmsrError::InvalidFeeRate);
    }

    let keep_bps = BPS_DENOMINATOR - fee_rate_bps as u128;
    let whole = (net / keep_bps)
        .checked_mul(BPS_DENOMINATOR)
        .ok_or(LmsrError::NumericalOverflow)?;
    let partial = ((net % keep_bps) * BPS_DENOMINATOR + keep_bps - 1) / keep_bps;
    let mut gross = whole.checked_add(partial).ok_or(LmsrError::NumericalOverflow)?;

    // Net is non-decreasing in gross, so walk to the exact minimum
    while net_after_fee(gross, fee_rate_bps)?.net < net {
        gross = gross.checked_add(1).ok_or(LmsrError::NumericalOverflow)?;
    }
    while gross > 0 && net_after_fee(gross - 1, fee_rate_bps)?.net >= net {
        gross -= 1;
    }

    Ok(gross)
}
