//! Sell quotes
//!
//! Shares → payout. Redemption has a closed form, the cost reduction
//! `C(q) - C(q - s·e)`, so no root finding is needed. It is evaluated from the
//! trade size and the share-count gap, never from the two absolute costs.

use tracing::{debug, warn};

use crate::{
    error::{LmsrError, LmsrResult},
    fees::net_after_fee,
    math::conversion::floor_to_ledger,
};

use super::{
    cost::redemption_value,
    types::{MarketSnapshot, Outcome, SellQuote},
};

/// Quote redeeming `shares` of `outcome`
pub fn quote_sell(
    outcome: Outcome,
    shares: u128,
    snapshot: &MarketSnapshot,
    fee_rate_bps: u16,
) -> LmsrResult<SellQuote> {
    snapshot.validate()?;

    let outstanding = snapshot.outstanding(outcome);
    if shares > outstanding {
        warn!(?outcome, shares, outstanding, "sell exceeds outstanding shares");
        return Err(LmsrError::InsufficientShares);
    }

    // Monotone cost makes this non-negative; clamp float noise only
    let gross = redemption_value(outcome, shares, snapshot)?.max(0.0);

    // Whole ledger units, rounded down; a share never redeems for more than 1
    let gross_payout = floor_to_ledger(gross)?.min(shares);
    let split = net_after_fee(gross_payout, fee_rate_bps)?;

    debug!(
        ?outcome,
        shares,
        gross_payout,
        fee = split.fee,
        payout = split.net,
        "sell quote"
    );

    Ok(SellQuote {
        outcome,
        shares,
        gross_payout,
        fee: split.fee,
        payout: split.net,
    })
}

/// Net payout for redeeming `shares`
pub fn payout_for_shares(
    outcome: Outcome,
    shares: u128,
    snapshot: &MarketSnapshot,
    fee_rate_bps: u16,
) -> LmsrResult<u128> {
    Ok(quote_sell(outcome, shares, snapshot, fee_rate_bps)?.payout)
}
