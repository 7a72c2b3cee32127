//! Market depth
//!
//! For a binary LMSR market `ln(p_yes / p_no) = (q_yes - q_no) / b`, so the
//! share count that lifts an outcome to a target price has a closed form.

use tracing::debug;

use crate::{
    constants::{BPS_DENOMINATOR, MAX_DEPTH_PRICE},
    error::LmsrResult,
    math::conversion::{ceil_to_ledger, floor_to_ledger, ledger_to_f64},
};

use super::{
    cost::purchase_cost,
    pricing::snapshot_prices,
    types::{MarketDepth, MarketSnapshot, Outcome},
};

/// Largest purchase of `outcome` that keeps its price within `max_impact_bps`
/// of the current price
pub fn market_depth(
    outcome: Outcome,
    snapshot: &MarketSnapshot,
    max_impact_bps: u16,
) -> LmsrResult<MarketDepth> {
    let current = snapshot_prices(snapshot)?.of(outcome);
    let growth = 1.0 + max_impact_bps as f64 / BPS_DENOMINATOR as f64;
    let target_price = (current * growth).min(MAX_DEPTH_PRICE);

    let empty = MarketDepth {
        outcome,
        shares: 0,
        cost: 0,
        target_price: target_price.max(current),
    };
    if current <= 0.0 || target_price <= current {
        return Ok(empty);
    }

    // Price is `1 / (1 + e^gap)`, so the target is reached at `gap = -logit(target)`
    let target_logit = (target_price / (1.0 - target_price)).ln();
    let raw = (snapshot.b * (target_logit + snapshot.gap(outcome))).max(0.0);

    // Rounding down keeps the post-trade price inside the budget
    let shares = floor_to_ledger(raw)?;
    if shares == 0 {
        return Ok(empty);
    }

    let spend = purchase_cost(outcome, ledger_to_f64(shares), snapshot)?;
    let depth = MarketDepth {
        outcome,
        shares,
        cost: ceil_to_ledger(spend)?,
        target_price,
    };

    debug!(?outcome, max_impact_bps, ?depth, "market depth");
    Ok(depth)
}
