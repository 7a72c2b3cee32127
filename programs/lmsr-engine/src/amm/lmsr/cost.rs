//! LMSR cost function
//!
//! `C(q) = b * ln(e^(q_yes/b) + e^(q_no/b))`, evaluated through the shared
//! [`ExpPair`] so large share counts never reach `exp` unscaled.

use crate::{
    error::LmsrResult,
    math::{
        conversion::{ledger_to_f64, validate_quantity},
        log_sum_exp::{log1p_exp, ExpPair},
    },
};

use super::types::{validate_liquidity, MarketSnapshot, Outcome};

/// Stabilized exponentials of `q_yes/b` and `q_no/b`
pub(crate) fn exp_pair(q_yes: f64, q_no: f64, b: f64) -> LmsrResult<ExpPair> {
    validate_liquidity(b)?;
    validate_quantity(q_yes)?;
    validate_quantity(q_no)?;
    Ok(ExpPair::new(q_yes / b, q_no / b))
}

/// Calculate the cost function C(q_yes, q_no)
pub fn cost(q_yes: f64, q_no: f64, b: f64) -> LmsrResult<f64> {
    let pair = exp_pair(q_yes, q_no, b)?;
    Ok(b * pair.log_sum())
}

/// Cost function at a ledger snapshot
///
/// Absolute level only; counts above 2^53 are rounded. Trades are priced with
/// [`purchase_cost`] and [`redemption_value`].
pub fn snapshot_cost(snapshot: &MarketSnapshot) -> LmsrResult<f64> {
    let (q_yes, q_no) = snapshot.quantities();
    cost(q_yes, q_no, snapshot.b)
}

/// `(C(q + t·b·e) - C(q)) / b` for an outcome that trails the other by
/// `gap * b` shares.
///
/// Uses `ln(1 + e^x) = x + ln(1 + e^-x)` to cancel the large terms
/// symbolically, so the result is accurate relative to `t` no matter how large
/// the share counts are.
pub(crate) fn cost_increase(gap: f64, t: f64) -> f64 {
    let after = gap - t;
    if after >= 0.0 {
        // Still the cheaper side after the trade
        log1p_exp(-after) - log1p_exp(-gap)
    } else if gap <= 0.0 {
        t + log1p_exp(after) - log1p_exp(gap)
    } else {
        (t - gap) + log1p_exp(after) - log1p_exp(-gap)
    }
}

/// Cost of issuing `shares` (real-valued) of `outcome` at `snapshot`
pub fn purchase_cost(outcome: Outcome, shares: f64, snapshot: &MarketSnapshot) -> LmsrResult<f64> {
    snapshot.validate()?;
    validate_quantity(shares)?;
    let b = snapshot.b;
    Ok(b * cost_increase(snapshot.gap(outcome), shares / b))
}

/// Cost reduction from redeeming `shares` of `outcome`
///
/// The caller checks `shares` against the outstanding count.
pub fn redemption_value(
    outcome: Outcome,
    shares: u128,
    snapshot: &MarketSnapshot,
) -> LmsrResult<f64> {
    let after = snapshot.with_removed(outcome, shares)?;
    purchase_cost(outcome, ledger_to_f64(shares), &after)
}

/// Worst-case subsidy the market maker can lose on a binary market: `b * ln 2`
pub fn max_maker_loss(b: f64) -> LmsrResult<f64> {
    validate_liquidity(b)?;
    Ok(b * std::f64::consts::LN_2)
}
