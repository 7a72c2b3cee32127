//! LMSR prices
//!
//! `p_i = e^(q_i/b) / (e^(q_yes/b) + e^(q_no/b))`, read off the same
//! exponentials as the cost function. The price is also the exact derivative
//! of the cost with respect to the outcome's share count.

use crate::{error::LmsrResult, math::log_sum_exp::ExpPair};

use super::{
    cost::exp_pair,
    types::{MarketSnapshot, Outcome, OutcomePrices},
};

/// Calculate prices for both outcomes
pub fn prices(q_yes: f64, q_no: f64, b: f64) -> LmsrResult<OutcomePrices> {
    let pair = exp_pair(q_yes, q_no, b)?;
    Ok(prices_from_pair(&pair))
}

/// Prices from exponentials already computed for a cost evaluation
fn prices_from_pair(pair: &ExpPair) -> OutcomePrices {
    let yes = pair.first_share();
    OutcomePrices { yes, no: 1.0 - yes }
}

/// Calculate price for one outcome
pub fn price(outcome: Outcome, q_yes: f64, q_no: f64, b: f64) -> LmsrResult<f64> {
    Ok(prices(q_yes, q_no, b)?.of(outcome))
}

/// Price of an outcome whose share count trails the other's by `gap * b`.
///
/// This is `dC/dq` for that outcome, the slope Newton follows when solving
/// for shares.
pub fn marginal_price(gap: f64) -> f64 {
    ExpPair::new(0.0, gap).first_share()
}

/// Prices at a ledger snapshot
pub fn snapshot_prices(snapshot: &MarketSnapshot) -> LmsrResult<OutcomePrices> {
    snapshot.validate()?;
    let yes = marginal_price(snapshot.gap(Outcome::Yes));
    Ok(OutcomePrices { yes, no: 1.0 - yes })
}
