//! Buy quotes
//!
//! Spend → shares. After the fee is taken, the net spend must equal the cost
//! difference `C(q + s·e) - C(q)`; `s` is found with Newton's method using the
//! outcome price as the exact derivative, with bisection as the fallback.

use tracing::debug;

use crate::{
    config::SolverConfig,
    error::LmsrResult,
    fees::{gross_for_net, net_after_fee},
    math::{
        conversion::{ceil_to_ledger, floor_to_ledger, ledger_to_f64},
        solver::solve_increasing,
    },
};

use super::{
    cost::{cost_increase, purchase_cost},
    pricing::marginal_price,
    types::{BuyQuote, MarketSnapshot, Outcome},
};

/// Quote a purchase of `outcome` for `gross_amount` (fee included)
pub fn quote_buy(
    outcome: Outcome,
    gross_amount: u128,
    snapshot: &MarketSnapshot,
    fee_rate_bps: u16,
    solver: &SolverConfig,
) -> LmsrResult<BuyQuote> {
    snapshot.validate()?;
    let split = net_after_fee(gross_amount, fee_rate_bps)?;

    let mut quote = BuyQuote {
        outcome,
        gross_amount,
        fee: split.fee,
        net_amount: split.net,
        shares: 0,
    };

    // A fee that eats the whole spend is a valid, empty trade
    if split.net == 0 {
        debug!(?outcome, gross_amount, fee = split.fee, "buy nets to zero after fee");
        return Ok(quote);
    }

    let net = ledger_to_f64(split.net);
    let root = solve_shares(outcome, net, snapshot, solver)?;
    // Never hand out more shares than the net spend pays for
    let mut shares = floor_to_ledger(root)?;

    // Price only rises while buying, so `net / p` bounds the share count
    let current = marginal_price(snapshot.gap(outcome));
    if current > 0.0 {
        shares = shares.min(floor_to_ledger(net / current)?);
    }
    quote.shares = shares;

    debug!(
        ?outcome,
        gross_amount,
        fee = quote.fee,
        net = quote.net_amount,
        shares = quote.shares,
        "buy quote"
    );

    Ok(quote)
}

/// Shares received for `gross_amount`
pub fn shares_for_spend(
    outcome: Outcome,
    gross_amount: u128,
    snapshot: &MarketSnapshot,
    fee_rate_bps: u16,
    solver: &SolverConfig,
) -> LmsrResult<u128> {
    Ok(quote_buy(outcome, gross_amount, snapshot, fee_rate_bps, solver)?.shares)
}

/// Solve `C(q + s·e) - C(q) = net` for real-valued `s >= 0`
pub fn solve_shares(
    outcome: Outcome,
    net: f64,
    snapshot: &MarketSnapshot,
    solver: &SolverConfig,
) -> LmsrResult<f64> {
    snapshot.validate()?;
    let b = snapshot.b;
    let gap = snapshot.gap(outcome);

    let objective = |s: f64| -> LmsrResult<(f64, f64)> {
        let t = s / b;
        let value = b * cost_increase(gap, t) - net;
        Ok((value, marginal_price(gap - t)))
    };

    // Marginal price is at most 1, so `net` shares never cost more than `net`
    let solution = solve_increasing(objective, net, net, solver)?;
    debug!(
        iterations = solution.iterations,
        method = ?solution.method,
        root = solution.root,
        "share solver finished"
    );

    Ok(solution.root)
}

/// Quote the gross spend needed to buy exactly `shares` of `outcome`
pub fn buy_cost_for_shares(
    outcome: Outcome,
    shares: u128,
    snapshot: &MarketSnapshot,
    fee_rate_bps: u16,
) -> LmsrResult<BuyQuote> {
    let spend = purchase_cost(outcome, ledger_to_f64(shares), snapshot)?;

    // Cost rounds up: the trader pays at least the curve's price
    let required_net = ceil_to_ledger(spend)?;
    let gross_amount = gross_for_net(required_net, fee_rate_bps)?;
    let split = net_after_fee(gross_amount, fee_rate_bps)?;

    Ok(BuyQuote {
        outcome,
        gross_amount,
        fee: split.fee,
        net_amount: split.net,
        shares,
    })
}
