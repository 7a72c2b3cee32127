//! Price impact and slippage analysis
//!
//! Read-only previews used to warn a trader before a trade is submitted.

use tracing::{debug, warn};

use crate::{
    config::SolverConfig,
    constants::BPS_DENOMINATOR,
    error::{LmsrError, LmsrResult},
    math::conversion::ledger_to_f64,
};

use super::{
    buy::quote_buy,
    pricing::snapshot_prices,
    sell::quote_sell,
    types::{BuyQuote, MarketSnapshot, Outcome, SellQuote, TradeImpact},
};

/// Price impact of spending `gross_amount` on `outcome`
pub fn buy_impact(
    outcome: Outcome,
    gross_amount: u128,
    snapshot: &MarketSnapshot,
    fee_rate_bps: u16,
    solver: &SolverConfig,
) -> LmsrResult<TradeImpact> {
    Ok(analyze_buy(outcome, gross_amount, snapshot, fee_rate_bps, solver)?.1)
}

/// Price impact of redeeming `shares` of `outcome`
pub fn sell_impact(
    outcome: Outcome,
    shares: u128,
    snapshot: &MarketSnapshot,
    fee_rate_bps: u16,
) -> LmsrResult<TradeImpact> {
    Ok(analyze_sell(outcome, shares, snapshot, fee_rate_bps)?.1)
}

pub(crate) fn analyze_buy(
    outcome: Outcome,
    gross_amount: u128,
    snapshot: &MarketSnapshot,
    fee_rate_bps: u16,
    solver: &SolverConfig,
) -> LmsrResult<(BuyQuote, TradeImpact)> {
    let current_price = snapshot_prices(snapshot)?.of(outcome);
    let quote = quote_buy(outcome, gross_amount, snapshot, fee_rate_bps, solver)?;

    if quote.shares == 0 {
        return Ok((quote, TradeImpact::default()));
    }

    let effective_price = ledger_to_f64(gross_amount) / ledger_to_f64(quote.shares);
    let after = snapshot.with_added(outcome, quote.shares)?;
    let new_price = snapshot_prices(&after)?.of(outcome);

    let impact = build_impact(current_price, effective_price, new_price);
    debug!(?outcome, gross_amount, ?impact, "buy impact");
    Ok((quote, impact))
}

pub(crate) fn analyze_sell(
    outcome: Outcome,
    shares: u128,
    snapshot: &MarketSnapshot,
    fee_rate_bps: u16,
) -> LmsrResult<(SellQuote, TradeImpact)> {
    let current_price = snapshot_prices(snapshot)?.of(outcome);
    let quote = quote_sell(outcome, shares, snapshot, fee_rate_bps)?;

    if shares == 0 {
        return Ok((quote, TradeImpact::default()));
    }

    let effective_price = ledger_to_f64(quote.payout) / ledger_to_f64(shares);
    let after = snapshot.with_removed(outcome, shares)?;
    let new_price = snapshot_prices(&after)?.of(outcome);

    let impact = build_impact(current_price, effective_price, new_price);
    debug!(?outcome, shares, ?impact, "sell impact");
    Ok((quote, impact))
}

fn build_impact(current_price: f64, effective_price: f64, new_price: f64) -> TradeImpact {
    // A price that underflowed to zero has no meaningful relative change
    let relative = |price: f64| {
        if current_price > 0.0 {
            (price - current_price).abs() / current_price
        } else {
            0.0
        }
    };

    TradeImpact {
        current_price,
        effective_price,
        price_impact: relative(effective_price),
        new_price,
        slippage: relative(new_price),
    }
}

/// Reject a trade whose slippage exceeds `max_slippage_bps`
pub fn check_slippage(impact: &TradeImpact, max_slippage_bps: u16) -> LmsrResult<()> {
    let limit = max_slippage_bps as f64 / BPS_DENOMINATOR as f64;
    if impact.slippage > limit {
        warn!(slippage = impact.slippage, limit, "slippage tolerance exceeded");
        return Err(LmsrError::SlippageExceeded);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver() -> SolverConfig {
        SolverConfig::default()
    }

    #[test]
    fn test_reference_buy_impact() {
        let snapshot = MarketSnapshot::fresh(1_000_000.0).unwrap();
        let impact = buy_impact(Outcome::Yes, 100_000, &snapshot, 100, &solver()).unwrap();

        assert_eq!(impact.current_price, 0.5);
        // 100_000 / 189_075
        assert!((impact.effective_price - 0.528_890_652).abs() < 1e-8);
        assert!((impact.price_impact - 0.057_781_304).abs() < 1e-8);
        assert!((impact.new_price - 0.547_128_433).abs() < 1e-8);
        assert!((impact.slippage - 0.094_256_865).abs() < 1e-8);
    }

    #[test]
    fn test_zero_share_trade_has_zero_impact() {
        let snapshot = MarketSnapshot::fresh(1_000.0).unwrap();
        let impact = buy_impact(Outcome::No, 1, &snapshot, 100, &solver()).unwrap();
        assert_eq!(impact, TradeImpact::default());

        let sell = sell_impact(Outcome::Yes, 0, &snapshot, 100).unwrap();
        assert_eq!(sell, TradeImpact::default());
    }

    #[test]
    fn test_sell_moves_price_down() {
        let snapshot = MarketSnapshot::new(50_000, 10_000, 20_000.0).unwrap();
        let impact = sell_impact(Outcome::Yes, 20_000, &snapshot, 50).unwrap();

        assert!(impact.new_price < impact.current_price);
        // Sellers receive less per share than the pre-trade price
        assert!(impact.effective_price < impact.current_price);
        assert!(impact.slippage > 0.0);
    }

    #[test]
    fn test_sell_impact_rejects_oversell() {
        let snapshot = MarketSnapshot::new(5, 0, 20.0).unwrap();
        assert_eq!(
            sell_impact(Outcome::Yes, 6, &snapshot, 0),
            Err(LmsrError::InsufficientShares)
        );
    }

    #[test]
    fn test_slippage_guard() {
        let impact = TradeImpact { slippage: 0.0943, ..TradeImpact::default() };
        assert!(check_slippage(&impact, 1_000).is_ok());
        assert_eq!(check_slippage(&impact, 900), Err(LmsrError::SlippageExceeded));
    }

    #[test]
    fn test_larger_liquidity_means_smaller_impact() {
        let shallow = MarketSnapshot::fresh(10_000.0).unwrap();
        let deep = MarketSnapshot::fresh(1_000_000.0).unwrap();

        let a = buy_impact(Outcome::Yes, 5_000, &shallow, 0, &solver()).unwrap();
        let b = buy_impact(Outcome::Yes, 5_000, &deep, 0, &solver()).unwrap();
        assert!(b.slippage < a.slippage);
        assert!(b.price_impact < a.price_impact);
    }
}
