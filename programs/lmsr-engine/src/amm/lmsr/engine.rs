//! Engine facade
//!
//! Binds a validated [`EngineConfig`] to the pricing functions. The engine
//! holds no market state; every call prices the snapshot it is given.

use tracing::info;

use crate::{config::EngineConfig, error::LmsrResult};

use super::{
    buy, cost, depth,
    impact::{self, analyze_buy, analyze_sell},
    pricing, sell,
    types::{
        BuyQuote, MarketDepth, MarketSnapshot, Outcome, OutcomePrices, Quote, SellQuote,
        TradeImpact,
    },
};

/// LMSR pricing engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LmsrEngine {
    config: EngineConfig,
}

impl LmsrEngine {
    pub fn new(config: EngineConfig) -> LmsrResult<Self> {
        config.validate()?;
        info!(
            fee_rate_bps = config.fee_rate_bps,
            tolerance = config.solver.tolerance,
            "lmsr engine configured"
        );
        Ok(Self { config })
    }

    /// Engine configured from `LMSR_*` environment variables
    pub fn from_env() -> LmsrResult<Self> {
        Self::new(EngineConfig::from_env()?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn fee_rate_bps(&self) -> u16 {
        self.config.fee_rate_bps
    }

    pub fn cost(&self, snapshot: &MarketSnapshot) -> LmsrResult<f64> {
        cost::snapshot_cost(snapshot)
    }

    pub fn prices(&self, snapshot: &MarketSnapshot) -> LmsrResult<OutcomePrices> {
        pricing::snapshot_prices(snapshot)
    }

    pub fn quote_buy(
        &self,
        outcome: Outcome,
        gross_amount: u128,
        snapshot: &MarketSnapshot,
    ) -> LmsrResult<BuyQuote> {
        buy::quote_buy(
            outcome,
            gross_amount,
            snapshot,
            self.config.fee_rate_bps,
            &self.config.solver,
        )
    }

    pub fn quote_sell(
        &self,
        outcome: Outcome,
        shares: u128,
        snapshot: &MarketSnapshot,
    ) -> LmsrResult<SellQuote> {
        sell::quote_sell(outcome, shares, snapshot, self.config.fee_rate_bps)
    }

    pub fn buy_impact(
        &self,
        outcome: Outcome,
        gross_amount: u128,
        snapshot: &MarketSnapshot,
    ) -> LmsrResult<TradeImpact> {
        impact::buy_impact(
            outcome,
            gross_amount,
            snapshot,
            self.config.fee_rate_bps,
            &self.config.solver,
        )
    }

    pub fn sell_impact(
        &self,
        outcome: Outcome,
        shares: u128,
        snapshot: &MarketSnapshot,
    ) -> LmsrResult<TradeImpact> {
        impact::sell_impact(outcome, shares, snapshot, self.config.fee_rate_bps)
    }

    /// Shares received, fee and impact for spending `gross_amount`
    pub fn buy_quote(
        &self,
        outcome: Outcome,
        gross_amount: u128,
        snapshot: &MarketSnapshot,
    ) -> LmsrResult<Quote> {
        let (quote, impact) = analyze_buy(
            outcome,
            gross_amount,
            snapshot,
            self.config.fee_rate_bps,
            &self.config.solver,
        )?;

        Ok(Quote {
            amount: quote.shares,
            effective_price: impact.effective_price,
            fee: quote.fee,
            price_impact: impact.price_impact,
            slippage: impact.slippage,
        })
    }

    /// Net payout, fee and impact for redeeming `shares`
    pub fn sell_quote(
        &self,
        outcome: Outcome,
        shares: u128,
        snapshot: &MarketSnapshot,
    ) -> LmsrResult<Quote> {
        let (quote, impact) = analyze_sell(outcome, shares, snapshot, self.config.fee_rate_bps)?;

        Ok(Quote {
            amount: quote.payout,
            effective_price: impact.effective_price,
            fee: quote.fee,
            price_impact: impact.price_impact,
            slippage: impact.slippage,
        })
    }

    pub fn buy_cost_for_shares(
        &self,
        outcome: Outcome,
        shares: u128,
        snapshot: &MarketSnapshot,
    ) -> LmsrResult<BuyQuote> {
        buy::buy_cost_for_shares(outcome, shares, snapshot, self.config.fee_rate_bps)
    }

    pub fn market_depth(
        &self,
        outcome: Outcome,
        snapshot: &MarketSnapshot,
        max_impact_bps: u16,
    ) -> LmsrResult<MarketDepth> {
        depth::market_depth(outcome, snapshot, max_impact_bps)
    }
}
