//! LMSR pricing engine for binary prediction markets
//!
//! Quotes purchases, redemptions, price impact and depth against a snapshot
//! of a market's outstanding shares. Ledger amounts are `u128` integers;
//! floating point is confined to the pricing math and rounded back
//! explicitly, always in the protocol's favour.

pub mod amm;
pub mod config;
pub mod constants;
pub mod error;
pub mod fees;
pub mod math;

pub use amm::lmsr::{
    BuyQuote, LmsrEngine, MarketDepth, MarketSnapshot, Outcome, OutcomePrices, Quote, SellQuote,
    TradeImpact,
};
pub use config::{EngineConfig, SolverConfig};
pub use error::{LmsrError, LmsrResult};
