//! LMSR (Logarithmic Market Scoring Rule) pricing for binary markets

pub mod buy;
pub mod cost;
pub mod depth;
pub mod engine;
pub mod impact;
pub mod pricing;
pub mod sell;
pub mod types;

pub use buy::{buy_cost_for_shares, quote_buy, shares_for_spend, solve_shares};
pub use cost::{cost, max_maker_loss, purchase_cost, redemption_value, snapshot_cost};
pub use depth::market_depth;
pub use engine::LmsrEngine;
pub use impact::{buy_impact, check_slippage, sell_impact};
pub use pricing::{marginal_price, price, prices, snapshot_prices};
pub use sell::{payout_for_shares, quote_sell};
pub use types::*;
