//! LMSR market types
//!
//! Snapshot of the ledger state the engine prices against, plus the quote
//! records it hands back. Everything here is plain data, built fresh per call.

use borsh::{BorshDeserialize, BorshSerialize};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{LmsrError, LmsrResult},
    math::conversion::{is_exact_in_f64, ledger_to_f64, signed_difference},
};

/// Binary market outcome, encoded as `u8` on the ledger
#[derive(Serialize, Deserialize, FromPrimitive, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Yes = 0,
    No = 1,
}

impl Outcome {
    /// Decode the ledger's outcome index
    pub fn from_index(index: u8) -> LmsrResult<Self> {
        Self::from_u8(index).ok_or(LmsrError::InvalidOutcome)
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn opposite(&self) -> Self {
        match self {
            Outcome::Yes => Outcome::No,
            Outcome::No => Outcome::Yes,
        }
    }
}

impl BorshSerialize for Outcome {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        BorshSerialize::serialize(&self.index(), writer)
    }
}

impl BorshDeserialize for Outcome {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let index = u8::deserialize_reader(reader)?;
        Self::from_u8(index).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, LmsrError::InvalidOutcome)
        })
    }
}

/// Outstanding shares and liquidity of one market, as of one settlement counter
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    pub q_yes: u128,
    pub q_no: u128,
    /// Liquidity parameter
    pub b: f64,
}

impl MarketSnapshot {
    /// Create a validated snapshot
    pub fn new(q_yes: u128, q_no: u128, b: f64) -> LmsrResult<Self> {
        validate_liquidity(b)?;
        Ok(Self { q_yes, q_no, b })
    }

    /// Snapshot of a market with no shares issued
    pub fn fresh(b: f64) -> LmsrResult<Self> {
        Self::new(0, 0, b)
    }

    /// Re-check the liquidity parameter, e.g. after deserializing
    pub fn validate(&self) -> LmsrResult<()> {
        validate_liquidity(self.b)
    }

    pub fn outstanding(&self, outcome: Outcome) -> u128 {
        match outcome {
            Outcome::Yes => self.q_yes,
            Outcome::No => self.q_no,
        }
    }

    /// The snapshot after issuing `shares` of `outcome`
    pub fn with_added(&self, outcome: Outcome, shares: u128) -> LmsrResult<Self> {
        let mut next = *self;
        let slot = next.slot_mut(outcome);
        *slot = slot.checked_add(shares).ok_or(LmsrError::NumericalOverflow)?;
        Ok(next)
    }

    /// The snapshot after redeeming `shares` of `outcome`
    pub fn with_removed(&self, outcome: Outcome, shares: u128) -> LmsrResult<Self> {
        let mut next = *self;
        let slot = next.slot_mut(outcome);
        *slot = slot.checked_sub(shares).ok_or(LmsrError::InsufficientShares)?;
        Ok(next)
    }

    /// `(q_other - q_outcome) / b`, taken from the exact integer difference.
    ///
    /// The price of `outcome` is `1 / (1 + e^gap)`, so trades can be priced
    /// from the gap and the trade size without rounding either share count.
    pub fn gap(&self, outcome: Outcome) -> f64 {
        let own = self.outstanding(outcome);
        let other = self.outstanding(outcome.opposite());
        signed_difference(other, own) / self.b
    }

    /// Quantities in pricing units, `(q_yes, q_no)`
    pub fn quantities(&self) -> (f64, f64) {
        if !is_exact_in_f64(self.q_yes) || !is_exact_in_f64(self.q_no) {
            debug!(q_yes = self.q_yes, q_no = self.q_no, "share counts rounded for pricing");
        }
        (ledger_to_f64(self.q_yes), ledger_to_f64(self.q_no))
    }

    fn slot_mut(&mut self, outcome: Outcome) -> &mut u128 {
        match outcome {
            Outcome::Yes => &mut self.q_yes,
            Outcome::No => &mut self.q_no,
        }
    }
}

/// Validate the liquidity parameter
pub fn validate_liquidity(b: f64) -> LmsrResult<()> {
    if !b.is_finite() || b <= 0.0 {
        return Err(LmsrError::InvalidLiquidityParameter);
    }
    Ok(())
}

/// Instantaneous prices of both outcomes
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct OutcomePrices {
    pub yes: f64,
    pub no: f64,
}

impl OutcomePrices {
    pub fn of(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Yes => self.yes,
            Outcome::No => self.no,
        }
    }
}

/// Result of spending `gross_amount` on `outcome`
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct BuyQuote {
    pub outcome: Outcome,
    pub gross_amount: u128,
    pub fee: u128,
    pub net_amount: u128,
    pub shares: u128,
}

/// Result of redeeming `shares` of `outcome`
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct SellQuote {
    pub outcome: Outcome,
    pub shares: u128,
    pub gross_payout: u128,
    pub fee: u128,
    pub payout: u128,
}

/// Price movement caused by a proposed trade
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct TradeImpact {
    pub current_price: f64,
    pub effective_price: f64,
    pub price_impact: f64,
    pub new_price: f64,
    pub slippage: f64,
}

/// Caller-facing quote: shares for buys, net payout for sells
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub amount: u128,
    pub effective_price: f64,
    pub fee: u128,
    pub price_impact: f64,
    pub slippage: f64,
}

/// Shares purchasable before the price moves past a budget
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MarketDepth {
    pub outcome: Outcome,
    pub shares: u128,
    /// Cost of those shares before fees, in ledger units (rounded up)
    pub cost: u128,
    pub target_price: f64,
}
