//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::sync::Once;

use lmsr_engine::{EngineConfig, LmsrEngine, MarketSnapshot};

static TRACING: Once = Once::new();

/// Route engine logs to the test harness; filter with `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Engine at the default 1% fee
pub fn default_engine() -> LmsrEngine {
    init_tracing();
    LmsrEngine::default()
}

pub fn engine_with_fee(fee_rate_bps: u16) -> LmsrEngine {
    init_tracing();
    LmsrEngine::new(EngineConfig { fee_rate_bps, ..EngineConfig::default() })
        .expect("valid fee rate")
}

/// The one-million-liquidity market used by the reference scenarios
pub fn reference_market() -> MarketSnapshot {
    MarketSnapshot::fresh(1_000_000.0).expect("positive liquidity")
}
