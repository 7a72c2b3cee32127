//! Engine configuration with validation
//!
//! Loaded from defaults, the environment or a TOML document.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::{
    constants::{
        DEFAULT_FEE_BPS, DEFAULT_MAX_BISECTION_ITERATIONS, DEFAULT_MAX_BRACKET_DOUBLINGS,
        DEFAULT_MAX_NEWTON_ITERATIONS, DEFAULT_TOLERANCE, MAX_FEE_BPS,
    },
    error::{LmsrError, LmsrResult},
};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Platform fee charged on buys and sells (basis points)
    pub fee_rate_bps: u16,

    /// Share solver settings
    pub solver: SolverConfig,
}

/// Share solver settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub tolerance: f64,
    pub max_newton_iterations: u32,
    pub max_bisection_iterations: u32,
    pub max_bracket_doublings: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fee_rate_bps: DEFAULT_FEE_BPS,
            solver: SolverConfig::default(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_newton_iterations: DEFAULT_MAX_NEWTON_ITERATIONS,
            max_bisection_iterations: DEFAULT_MAX_BISECTION_ITERATIONS,
            max_bracket_doublings: DEFAULT_MAX_BRACKET_DOUBLINGS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment, defaulting unset variables
    pub fn from_env() -> LmsrResult<Self> {
        let config = EngineConfig {
            fee_rate_bps: env_or("LMSR_FEE_RATE_BPS", DEFAULT_FEE_BPS)?,
            solver: SolverConfig {
                tolerance: env_or("LMSR_TOLERANCE", DEFAULT_TOLERANCE)?,
                max_newton_iterations: env_or(
                    "LMSR_MAX_NEWTON_ITERATIONS",
                    DEFAULT_MAX_NEWTON_ITERATIONS,
                )?,
                max_bisection_iterations: env_or(
                    "LMSR_MAX_BISECTION_ITERATIONS",
                    DEFAULT_MAX_BISECTION_ITERATIONS,
                )?,
                max_bracket_doublings: env_or(
                    "LMSR_MAX_BRACKET_DOUBLINGS",
                    DEFAULT_MAX_BRACKET_DOUBLINGS,
                )?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML document; missing keys take defaults
    pub fn from_toml_str(content: &str) -> LmsrResult<Self> {
        let config: EngineConfig = toml::from_str(content).map_err(|e| {
            tracing::error!(error = %e, "failed to parse engine configuration");
            LmsrError::InvalidConfiguration
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> LmsrResult<()> {
        if self.fee_rate_bps > MAX_FEE_BPS {
            return Err(LmsrError::InvalidFeeRate);
        }
        self.solver.validate()
    }
}

impl SolverConfig {
    /// Validate solver settings
    pub fn validate(&self) -> LmsrResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(LmsrError::InvalidConfiguration);
        }
        if self.max_newton_iterations == 0
            || self.max_bisection_iterations == 0
            || self.max_bracket_doublings == 0
        {
            return Err(LmsrError::InvalidConfiguration);
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> LmsrResult<T> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            tracing::error!(key, value = %raw, "invalid configuration value");
            LmsrError::InvalidConfiguration
        }),
        Err(_) => Ok(default),
    }
}
