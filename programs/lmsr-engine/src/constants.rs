//! Engine-wide constants

/// Basis points in one whole (100%)
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Highest accepted fee rate (basis points)
pub const MAX_FEE_BPS: u16 = 10_000;

/// Default fee (basis points)
pub const DEFAULT_FEE_BPS: u16 = 100; // 1%

/// Absolute residual tolerance for the share solver, scaled by max(1, net spend)
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Newton step budget before falling back to bisection
pub const DEFAULT_MAX_NEWTON_ITERATIONS: u32 = 30;

/// Bisection step budget
pub const DEFAULT_MAX_BISECTION_ITERATIONS: u32 = 200;

/// Doublings allowed while searching for a bisection upper bound
pub const DEFAULT_MAX_BRACKET_DOUBLINGS: u32 = 1024;

/// Allowed deviation of p(YES) + p(NO) from 1
pub const PRICE_SUM_TOLERANCE: f64 = 1e-9;

/// Largest integer an f64 holds exactly (2^53)
pub const MAX_EXACT_F64_INTEGER: u128 = 1 << 53;

/// Ceiling for depth targets; the logit diverges at 1
pub const MAX_DEPTH_PRICE: f64 = 1.0 - 1e-9;
