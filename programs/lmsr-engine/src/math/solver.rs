//! Root finding for monotone increasing functions
//!
//! Newton-Raphson from a caller-provided seed with an exact derivative, falling
//! back to a doubling bracket plus bisection when Newton stalls. Roots are
//! searched on `[0, inf)` only.

use tracing::{debug, error, warn};

use crate::{
    config::SolverConfig,
    error::{LmsrError, LmsrResult},
};

/// Which stage produced the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMethod {
    Newton,
    Bisection,
}

/// Root of `f(x) = 0` with bookkeeping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub root: f64,
    pub iterations: u32,
    pub method: SolveMethod,
}

impl Solution {
    fn newton(root: f64, iterations: u32) -> Self {
        Self { root, iterations, method: SolveMethod::Newton }
    }

    fn bisection(root: f64, iterations: u32) -> Self {
        Self { root, iterations, method: SolveMethod::Bisection }
    }
}

/// Why Newton handed over to bisection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    NonFiniteValue,
    VanishingDerivative,
    NonFiniteStep,
    BudgetExhausted,
}

/// Solve `f(x) = 0` for an increasing `f` with `f(0) <= 0`.
///
/// `f` returns `(value, derivative)`. The residual tolerance is
/// `config.tolerance * max(1, scale)`, where `scale` is the magnitude of the
/// quantity being matched.
pub fn solve_increasing<F>(
    f: F,
    seed: f64,
    scale: f64,
    config: &SolverConfig,
) -> LmsrResult<Solution>
where
    F: Fn(f64) -> LmsrResult<(f64, f64)>,
{
    let tolerance = config.tolerance * scale.abs().max(1.0);

    match newton(&f, seed, tolerance, config)? {
        Ok(solution) => Ok(solution),
        Err(reason) => {
            warn!(?reason, seed, "newton did not converge, falling back to bisection");
            bisect(&f, seed, tolerance, config)
        }
    }
}

fn newton<F>(
    f: &F,
    seed: f64,
    tolerance: f64,
    config: &SolverConfig,
) -> LmsrResult<Result<Solution, Fallback>>
where
    F: Fn(f64) -> LmsrResult<(f64, f64)>,
{
    let mut x = if seed.is_finite() { seed.max(0.0) } else { 0.0 };

    for iteration in 1..=config.max_newton_iterations {
        let (value, derivative) = f(x)?;

        if !value.is_finite() {
            return Ok(Err(Fallback::NonFiniteValue));
        }
        if value.abs() <= tolerance {
            debug!(iteration, root = x, "newton converged on residual");
            return Ok(Ok(Solution::newton(x, iteration)));
        }
        if !derivative.is_finite() || derivative <= f64::MIN_POSITIVE {
            return Ok(Err(Fallback::VanishingDerivative));
        }

        let next = (x - value / derivative).max(0.0);
        if !next.is_finite() {
            return Ok(Err(Fallback::NonFiniteStep));
        }

        // Below this step size the residual is float noise in the cost difference
        let step = (next - x).abs();
        x = next;
        if step <= config.tolerance * x.max(1.0) {
            debug!(iteration, root = x, "newton converged on step size");
            return Ok(Ok(Solution::newton(x, iteration)));
        }
    }

    Ok(Err(Fallback::BudgetExhausted))
}

fn bisect<F>(
    f: &F,
    seed: f64,
    tolerance: f64,
    config: &SolverConfig,
) -> LmsrResult<Solution>
where
    F: Fn(f64) -> LmsrResult<(f64, f64)>,
{
    let mut lo = 0.0f64;
    let mut hi = if seed.is_finite() { seed.max(1.0) } else { 1.0 };

    let mut doublings = 0u32;
    loop {
        let (value, _) = f(hi)?;
        if value.is_nan() {
            error!(hi, "objective is not a number while bracketing");
            return Err(LmsrError::NonConvergence);
        }
        if value >= 0.0 {
            break;
        }
        lo = hi;
        hi *= 2.0;
        doublings += 1;
        if doublings > config.max_bracket_doublings || !hi.is_finite() {
            error!(doublings, lo, "could not bracket root");
            return Err(LmsrError::NonConvergence);
        }
    }

    for iteration in 1..=config.max_bisection_iterations {
        let mid = lo + (hi - lo) / 2.0;
        // Interval no longer splits in f64; lo is the conservative side
        if mid <= lo || mid >= hi {
            return Ok(Solution::bisection(lo, iteration));
        }

        let (value, _) = f(mid)?;
        if !value.is_finite() {
            error!(mid, "objective is not finite during bisection");
            return Err(LmsrError::NonConvergence);
        }
        if value.abs() <= tolerance {
            return Ok(Solution::bisection(mid, iteration));
        }
        if value < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo <= config.tolerance * hi.max(1.0) {
            return Ok(Solution::bisection(lo, iteration));
        }
    }

    error!(lo, hi, "bisection exhausted its iteration budget");
    Err(LmsrError::NonConvergence)
}
