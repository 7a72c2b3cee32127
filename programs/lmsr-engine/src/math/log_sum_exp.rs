//! Numerically stable exponential pair
//!
//! Cost and prices both read from [`ExpPair`], so the exponentials behind a
//! quote's cost difference and its marginal price are always the same numbers.

/// `e^(a - m)` and `e^(c - m)` with `m = max(a, c)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpPair {
    /// The subtracted maximum
    pub max: f64,
    /// `e^(a - max)`, in `[0, 1]`
    pub first: f64,
    /// `e^(c - max)`, in `[0, 1]`
    pub second: f64,
}

impl ExpPair {
    /// Build the pair for exponents `a` and `c`
    #[inline]
    pub fn new(a: f64, c: f64) -> Self {
        let max = a.max(c);
        Self {
            max,
            first: (a - max).exp(),
            second: (c - max).exp(),
        }
    }

    /// `ln(e^a + e^c)`
    #[inline]
    pub fn log_sum(&self) -> f64 {
        // One of the two terms is exactly 1, so the sum is in [1, 2]
        self.max + (self.first + self.second).ln()
    }

    /// `e^a / (e^a + e^c)`
    #[inline]
    pub fn first_share(&self) -> f64 {
        self.first / (self.first + self.second)
    }
}

/// `ln(e^a + e^c)` without overflow
#[inline]
pub fn log_sum_exp(a: f64, c: f64) -> f64 {
    ExpPair::new(a, c).log_sum()
}

/// `ln(1 + e^x)` without overflow or loss for very negative `x`
#[inline]
pub fn log1p_exp(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}
