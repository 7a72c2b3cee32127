//! Math module
//!
//! Numerically stable exponentials, ledger/float conversion and the
//! monotone root finder behind buy quotes.

pub mod conversion;
pub mod log_sum_exp;
pub mod solver;

pub use conversion::{ceil_to_ledger, floor_to_ledger, ledger_to_f64, signed_difference};
pub use log_sum_exp::{log1p_exp, log_sum_exp, ExpPair};
pub use solver::{solve_increasing, SolveMethod, Solution};
