//! AMM implementations

pub mod lmsr;

pub use lmsr::LmsrEngine;
