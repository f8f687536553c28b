//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide utility functions for sizing
//! studies and estimating statistical power: sample sizes for two-sample
//! mean comparisons and margin-of-error proportion estimates, familywise
//! false positive risk under multiple testing, and Monte Carlo power for
//! skewed count outcomes.

/// This module houses the public API for computing sample sizes, power,
/// and multiple testing adjustments
pub mod compute;
/// This module contains error types
pub mod error;
mod multiplicity;
mod sample_size;
mod simulation;
mod util;
