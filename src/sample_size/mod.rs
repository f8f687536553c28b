//----------------------------------------
// sample size mod
//----------------------------------------
pub mod compute_means_ss;
pub mod compute_proportion_ss;
pub mod error;
mod noncentral_t;
pub mod power;
pub mod types;
