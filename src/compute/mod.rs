//----------------------------------------
// computation mod
//----------------------------------------
pub mod types;

pub use crate::multiplicity::benjamini_hochberg::benjamini_hochberg;
pub use crate::multiplicity::familywise::{familywise_fp_curve, familywise_fp_prob};
pub use crate::sample_size::compute_means_ss::compute_means_ss;
pub use crate::sample_size::compute_proportion_ss::compute_proportion_ss;
pub use crate::sample_size::power::two_sample_t_power;
pub use crate::simulation::count_sim::{run_power_sim, sample_overdispersed_counts};
pub use crate::simulation::welch::welch_t_test;
