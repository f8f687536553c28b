use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::PowercomputeErr;
use crate::sample_size::error::SampleSizeErr;
use crate::sample_size::noncentral_t::noncentral_t_cdf;

/// Power of the two-sided two-sample t-test at the given standardized
/// effect size, assuming equal group sizes and a common variance.
/// n_per_group may be fractional; sizing solves rely on this to treat
/// power as a continuous function of n.
pub fn two_sample_t_power(
    effect_size: f64,
    n_per_group: f64,
    alpha: f64,
) -> Result<f64, PowercomputeErr> {
    if alpha <= 0.0 || alpha >= 1.0 {
        return Err(SampleSizeErr::BadAlpha(alpha).into());
    }
    if n_per_group <= 1.0 {
        return Err(SampleSizeErr::BadGroupSize(n_per_group).into());
    }
    Ok(two_sample_t_power_helper(effect_size, n_per_group, alpha))
}

// Validation-free version for use inside sizing loops, where the
// arguments have already been checked once
pub(crate) fn two_sample_t_power_helper(effect_size: f64, n_per_group: f64, alpha: f64) -> f64 {
    let df = 2. * (n_per_group - 1.);
    let ncp = effect_size * (n_per_group / 2.).sqrt();
    let t_crit = StudentsT::new(0.0, 1.0, df)
        .unwrap()
        .inverse_cdf(1. - alpha / 2.);

    // Rejection mass in each tail under the noncentral alternative
    let lower_exit = noncentral_t_cdf(-t_crit, df, ncp);
    let upper_exit = 1. - noncentral_t_cdf(t_crit, df, ncp);
    (lower_exit + upper_exit).min(1.0)
}
