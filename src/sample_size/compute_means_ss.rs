use crate::error::PowercomputeErr;
use crate::sample_size::error::SampleSizeErr;
use crate::sample_size::power::two_sample_t_power_helper;
use crate::sample_size::types::MeansSampleSize;
use crate::util::root_find::root_find_monotonic;

/// Computes per-group sample size for a two-sided two-sample t-test
/// (equal group sizes, common variance) to detect mean difference delta
/// at significance alpha with the given target power.
/// Power is monotonically increasing in n, so the continuous solve is a
/// root find over per-group size; the result is rounded up to the next
/// whole subject, and the total is twice the per-group size.
/// tol indicates how close the continuous solve should get to the
/// target power before stopping.
pub fn compute_means_ss(
    delta: f64,
    sd: f64,
    alpha: f64,
    target_power: f64,
    tol: f64,
) -> Result<MeansSampleSize, PowercomputeErr> {
    //----------------------------------------
    // Check arguments
    if delta <= 0.0 {
        return Err(SampleSizeErr::BadMeanDiff(delta).into());
    }
    if sd <= 0.0 {
        return Err(SampleSizeErr::BadSd(sd).into());
    }
    if alpha <= 0.0 || alpha >= 1.0 {
        return Err(SampleSizeErr::BadAlpha(alpha).into());
    }
    if target_power <= 0.0 || target_power >= 1.0 {
        return Err(SampleSizeErr::BadTargetPower(target_power).into());
    }

    //----------------------------------------
    // Solve power(n) = target over continuous n
    let effect_size = delta / sd;
    let power_by_n = |n: f64| two_sample_t_power_helper(effect_size, n, alpha);

    // Two per group is the smallest whole size with positive degrees of
    // freedom, so it is both the lower bracket and the floor of the answer
    let n_continuous = if power_by_n(2.0) >= target_power {
        2.0
    } else {
        root_find_monotonic(power_by_n, 2.0, target_power, tol)?
    };

    let n_per_group = n_continuous.ceil() as usize;
    Ok(MeansSampleSize {
        effect_size,
        n_per_group,
        n_total: 2 * n_per_group,
    })
}
