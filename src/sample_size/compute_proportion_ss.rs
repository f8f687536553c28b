use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::PowercomputeErr;
use crate::sample_size::error::SampleSizeErr;

/// Computes total sample size for estimating a proportion to within a
/// margin of error moe at confidence 1 - alpha; p = 0.5 is the
/// conservative worst case, maximizing the binomial variance.
/// maybe_finite_pop applies the finite population correction
/// n / (1 + (n - 1) / N) for sampling without replacement from a
/// bounded population; None, or a population of zero, means infinite.
pub fn compute_proportion_ss(
    p: f64,
    moe: f64,
    alpha: f64,
    maybe_finite_pop: Option<usize>,
) -> Result<usize, PowercomputeErr> {
    //----------------------------------------
    // Check arguments
    if p <= 0.0 || p >= 1.0 {
        return Err(SampleSizeErr::BadProportion(p).into());
    }
    if moe <= 0.0 {
        return Err(SampleSizeErr::BadMarginOfError(moe).into());
    }
    if alpha <= 0.0 || alpha >= 1.0 {
        return Err(SampleSizeErr::BadAlpha(alpha).into());
    }

    //----------------------------------------
    // Wald interval half-width, inverted for n
    let std_normal = Normal::new(0.0, 1.0).unwrap();
    let z = std_normal.inverse_cdf(1. - alpha / 2.);
    let mut n = z.powf(2.0) * p * (1. - p) / moe.powf(2.0);

    if let Some(finite_pop) = maybe_finite_pop
        && finite_pop > 0
    {
        n = n / (1. + (n - 1.) / finite_pop as f64);
    }

    Ok(n.ceil() as usize)
}
