use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;

use crate::error::PowercomputeErr;
use crate::simulation::error::CountSimErr;
use crate::simulation::types::WelchTTest;

/// Two-sided Welch t-test, which does not assume equal variances across
/// the two samples. Degrees of freedom follow Welch-Satterthwaite and
/// are generally fractional.
/// When neither sample has any spread the statistic is degenerate:
/// identical means give a NaN p-value, distinct means give zero.
pub fn welch_t_test(a: &Vec<f64>, b: &Vec<f64>) -> Result<WelchTTest, PowercomputeErr> {
    //----------------------------------------
    // Check arguments
    if a.len() < 2 {
        return Err(CountSimErr::ShortSample(a.len()).into());
    }
    if b.len() < 2 {
        return Err(CountSimErr::ShortSample(b.len()).into());
    }

    //----------------------------------------
    // Statistic and degrees of freedom
    let n_a = a.len() as f64;
    let n_b = b.len() as f64;
    let mean_a = a.mean();
    let mean_b = b.mean();

    // Squared standard error of each group mean, from the unbiased
    // sample variances
    let sq_se_a = a.variance() / n_a;
    let sq_se_b = b.variance() / n_b;
    let se = (sq_se_a + sq_se_b).sqrt();

    if se == 0.0 {
        return Ok(if mean_a == mean_b {
            WelchTTest {
                t: f64::NAN,
                df: f64::NAN,
                p_value: f64::NAN,
            }
        } else {
            let t = if mean_a > mean_b {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
            WelchTTest {
                t,
                df: f64::NAN,
                p_value: 0.0,
            }
        });
    }

    let t = (mean_a - mean_b) / se;
    let df = (sq_se_a + sq_se_b).powf(2.0)
        / (sq_se_a.powf(2.0) / (n_a - 1.) + sq_se_b.powf(2.0) / (n_b - 1.));

    // NaN observations propagate as a NaN statistic rather than a panic
    // inside the t distribution
    if t.is_nan() {
        return Ok(WelchTTest {
            t,
            df,
            p_value: f64::NAN,
        });
    }

    let t_dist = StudentsT::new(0.0, 1.0, df).unwrap();
    let p_value = 2. * t_dist.cdf(-t.abs());
    Ok(WelchTTest { t, df, p_value })
}
