use crate::error::PowercomputeErr;
use crate::multiplicity::error::MultiplicityErr;

/// Probability of at least one false positive across m independent tests
/// each run at per-test level alpha. Alpha is accepted on the closed
/// interval [0, 1]: zero alpha gives zero risk for any m, and a single
/// test gives back alpha.
pub fn familywise_fp_prob(m: usize, alpha: f64) -> Result<f64, PowercomputeErr> {
    if m < 1 {
        return Err(MultiplicityErr::BadTestCount(m).into());
    }
    if alpha < 0.0 || alpha > 1.0 {
        return Err(MultiplicityErr::BadAlpha(alpha).into());
    }
    Ok(1. - (1. - alpha).powf(m as f64))
}

/// Familywise false positive probability at every test count from 1 to
/// max_m, the curve callers plot against m
pub fn familywise_fp_curve(max_m: usize, alpha: f64) -> Result<Vec<f64>, PowercomputeErr> {
    if max_m < 1 {
        return Err(MultiplicityErr::BadTestCount(max_m).into());
    }
    if alpha < 0.0 || alpha > 1.0 {
        return Err(MultiplicityErr::BadAlpha(alpha).into());
    }
    Ok((1..=max_m)
        .map(|m| 1. - (1. - alpha).powf(m as f64))
        .collect())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn twenty_tests_at_05() {
        let risk = familywise_fp_prob(20, 0.05).expect("failed to compute familywise risk");
        assert!((risk - 0.6415140775914581).abs() < 1e-12);
    }

    #[test]
    fn single_test_is_alpha() {
        let risk = familywise_fp_prob(1, 0.05).expect("failed to compute single test risk");
        assert!((risk - 0.05).abs() < 1e-15);
    }

    #[test]
    fn zero_alpha_zero_risk() {
        assert_eq!(
            familywise_fp_prob(17, 0.0).expect("failed to compute zero alpha risk"),
            0.0
        );
    }

    #[test]
    fn monotone_in_test_count() {
        let mut prev = 0.0;
        for m in 1..=200 {
            let cur = familywise_fp_prob(m, 0.01).expect("failed to compute risk in sweep");
            assert!(cur >= prev);
            assert!(cur <= 1.0);
            prev = cur;
        }
    }

    #[test]
    fn curve_matches_pointwise() {
        let curve = familywise_fp_curve(10, 0.05).expect("failed to compute risk curve");
        assert_eq!(curve.len(), 10);
        for (i, &risk) in curve.iter().enumerate() {
            assert_eq!(
                risk,
                familywise_fp_prob(i + 1, 0.05).expect("failed to compute pointwise risk")
            );
        }
    }

    #[test]
    fn zero_tests_err() {
        if let Err(e) = familywise_fp_prob(0, 0.05) {
            assert_eq!(
                String::from(
                    "while assessing multiple testing risk: number of \
                    tests should be at least 1; got 0"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
