use crate::error::{PowercomputeErr, RootFindErr};

// Doubling the window from a small lower bound reaches ~1e18 before this
// trips, so it only fires when the target is genuinely unreachable
const MAX_DOUBLINGS: usize = 60;

/// Given a monotonically increasing function f(x) and lower bound, finds
/// value x' to the right of the lower bound such that f(x') = target
pub fn root_find_monotonic<F>(
    f: F,
    lower_bound: f64,
    target: f64,
    tol: f64,
) -> Result<f64, PowercomputeErr>
where
    F: Fn(f64) -> f64,
{
    if f(lower_bound) >= target {
        return Err(RootFindErr::BadLowerBound.into());
    }
    // Set window for search
    let mut lower_bound = lower_bound;
    let mut upper_bound = lower_bound;
    let mut doublings = 0;
    let mut f_upper_bound = f(upper_bound);
    while f_upper_bound < target {
        if doublings >= MAX_DOUBLINGS {
            return Err(RootFindErr::FailedToBracket(doublings).into());
        }
        upper_bound *= 2.;
        upper_bound += 1.; // In case lower_bound is zero
        f_upper_bound = f(upper_bound);
        doublings += 1;
    }

    // Perform search
    let mut x = (lower_bound + upper_bound) / 2.;
    let mut y = f(x);
    while (lower_bound - upper_bound).abs() > tol / 2. && (y - target).abs() > tol {
        if y <= target {
            lower_bound = x;
        } else {
            upper_bound = x;
        }
        x = (lower_bound + upper_bound) / 2.;
        y = f(x);
    }
    Ok(x)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn basic_linear_root_find() {
        let f = |x| x;
        let res =
            root_find_monotonic(f, 0.0, 3., 0.001).expect("failed to perform linear root find");
        assert!((res - 3.0).abs() < 0.001);
    }

    #[test]
    fn basic_quadratic_root_find() {
        let f = |x| x * x;
        let res =
            root_find_monotonic(f, 0.0, 9., 0.001).expect("failed to perform quadratic root find");
        assert!((res - 3.0).abs() < 0.001);
    }

    #[test]
    fn slow_growth_root_find() {
        // Bracketing this target takes more than ten doublings of the window
        let f = |x: f64| x.sqrt();
        let res = root_find_monotonic(f, 0.0, 100., 0.001)
            .expect("failed to perform slow growth root find");
        assert!((res - 10_000.0).abs() < 1.0);
    }

    #[test]
    fn lower_bound_above_target() {
        let f = |x| x;
        if let Err(e) = root_find_monotonic(f, 5.0, 3., 0.001) {
            assert_eq!(
                String::from(
                    "while root finding: function value at lower bound \
                    should be below target"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn unreachable_target_fails_to_bracket() {
        // Bounded function can never reach the target
        let f = |x: f64| x / (1. + x.abs());
        assert!(root_find_monotonic(f, 0.0, 2., 0.001).is_err());
    }
}
