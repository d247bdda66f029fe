use super::intervals::Interval;
use crate::error::OrbitError;

/// Per-call record of how a bisection run went: the number of completed
/// iterations and the residual at each midpoint, in iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    pub iterations: usize,
    pub residuals: Vec<f64>,
}

/// Finds a root of `f` inside `interval` by bisection, stopping once the
/// residual magnitude drops below `tol`.
///
/// Fails with [OrbitError::NotBracketed] if `f` has the same sign at both
/// endpoints. Running out of iterations is *not* an error: the last midpoint
/// is returned and `Diagnostics::iterations` equals `max_iter`, so callers
/// that need strict convergence must check the diagnostics themselves.
pub fn bisection(
    f: impl Fn(f64) -> f64,
    interval: Interval,
    tol: f64,
    max_iter: usize,
) -> Result<(f64, Diagnostics), OrbitError> {
    let mut interval = interval;
    let mut f_lo = f(interval.lo());
    let f_hi = f(interval.hi());

    // A zero product means an endpoint is already a root; let the loop run.
    if f_lo * f_hi > 0.0 {
        return Err(OrbitError::NotBracketed {
            lo: interval.lo(),
            hi: interval.hi(),
        });
    }

    let mut residuals = Vec::new();
    let mut guess = interval.midpoint();

    for _ in 0..max_iter {
        guess = interval.midpoint();
        let f_mid = f(guess);
        residuals.push(f_mid);

        if f_mid.abs() < tol {
            return Ok((
                guess,
                Diagnostics {
                    iterations: residuals.len(),
                    residuals,
                },
            ));
        }

        // A sign change in the lower half keeps it; ties fall to the upper
        // half, where the convergence test picks them up on a later pass.
        if f_lo * f_mid < 0.0 {
            interval = interval.split_left(guess);
        } else {
            f_lo = f_mid;
            interval = interval.split_right(guess);
        }
    }

    Ok((
        guess,
        Diagnostics {
            iterations: max_iter,
            residuals,
        },
    ))
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn test_bisection() {
        // Find the root of x^3 - a for several a
        for a in [2.0, 50.0, -1.0, 0.1].iter() {
            let (root, _) =
                bisection(|x| x * x * x - a, Interval::new(-100.0, 100.0), 1e-11, 200).unwrap();
            assert_relative_eq!(root, a.cbrt(), max_relative = 1e-9);
        }

        // There are three roots to x^3 - 4x^2 - 7x + 10: -2, 1, 5
        let f = |x: f64| 10.0 + x * (-7.0 + x * (-4.0 + x));
        let (x1, _) = bisection(f, Interval::new(-3.0, 0.0), 1e-11, 200).unwrap();
        assert_relative_eq!(x1, -2.0, max_relative = 1e-9);
        let (x2, _) = bisection(f, Interval::new(0.0, 4.0), 1e-11, 200).unwrap();
        assert_relative_eq!(x2, 1.0, max_relative = 1e-9);
        let (x3, _) = bisection(f, Interval::new(4.0, 10.0), 1e-11, 200).unwrap();
        assert_relative_eq!(x3, 5.0, max_relative = 1e-9);
    }

    #[test]
    fn test_history_matches_iteration_count() {
        let (_, diag) = bisection(|x| x * x - 2.0, Interval::new(0.0, 2.0), 1e-9, 100).unwrap();
        assert!(diag.iterations > 0);
        assert_eq!(diag.residuals.len(), diag.iterations);
    }

    #[test]
    fn test_unbracketed_root_is_rejected() {
        let err = bisection(|x| x * x + 1.0, Interval::new(-1.0, 1.0), 1e-9, 100).unwrap_err();
        assert_eq!(err, OrbitError::NotBracketed { lo: -1.0, hi: 1.0 });
    }

    #[test]
    fn test_exhaustion_returns_last_midpoint() {
        // Unreachable tolerance: the loop runs out but still hands back the
        // final midpoint, flagged only through the iteration count.
        let (root, diag) =
            bisection(|x| x * x - 2.0, Interval::new(0.0, 2.0), 1e-300, 10).unwrap();
        assert_eq!(diag.iterations, 10);
        assert_eq!(diag.residuals.len(), 10);
        assert_abs_diff_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-2);
    }

    #[test]
    fn test_zero_iteration_budget() {
        let (root, diag) = bisection(|x| x - 1.0, Interval::new(0.0, 4.0), 1e-9, 0).unwrap();
        assert_eq!(root, 2.0);
        assert_eq!(diag.iterations, 0);
        assert!(diag.residuals.is_empty());
    }
}
