use std::f64::consts::PI;

use crate::error::OrbitError;
use crate::math::intervals::Interval;
use crate::math::root_finding::{bisection, Diagnostics};

pub const DEFAULT_TOLERANCE: f64 = 1e-10;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Every argument must be finite, then every argument must be strictly
/// positive; the first offender determines the error.
fn check_args(args: &[(&'static str, f64)]) -> Result<(), OrbitError> {
    for &(name, value) in args {
        if !value.is_finite() {
            return Err(OrbitError::NotFinite { name, value });
        }
    }
    for &(name, value) in args {
        if value <= 0.0 {
            return Err(OrbitError::NotPositive { name, value });
        }
    }
    Ok(())
}

/// Velocity of a circular orbit of radius `r`, in m/s.
pub fn circular_velocity(mu: f64, r: f64) -> Result<f64, OrbitError> {
    check_args(&[("mu", mu), ("r", r)])?;
    Ok((mu / r).sqrt())
}

/// Velocity needed to escape the central body from distance `r`, in m/s.
pub fn escape_velocity(mu: f64, r: f64) -> Result<f64, OrbitError> {
    check_args(&[("mu", mu), ("r", r)])?;
    Ok((2.0 * mu / r).sqrt())
}

/// Period of an orbit with semi-major axis `a`, in s.
pub fn orbital_period(mu: f64, a: f64) -> Result<f64, OrbitError> {
    check_args(&[("mu", mu), ("a", a)])?;
    Ok(2.0 * PI * (a.powi(3) / mu).sqrt())
}

/// Total mechanical energy per unit mass of a bound orbit, in J/kg.
/// Negative for every valid input.
pub fn specific_orbital_energy(mu: f64, a: f64) -> Result<f64, OrbitError> {
    check_args(&[("mu", mu), ("a", a)])?;
    Ok(-mu / (2.0 * a))
}

/// Solves for the orbital radius whose circular velocity equals `v_target`,
/// searching `[r_min, r_max]` with [DEFAULT_TOLERANCE] and
/// [DEFAULT_MAX_ITERATIONS].
pub fn solve_radius_for_circular_velocity(
    mu: f64,
    v_target: f64,
    r_min: f64,
    r_max: f64,
) -> Result<(f64, Diagnostics), OrbitError> {
    solve_radius_for_circular_velocity_with(
        mu,
        v_target,
        r_min,
        r_max,
        DEFAULT_TOLERANCE,
        DEFAULT_MAX_ITERATIONS,
    )
}

/// Same as [solve_radius_for_circular_velocity], with an explicit residual
/// tolerance and iteration limit.
///
/// Exhausting the iteration limit is not an error: the last midpoint is
/// returned with `Diagnostics::iterations` equal to `max_iter`, and it is up
/// to the caller to decide whether the final residual is good enough.
pub fn solve_radius_for_circular_velocity_with(
    mu: f64,
    v_target: f64,
    r_min: f64,
    r_max: f64,
    tol: f64,
    max_iter: usize,
) -> Result<(f64, Diagnostics), OrbitError> {
    check_args(&[
        ("mu", mu),
        ("v_target", v_target),
        ("r_min", r_min),
        ("r_max", r_max),
        ("tol", tol),
    ])?;
    if r_max <= r_min {
        return Err(OrbitError::IntervalOrder { r_min, r_max });
    }

    // Circular velocity decreases with radius, so the residual is monotone
    // and a sign change brackets exactly one root.
    let residual = move |r: f64| (mu / r).sqrt() - v_target;
    bisection(residual, Interval::new(r_min, r_max), tol, max_iter)
}
