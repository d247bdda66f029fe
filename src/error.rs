use thiserror::Error;

/// Errors raised by the relations and the radius solver.
///
/// Every validation failure is reported before any computation begins; nothing
/// is retried or recovered internally.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum OrbitError {
    /// An argument was NaN or infinite. Checked before any domain check.
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// An argument violated strict positivity.
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    /// The search interval was empty or inverted.
    #[error("r_max ({r_max}) must be greater than r_min ({r_min})")]
    IntervalOrder { r_min: f64, r_max: f64 },

    /// The residual has the same sign at both endpoints of the search
    /// interval, so bisection cannot proceed.
    #[error("root is not bracketed in [{lo}, {hi}]")]
    NotBracketed { lo: f64, hi: f64 },
}
