//! Closed-form relations for two-body Keplerian orbits.
//!
//! Everything here assumes a point-mass central body and neglects
//! perturbations such as drag, oblateness, and third-body effects. Units are
//! SI throughout.

pub mod kepler;

pub use kepler::{
    circular_velocity, escape_velocity, orbital_period, solve_radius_for_circular_velocity,
    solve_radius_for_circular_velocity_with, specific_orbital_energy,
};
