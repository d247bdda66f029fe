use clap::Parser;

use orbital_relations::astro::kepler::{
    circular_velocity, escape_velocity, orbital_period, solve_radius_for_circular_velocity,
    specific_orbital_energy,
};
use orbital_relations::consts::{EARTH_MU, EARTH_RADIUS};
use orbital_relations::error::OrbitError;

/// Prints the basic two-body quantities for a circular orbit, then recovers
/// the orbital radius numerically from the circular velocity.
#[derive(Debug, Parser)]
struct Args {
    /// Gravitational parameter of the central body, in m^3/s^2
    #[arg(long, default_value_t = EARTH_MU)]
    mu: f64,

    /// Radius of the central body, in m
    #[arg(long, default_value_t = EARTH_RADIUS)]
    body_radius: f64,

    /// Altitude of the orbit above the surface, in m
    #[arg(long, default_value_t = 400e3)]
    altitude: f64,
}

fn main() -> Result<(), OrbitError> {
    let args = Args::parse();
    let r = args.body_radius + args.altitude;

    let v_c = circular_velocity(args.mu, r)?;
    let v_e = escape_velocity(args.mu, r)?;
    let period = orbital_period(args.mu, r)?;
    let energy = specific_orbital_energy(args.mu, r)?;

    // Bracket the root comfortably on either side of the true radius.
    let (r_num, info) = solve_radius_for_circular_velocity(args.mu, v_c, 0.5 * r, 1.5 * r)?;

    println!("Circular velocity [m/s]: {}", v_c);
    println!("Escape velocity  [m/s]: {}", v_e);
    println!("Orbital period   [s]: {}", period);
    println!("Specific energy  [J/kg]: {}", energy);
    println!("Recovered radius [m]: {}", r_num);
    println!("Iterations: {}", info.iterations);

    Ok(())
}
