// IAU/EGM2008 values, SI units
pub const EARTH_MU: f64 = 3.986004418e14;
pub const EARTH_RADIUS: f64 = 6.371e6;
