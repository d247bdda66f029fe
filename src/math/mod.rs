pub mod intervals;
pub mod root_finding;
