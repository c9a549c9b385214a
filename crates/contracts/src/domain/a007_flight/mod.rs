pub mod aggregate;

pub use aggregate::{Flight, FlightStatus};
