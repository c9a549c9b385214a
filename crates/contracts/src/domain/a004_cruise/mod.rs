pub mod aggregate;

pub use aggregate::{Cruise, CruiseStatus};
