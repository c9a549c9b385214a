pub mod aggregate;

pub use aggregate::{Car, CarStatus, FuelType, Transmission};
