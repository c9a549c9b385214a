pub mod aggregate;

pub use aggregate::Airline;
