pub mod aggregate;

pub use aggregate::Airport;
