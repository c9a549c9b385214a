pub mod aggregate;

pub use aggregate::CruiseCabinType;
