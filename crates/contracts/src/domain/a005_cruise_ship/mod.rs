pub mod aggregate;

pub use aggregate::CruiseShip;
