pub mod aggregate;

pub use aggregate::{Property, PropertyStatus};
