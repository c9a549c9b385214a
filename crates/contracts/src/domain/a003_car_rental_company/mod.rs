pub mod aggregate;

pub use aggregate::CarRentalCompany;
