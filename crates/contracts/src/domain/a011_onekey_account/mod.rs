pub mod aggregate;

pub use aggregate::{OneKeyAccount, Tier};
