pub mod images;
pub mod list;
pub mod stats;
