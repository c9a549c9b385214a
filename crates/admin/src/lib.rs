pub mod domain;
pub mod render;
pub mod shared;
pub mod system;
