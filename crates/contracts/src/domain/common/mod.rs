//! Common types and traits for all API resources

pub mod api_resource;
pub mod decimal;
pub mod resource_id;

// Re-exports
pub use api_resource::ApiResource;
pub use decimal::deserialize_decimal_opt;
pub use resource_id::ResourceId;
