pub mod api_client;
pub mod config;
pub mod detail_view;
pub mod filter_state;
pub mod format;
pub mod image_gallery;
pub mod list_pipeline;
pub mod notify;
pub mod pagination;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;
