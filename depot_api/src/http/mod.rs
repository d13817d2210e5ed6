mod api;
pub mod types;

pub use api::DepotApi;
