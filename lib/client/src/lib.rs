pub mod api;
pub mod resource;
