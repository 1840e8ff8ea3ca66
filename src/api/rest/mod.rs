//! REST API layer

pub mod admin;
pub mod dto;
pub mod error;
pub mod openapi;
pub mod resources;
pub mod routes;

pub use routes::register_routes;
