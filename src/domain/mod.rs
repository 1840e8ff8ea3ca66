//! Domain layer - validation, repositories, and the CRUD service

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::Repositories;
pub use service::Service;
