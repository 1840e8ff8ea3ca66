//! API layer - admin CRUD surface

pub mod rest;
