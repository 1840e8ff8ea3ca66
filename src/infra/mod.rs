//! Infrastructure layer - persistence collaborator wiring

pub mod storage;
