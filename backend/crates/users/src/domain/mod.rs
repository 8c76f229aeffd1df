//! Domain Layer
//!
//! The user entity and the persistence contract.

pub mod entity;
pub mod repository;
