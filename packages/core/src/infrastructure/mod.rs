//! Infrastructure layer: persisted-state DTOs and repository implementations.

pub mod dto;
pub mod repository;
