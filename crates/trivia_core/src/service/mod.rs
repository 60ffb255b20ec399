//! Core use-case services.
//!
//! # Responsibility
//! - Pagination and quiz selection over the store.
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the HTTP layer decoupled from storage details.

pub mod pagination;
pub mod quiz;
pub mod trivia_service;
