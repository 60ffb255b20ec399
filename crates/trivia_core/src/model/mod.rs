//! Domain model for trivia categories and questions.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own input validation for question creation.
//!
//! # Invariants
//! - Every record is identified by a positive integer id assigned by the store.
//! - `Question::category` is a soft reference to `Category::id`.

pub mod category;
pub mod question;
