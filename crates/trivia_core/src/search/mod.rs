//! Question search entry points.
//!
//! # Responsibility
//! - Expose case-insensitive substring search over question text.
//! - Keep search result shaping inside core.

pub mod substring;
