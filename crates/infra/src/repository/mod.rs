//! Keyed entity repositories.
//!
//! This module defines the CRUD boundary shared by every entity collection and
//! the in-memory store that implements it.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::EntityStore;
pub use r#trait::Repository;
