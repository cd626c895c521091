//! Infrastructure layer: entity stores and their durable persistence.

pub mod durable_log;
pub mod repository;

pub use durable_log::{DurableLog, FileBackend, InMemoryBackend, LoadOutcome, LogBackend};
pub use repository::{EntityStore, Repository};
