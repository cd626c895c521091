//! Inventory domain module.
//!
//! Concrete entity kinds kept in stores and durable logs, plus the fixed seed
//! sequences the demos start from. Pure data, no IO.

pub mod item;
pub mod seed;

pub use item::{ElectronicItem, GroceryItem, InventoryRecord};
pub use seed::{electronics_seed, groceries_seed, inventory_log_seed};
