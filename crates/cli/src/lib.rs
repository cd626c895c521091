//! `stockroom` driver: seeds stores and logs, runs the demo flows and renders
//! the results.

pub mod args;
pub mod config;
pub mod display;
pub mod inventory_app;
pub mod warehouse;
