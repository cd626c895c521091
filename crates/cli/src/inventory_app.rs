//! Inventory logger demo: a durable log saved in one session and reloaded in
//! the next.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use stockroom_core::StoreResult;
use stockroom_infra::{DurableLog, FileBackend, LoadOutcome, LogBackend, Repository};
use stockroom_inventory::{InventoryRecord, inventory_log_seed};

use crate::display::write_repository;

/// Thin application wrapper around a durable inventory log.
#[derive(Debug)]
pub struct InventoryApp<B = FileBackend> {
    log: DurableLog<InventoryRecord, B>,
}

impl InventoryApp<FileBackend> {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_backend(FileBackend::new(path))
    }
}

impl<B: LogBackend> InventoryApp<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            log: DurableLog::with_backend(backend),
        }
    }

    pub fn seed_sample_data(&mut self, now: DateTime<Utc>) -> StoreResult<()> {
        self.log.seed(inventory_log_seed(now))
    }

    pub fn save(&self) -> StoreResult<()> {
        self.log.save()
    }

    pub fn load(&mut self) -> StoreResult<LoadOutcome> {
        self.log.load()
    }

    pub fn log(&self) -> &DurableLog<InventoryRecord, B> {
        &self.log
    }

    pub fn location(&self) -> String {
        self.log.location()
    }
}

/// Seed and save in one session, then reload into a fresh app and list it.
pub fn run_logger<B>(backend: B, out: &mut impl Write, now: DateTime<Utc>) -> anyhow::Result<()>
where
    B: LogBackend + Clone,
{
    let mut app = InventoryApp::with_backend(backend.clone());
    app.seed_sample_data(now)
        .context("failed to seed inventory log")?;
    app.save()
        .with_context(|| format!("failed to save inventory to {}", app.location()))?;
    info!(location = %app.location(), items = app.log().len(), "inventory saved");
    writeln!(out, "Saved inventory to {}", app.location())?;

    // New session on the same resource.
    let mut next = InventoryApp::with_backend(backend);
    load_into(&mut next)?;
    write_repository(out, "Loaded items", next.log())?;
    Ok(())
}

/// Load an existing log and list it.
pub fn run_show<B: LogBackend>(backend: B, out: &mut impl Write) -> anyhow::Result<()> {
    let mut app = InventoryApp::with_backend(backend);
    if load_into(&mut app)? == LoadOutcome::Missing {
        writeln!(out, "No inventory log at {}", app.location())?;
        return Ok(());
    }
    write_repository(out, "Inventory log", app.log())?;
    Ok(())
}

fn load_into<B: LogBackend>(app: &mut InventoryApp<B>) -> anyhow::Result<LoadOutcome> {
    let outcome = app
        .load()
        .with_context(|| format!("failed to load inventory from {}", app.location()))?;
    match outcome {
        LoadOutcome::Missing => warn!(location = %app.location(), "no inventory log found"),
        LoadOutcome::Loaded(items) => info!(location = %app.location(), items, "inventory loaded"),
    }
    Ok(outcome)
}
