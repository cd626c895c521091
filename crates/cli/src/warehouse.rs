//! Warehouse demo: two typed stores side by side and the three failure cases.

use std::io::Write;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use stockroom_core::{EntityId, Quantity, StoreResult};
use stockroom_infra::{EntityStore, Repository};
use stockroom_inventory::{ElectronicItem, GroceryItem, electronics_seed, groceries_seed};

use crate::display::write_repository;

/// Owns one store per warehouse item kind.
#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: EntityStore<ElectronicItem>,
    groceries: EntityStore<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate both stores from the fixed seed sequences.
    pub fn seed(&mut self, now: DateTime<Utc>) -> StoreResult<()> {
        for item in electronics_seed() {
            self.electronics.add(item)?;
        }
        for item in groceries_seed(now) {
            self.groceries.add(item)?;
        }
        Ok(())
    }

    pub fn electronics(&self) -> &EntityStore<ElectronicItem> {
        &self.electronics
    }

    pub fn groceries(&self) -> &EntityStore<GroceryItem> {
        &self.groceries
    }

    /// Re-add the seeded laptop id under a different name.
    pub fn try_add_duplicate_electronic(&mut self) -> StoreResult<()> {
        let duplicate = ElectronicItem::new(
            EntityId::new(1),
            "DuplicateLaptop",
            Quantity::new(5)?,
            "HP",
            12,
        );
        self.electronics.add(duplicate)
    }

    pub fn try_remove_nonexistent_grocery(&mut self) -> StoreResult<()> {
        self.groceries.remove(EntityId::new(999)).map(|_| ())
    }

    pub fn try_update_invalid_quantity(&mut self) -> StoreResult<()> {
        self.groceries.update_quantity(EntityId::new(10), -5).map(|_| ())
    }
}

/// Run the warehouse walkthrough, writing the report to `out`.
///
/// The three failure cases are expected; they are reported and the run goes
/// on. Anything else (or an unexpected success) is surfaced as an error.
pub fn run(out: &mut impl Write, now: DateTime<Utc>) -> anyhow::Result<()> {
    let mut manager = WarehouseManager::new();
    manager.seed(now).context("failed to seed warehouse stores")?;
    info!(
        electronics = manager.electronics().len(),
        groceries = manager.groceries().len(),
        "warehouse seeded"
    );

    write_repository(out, "GroceryItem items", manager.groceries())?;
    write_repository(out, "ElectronicItem items", manager.electronics())?;

    writeln!(out)?;
    writeln!(out, "Testing errors:")?;

    let cases: [(&str, fn(&mut WarehouseManager) -> StoreResult<()>); 3] = [
        ("duplicate add", WarehouseManager::try_add_duplicate_electronic),
        ("remove non-existent", WarehouseManager::try_remove_nonexistent_grocery),
        ("invalid quantity", WarehouseManager::try_update_invalid_quantity),
    ];

    for (label, case) in cases {
        report_expected_failure(out, label, case(&mut manager))?;
    }

    Ok(())
}

fn report_expected_failure(
    out: &mut impl Write,
    label: &str,
    result: StoreResult<()>,
) -> anyhow::Result<()> {
    match result {
        Err(err) if err.is_validation() => {
            info!(case = label, error = %err, "expected store failure");
            writeln!(out, "Expected error ({label}): {err}")?;
            Ok(())
        }
        Err(err) => Err(anyhow::Error::new(err).context(format!("{label} failed unexpectedly"))),
        Ok(()) => {
            warn!(case = label, "expected a store failure but the operation succeeded");
            Err(anyhow::anyhow!("{label} unexpectedly succeeded"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stockroom_core::{Stocked, StoreError};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn seeded() -> WarehouseManager {
        let mut manager = WarehouseManager::new();
        manager.seed(now()).unwrap();
        manager
    }

    #[test]
    fn failure_cases_report_their_kinds() {
        let mut manager = seeded();

        assert_eq!(
            manager.try_add_duplicate_electronic(),
            Err(StoreError::DuplicateKey(EntityId::new(1)))
        );
        assert_eq!(
            manager.try_remove_nonexistent_grocery(),
            Err(StoreError::NotFound(EntityId::new(999)))
        );
        assert!(matches!(
            manager.try_update_invalid_quantity(),
            Err(StoreError::InvalidValue(_))
        ));

        // Nothing changed.
        assert_eq!(manager.electronics().len(), 3);
        assert_eq!(manager.groceries().len(), 3);
        let rice = manager.groceries().get_by_id(EntityId::new(10)).unwrap();
        assert_eq!(rice.quantity().get(), 100);
    }

    #[test]
    fn seeding_twice_hits_the_duplicate_check() {
        let mut manager = seeded();
        assert_eq!(
            manager.seed(now()),
            Err(StoreError::DuplicateKey(EntityId::new(1)))
        );
    }

    #[test]
    fn run_writes_the_full_report() {
        let mut out = Vec::new();
        run(&mut out, now()).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.starts_with("=== GroceryItem items ===\nRice (ID:10) - Qty:100, Expires:2026-03-10\n"));
        assert!(report.contains("=== ElectronicItem items ===\nLaptop (ID:1) - Brand:Dell, Qty:10, Warranty:24m\n"));
        assert!(report.contains("Expected error (duplicate add): entity with id 1 already exists"));
        assert!(report.contains("Expected error (remove non-existent): entity with id 999 not found"));
        assert!(report.contains(
            "Expected error (invalid quantity): invalid value: quantity cannot be negative (got -5)"
        ));
    }

    #[test]
    fn unexpected_success_is_an_error() {
        let mut out = Vec::new();
        let err = report_expected_failure(&mut out, "restock", Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "restock unexpectedly succeeded");
        assert!(out.is_empty());
    }

    #[test]
    fn io_failures_are_not_swallowed() {
        let mut out = Vec::new();
        let err = report_expected_failure(
            &mut out,
            "restock",
            Err(StoreError::persistence("disk full")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "restock failed unexpectedly");
    }
}
