//! Display layer: turns entities into report lines.
//!
//! Stores expose data only; everything user-facing is rendered here.

use std::io::{self, Write};

use stockroom_core::{Entity, Stocked};
use stockroom_infra::Repository;
use stockroom_inventory::{ElectronicItem, GroceryItem, InventoryRecord};

/// One-line rendering of an entity.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ElectronicItem {
    fn render(&self) -> String {
        format!(
            "{} (ID:{}) - Brand:{}, Qty:{}, Warranty:{}m",
            self.name(),
            self.id(),
            self.brand(),
            self.quantity(),
            self.warranty_months()
        )
    }
}

impl Render for GroceryItem {
    fn render(&self) -> String {
        format!(
            "{} (ID:{}) - Qty:{}, Expires:{}",
            self.name(),
            self.id(),
            self.quantity(),
            self.expiry_date().format("%Y-%m-%d")
        )
    }
}

impl Render for InventoryRecord {
    fn render(&self) -> String {
        format!(
            "{} (ID:{}) - Qty:{}, Added:{}",
            self.name(),
            self.id(),
            self.quantity(),
            self.date_added().format("%Y-%m-%d %H:%M UTC")
        )
    }
}

/// Write a titled section listing `items`.
pub fn write_section<T: Render>(out: &mut impl Write, title: &str, items: &[T]) -> io::Result<()> {
    writeln!(out, "=== {title} ===")?;
    if items.is_empty() {
        writeln!(out, "(none)")?;
    }
    for item in items {
        writeln!(out, "{}", item.render())?;
    }
    Ok(())
}

/// Write a titled section listing everything in `repo`.
pub fn write_repository<T, R>(out: &mut impl Write, title: &str, repo: &R) -> io::Result<()>
where
    T: Entity + Render,
    R: Repository<T>,
{
    write_section(out, title, &repo.get_all())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stockroom_core::{EntityId, Quantity};
    use stockroom_infra::EntityStore;

    fn qty(value: i64) -> Quantity {
        Quantity::new(value).unwrap()
    }

    #[test]
    fn renders_each_kind_on_one_line() {
        let laptop = ElectronicItem::new(EntityId::new(1), "Laptop", qty(10), "Dell", 24);
        assert_eq!(laptop.render(), "Laptop (ID:1) - Brand:Dell, Qty:10, Warranty:24m");

        let expiry = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
        let milk = GroceryItem::new(EntityId::new(12), "Milk", qty(30), expiry);
        assert_eq!(milk.render(), "Milk (ID:12) - Qty:30, Expires:2025-08-01");

        let added = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        let pen = InventoryRecord::new(EntityId::new(1), "Pen", qty(100), added);
        assert_eq!(pen.render(), "Pen (ID:1) - Qty:100, Added:2025-01-15 09:30 UTC");
    }

    #[test]
    fn empty_repository_renders_placeholder() {
        let store: EntityStore<ElectronicItem> = EntityStore::new();
        let mut out = Vec::new();
        write_repository(&mut out, "ElectronicItem items", &store).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "=== ElectronicItem items ===\n(none)\n");
    }
}
