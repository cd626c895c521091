//! Fixed seed sequences used to populate stores at startup.
//!
//! Seeds are plain ordered data. They are handed to a store's seeding call and
//! go through the normal `add` path, so a malformed seed (repeated id) fails
//! with a duplicate-key error like any other insert. Time-relative fields are
//! computed from an explicit `now` to keep the sequences deterministic.

use chrono::{DateTime, Days, Months, Utc};

use stockroom_core::{EntityId, Quantity};

use crate::item::{ElectronicItem, GroceryItem, InventoryRecord};

const fn qty(count: u32) -> Quantity {
    Quantity::from_count(count)
}

pub fn electronics_seed() -> Vec<ElectronicItem> {
    vec![
        ElectronicItem::new(EntityId::new(1), "Laptop", qty(10), "Dell", 24),
        ElectronicItem::new(EntityId::new(2), "Smartphone", qty(25), "Samsung", 12),
        ElectronicItem::new(EntityId::new(3), "Headset", qty(50), "Sony", 6),
    ]
}

pub fn groceries_seed(now: DateTime<Utc>) -> Vec<GroceryItem> {
    vec![
        GroceryItem::new(EntityId::new(10), "Rice", qty(100), now + Months::new(12)),
        GroceryItem::new(EntityId::new(11), "Beans", qty(80), now + Months::new(8)),
        GroceryItem::new(EntityId::new(12), "Milk", qty(30), now + Days::new(7)),
    ]
}

pub fn inventory_log_seed(now: DateTime<Utc>) -> Vec<InventoryRecord> {
    vec![
        InventoryRecord::new(EntityId::new(1), "Pen", qty(100), now),
        InventoryRecord::new(EntityId::new(2), "Notebook", qty(50), now),
        InventoryRecord::new(EntityId::new(3), "Marker", qty(25), now),
    ]
}
