use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, EntityId, Quantity, Stocked};

/// Warehouse entity: a piece of electronics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElectronicItem {
    id: EntityId,
    name: String,
    quantity: Quantity,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: Quantity,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicItem {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Stocked for ElectronicItem {
    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

/// Warehouse entity: a perishable grocery item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroceryItem {
    id: EntityId,
    name: String,
    quantity: Quantity,
    expiry_date: DateTime<Utc>,
}

impl GroceryItem {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: Quantity,
        expiry_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expiry_date(&self) -> DateTime<Utc> {
        self.expiry_date
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date <= now
    }
}

impl Entity for GroceryItem {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Stocked for GroceryItem {
    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

/// Logger entity: an item recorded in the durable inventory log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryRecord {
    id: EntityId,
    name: String,
    quantity: Quantity,
    date_added: DateTime<Utc>,
}

impl InventoryRecord {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: Quantity,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}

impl Entity for InventoryRecord {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Stocked for InventoryRecord {
    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}
