use std::collections::HashMap;

use stockroom_core::{Entity, EntityId, Quantity, Stocked, StoreError, StoreResult};

use super::r#trait::Repository;

/// In-memory keyed store of one entity kind.
///
/// Owns its entities by value: callers only ever receive clones, and the one
/// mutable field (quantity) is changed by swapping in a derived copy.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    entities: HashMap<EntityId, T>,
    // Insertion order, for display.
    order: Vec<EntityId>,
}

impl<T> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Stored ids, in insertion order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.order.clone()
    }
}

impl<T: Entity> EntityStore<T> {
    /// Build a store from a seed sequence.
    ///
    /// Every seed entity goes through [`Repository::add`]; the first failure
    /// (a repeated id) aborts seeding and is returned.
    pub fn with_seed(seed: impl IntoIterator<Item = T>) -> StoreResult<Self> {
        let mut store = Self::new();
        for entity in seed {
            store.add(entity)?;
        }
        Ok(store)
    }
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for EntityStore<T> {
    fn add(&mut self, entity: T) -> StoreResult<()> {
        let id = entity.id();
        if self.entities.contains_key(&id) {
            return Err(StoreError::DuplicateKey(id));
        }
        self.entities.insert(id, entity);
        self.order.push(id);
        Ok(())
    }

    fn get_by_id(&self, id: EntityId) -> StoreResult<T> {
        self.entities
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn remove(&mut self, id: EntityId) -> StoreResult<T> {
        let removed = self.entities.remove(&id).ok_or(StoreError::NotFound(id))?;
        self.order.retain(|existing| *existing != id);
        Ok(removed)
    }

    fn update_quantity(&mut self, id: EntityId, new_quantity: i64) -> StoreResult<T>
    where
        T: Stocked,
    {
        // Value first, then existence.
        let quantity = Quantity::new(new_quantity)?;
        let slot = self.entities.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let updated = slot.with_quantity(quantity);
        *slot = updated.clone();
        Ok(updated)
    }

    fn get_all(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.entities.get(id).cloned())
            .collect()
    }

    fn len(&self) -> usize {
        self.entities.len()
    }
}
