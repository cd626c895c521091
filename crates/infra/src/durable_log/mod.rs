//! Durable entity log: an [`EntityStore`] with an explicit save / load cycle.
//!
//! The in-memory store and the backing resource are independent until
//! [`DurableLog::save`] or [`DurableLog::load`] is called; nothing syncs
//! automatically.
//!
//! Failure guarantees:
//! - `save` never touches the in-memory store
//! - `load` builds the replacement store completely before swapping it in, so
//!   a `Persistence` or `Format` failure leaves the previous contents intact

pub mod backend;
pub mod codec;

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use stockroom_core::{Entity, EntityId, Stocked, StoreError, StoreResult};

use crate::repository::{EntityStore, Repository};

pub use backend::{FileBackend, InMemoryBackend, LogBackend};

/// What a successful [`DurableLog::load`] found.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The resource does not exist; the store was left as it was.
    Missing,
    /// The store was replaced with this many entities.
    Loaded(usize),
}

/// Entity store bound to a backing resource.
#[derive(Debug)]
pub struct DurableLog<T, B = FileBackend> {
    store: EntityStore<T>,
    // Entities added since creation or the last successful load.
    journal: Vec<T>,
    backend: B,
}

impl<T> DurableLog<T, FileBackend> {
    /// Bind a log to a file. The file is not touched until `save` / `load`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_backend(FileBackend::new(path))
    }
}

impl<T, B> DurableLog<T, B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            store: EntityStore::new(),
            journal: Vec::new(),
            backend,
        }
    }

    /// Entities added through this log since it was created or last loaded.
    pub fn journal(&self) -> &[T] {
        &self.journal
    }
}

impl<T, B> DurableLog<T, B>
where
    T: Entity,
    B: LogBackend,
{
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Add every seed entity through [`Repository::add`], stopping at the
    /// first failure. Entities added before the failure stay in the log.
    pub fn seed(&mut self, seed: impl IntoIterator<Item = T>) -> StoreResult<()> {
        for entity in seed {
            self.add(entity)?;
        }
        Ok(())
    }
}

impl<T, B> DurableLog<T, B>
where
    T: Entity + Serialize + DeserializeOwned,
    B: LogBackend,
{
    /// Overwrite the backing resource with the full current contents.
    pub fn save(&self) -> StoreResult<()> {
        let text = codec::encode(&self.store.get_all())?;
        self.backend.write(&text)
    }

    /// Replace the store's contents with what the backing resource holds.
    ///
    /// A missing resource is a valid empty starting point: the store is left
    /// unchanged and [`LoadOutcome::Missing`] is returned. Records are never
    /// merged with entities already in memory.
    pub fn load(&mut self) -> StoreResult<LoadOutcome> {
        let Some(text) = self.backend.read()? else {
            return Ok(LoadOutcome::Missing);
        };

        let entities: Vec<T> = codec::decode(&text)?;
        let store = EntityStore::with_seed(entities).map_err(|err| match err {
            StoreError::DuplicateKey(id) => {
                StoreError::format(format!("duplicate id {id} in {}", self.backend.location()))
            }
            other => other,
        })?;

        let loaded = store.len();
        self.store = store;
        self.journal.clear();
        Ok(LoadOutcome::Loaded(loaded))
    }
}

impl<T, B> Repository<T> for DurableLog<T, B>
where
    T: Entity,
{
    fn add(&mut self, entity: T) -> StoreResult<()> {
        self.store.add(entity.clone())?;
        self.journal.push(entity);
        Ok(())
    }

    fn get_by_id(&self, id: EntityId) -> StoreResult<T> {
        self.store.get_by_id(id)
    }

    fn remove(&mut self, id: EntityId) -> StoreResult<T> {
        self.store.remove(id)
    }

    fn update_quantity(&mut self, id: EntityId, new_quantity: i64) -> StoreResult<T>
    where
        T: Stocked,
    {
        self.store.update_quantity(id, new_quantity)
    }

    fn get_all(&self) -> Vec<T> {
        self.store.get_all()
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;
    use stockroom_core::Quantity;
    use stockroom_inventory::{InventoryRecord, inventory_log_seed};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
    }

    fn record(id: i32, name: &str, quantity: i64) -> InventoryRecord {
        InventoryRecord::new(EntityId::new(id), name, Quantity::new(quantity).unwrap(), now())
    }

    fn seeded_log(backend: InMemoryBackend) -> DurableLog<InventoryRecord, InMemoryBackend> {
        let mut log = DurableLog::with_backend(backend);
        log.seed(inventory_log_seed(now())).unwrap();
        log
    }

    #[test]
    fn add_delegates_to_store_and_journals() {
        let mut log = seeded_log(InMemoryBackend::new());
        assert_eq!(log.len(), 3);
        assert_eq!(log.journal().len(), 3);

        let err = log.add(record(1, "Pen again", 1)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey(EntityId::new(1)));
        assert_eq!(log.journal().len(), 3);
    }

    #[test]
    fn round_trip_through_a_fresh_log() {
        let backend = InMemoryBackend::new();
        let log = seeded_log(backend.clone());
        log.save().unwrap();

        let mut reopened: DurableLog<InventoryRecord, _> = DurableLog::with_backend(backend);
        assert_eq!(reopened.load().unwrap(), LoadOutcome::Loaded(3));
        assert_eq!(reopened.get_all(), log.get_all());
        assert!(reopened.journal().is_empty());
    }

    #[test]
    fn load_without_resource_leaves_store_alone() {
        let mut log = seeded_log(InMemoryBackend::new());
        assert_eq!(log.load().unwrap(), LoadOutcome::Missing);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn load_replaces_instead_of_merging() {
        let backend = InMemoryBackend::new();
        let mut saved = DurableLog::with_backend(backend.clone());
        saved.add(record(7, "Stapler", 4)).unwrap();
        saved.save().unwrap();

        let mut log = seeded_log(backend);
        log.load().unwrap();

        let ids: Vec<_> = log.get_all().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![EntityId::new(7)]);
    }

    #[test]
    fn malformed_contents_keep_prior_state() {
        let backend = InMemoryBackend::with_contents(r#"[{"id": 1, "name": "Pen"}]"#);
        let mut log = seeded_log(backend);

        let err = log.load().unwrap_err();
        assert!(matches!(&err, StoreError::Format(msg) if msg.contains("missing field")));
        assert_eq!(log.len(), 3);
        assert_eq!(log.journal().len(), 3);
    }

    #[test]
    fn duplicate_ids_on_disk_are_a_format_error() {
        let backend = InMemoryBackend::new();
        let mut first = DurableLog::with_backend(backend.clone());
        first.add(record(1, "Pen", 1)).unwrap();
        first.save().unwrap();
        let once = backend.read().unwrap().unwrap();
        // Splice the single record twice into one array.
        let record_text = once.trim().trim_start_matches('[').trim_end_matches(']').trim();
        backend.write(&format!("[{record_text}, {record_text}]")).unwrap();

        let mut log: DurableLog<InventoryRecord, _> = DurableLog::with_backend(backend);
        let err = log.load().unwrap_err();
        assert!(matches!(err, StoreError::Format(msg) if msg.contains("duplicate id 1")));
        assert!(log.is_empty());
    }

    #[test]
    fn save_writes_current_contents_not_the_journal() {
        let backend = InMemoryBackend::new();
        let mut log = seeded_log(backend.clone());
        log.remove(EntityId::new(2)).unwrap();
        log.update_quantity(EntityId::new(3), 0).unwrap();
        log.save().unwrap();

        let mut reopened: DurableLog<InventoryRecord, _> = DurableLog::with_backend(backend);
        reopened.load().unwrap();
        let all = reopened.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(reopened.get_by_id(EntityId::new(3)).unwrap().quantity(), Quantity::ZERO);
        assert_eq!(log.journal().len(), 3);
    }

    proptest! {
        /// Property: any store contents survive save / fresh log / load
        /// field for field, timestamps down to the nanosecond.
        #[test]
        fn any_contents_round_trip(
            rows in prop::collection::btree_map(
                any::<i32>(),
                ("[A-Za-z0-9 ]{0,16}", 0i64..=i64::MAX, 0i64..4_102_444_800_000_000_000),
                0..24,
            )
        ) {
            let backend = InMemoryBackend::new();
            let mut log = DurableLog::with_backend(backend.clone());
            for (id, (name, quantity, nanos)) in &rows {
                let record = InventoryRecord::new(
                    EntityId::new(*id),
                    name.as_str(),
                    Quantity::new(*quantity).unwrap(),
                    Utc.timestamp_nanos(*nanos),
                );
                log.add(record).unwrap();
            }
            log.save().unwrap();

            let mut reopened: DurableLog<InventoryRecord, _> = DurableLog::with_backend(backend);
            prop_assert_eq!(reopened.load().unwrap(), LoadOutcome::Loaded(rows.len()));
            prop_assert_eq!(reopened.get_all(), log.get_all());
        }
    }
}
