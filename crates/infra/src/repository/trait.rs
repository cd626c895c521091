use stockroom_core::{Entity, EntityId, Stocked, StoreResult};

/// CRUD over a homogeneous collection of entities keyed by [`EntityId`].
///
/// ## Failure contract
///
/// Every operation either succeeds completely or returns a [`StoreError`] and
/// leaves the collection exactly as it was:
///
/// - `add` fails with `DuplicateKey` when the id is taken
/// - `get_by_id`, `remove` and `update_quantity` fail with `NotFound` for an
///   unknown id
/// - `update_quantity` fails with `InvalidValue` for a negative quantity. The
///   value is validated **before** the lookup, so a negative quantity for an
///   unknown id reports `InvalidValue`, not `NotFound`
///
/// Implementations never log or print; surfacing failures is the caller's job.
///
/// [`StoreError`]: stockroom_core::StoreError
pub trait Repository<T: Entity> {
    /// Insert `entity` under its own id.
    fn add(&mut self, entity: T) -> StoreResult<()>;

    /// Snapshot of the entity stored under `id`.
    fn get_by_id(&self, id: EntityId) -> StoreResult<T>;

    /// Remove and return the entity stored under `id`.
    fn remove(&mut self, id: EntityId) -> StoreResult<T>;

    /// Replace the stored entity with a copy carrying `new_quantity`.
    ///
    /// Returns the updated value.
    fn update_quantity(&mut self, id: EntityId, new_quantity: i64) -> StoreResult<T>
    where
        T: Stocked;

    /// Snapshot of every entity, in insertion order.
    ///
    /// The returned vector is owned by the caller and unaffected by later
    /// mutation of the repository. The order is meant for display only.
    fn get_all(&self) -> Vec<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
