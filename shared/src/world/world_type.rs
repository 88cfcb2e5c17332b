use crate::{Position, PositionDelta, PositionUpdate};

/// Read-only view of a world store.
pub trait WorldRefType<E> {
    fn has_entity(&self, entity: &E) -> bool;
    /// Every entity currently holding a Position.
    fn entities(&self) -> Vec<E>;
    fn position(&self, entity: &E) -> Option<Position>;
}

/// Mutable access to a world store.
///
/// Implemented by the host program (or the test harness) over whatever
/// storage engine it runs; the replication crates only ever go through
/// these methods.
pub trait WorldMutType<E>: WorldRefType<E> {
    /// Spawns a new entity carrying `position` and returns its id.
    fn spawn_entity(&mut self, position: Position) -> E;
    fn despawn_entity(&mut self, entity: &E);
    fn insert_position(&mut self, entity: &E, position: Position);
    /// Applies a partial update to the entity's Position, copying unset
    /// axes forward. No-op when the entity holds no Position.
    fn patch_position(&mut self, entity: &E, update: PositionUpdate);
    /// Drains the store's change journal for Position: the observations
    /// accumulated since the previous drain, in mutation order.
    /// Implementations need not fold same-drain mutations to one entity
    /// into a single observation; callers that require that fold with
    /// [`coalesce`](crate::coalesce).
    fn take_position_changes(&mut self) -> Vec<(E, PositionDelta)>;
    /// Tags an entity for deferred destruction. Idempotent.
    fn mark_removal(&mut self, entity: &E);
    /// Every entity currently tagged for removal, in marking order.
    fn removal_marked(&self) -> Vec<E>;
}
