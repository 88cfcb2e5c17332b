use std::collections::HashMap;

use log::warn;

use mirra_shared::{EntityKey, Position, PositionDelta};

/// A visual/physical object mirroring one entity's position.
pub trait RenderObject {
    fn set_position(&mut self, position: Position);
    /// Consumes the object, removing it from the backend's scene.
    fn destroy(self);
}

/// Factory for representation objects. Implementations parent each new
/// object into their visible scene.
pub trait RenderBackend {
    type Object: RenderObject;
    fn create_object(&mut self, position: Position) -> Self::Object;
}

/// Keeps backend objects in step with the mirror world: one object per
/// entity, created on the entity's first Position observation, moved on
/// change, destroyed when the cleanup system releases the entity.
///
/// The entity → object table here is bookkeeping over world-store content,
/// not authoritative state.
pub struct RepresentationBinder<E: EntityKey, B: RenderBackend> {
    objects: HashMap<E, B::Object>,
}

impl<E: EntityKey, B: RenderBackend> Default for RepresentationBinder<E, B> {
    fn default() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }
}

impl<E: EntityKey, B: RenderBackend> RepresentationBinder<E, B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one world-store observation. Creation binds a fresh backend
    /// object; a change moves the existing one; a removal is left to
    /// [`release`](Self::release), which the cleanup system drives.
    pub fn observe(&mut self, backend: &mut B, entity: E, delta: PositionDelta) {
        match (delta.old, delta.new) {
            (None, Some(position)) => {
                let object = backend.create_object(position);
                if let Some(stale) = self.objects.insert(entity, object) {
                    warn!("replacing existing representation object for {:?}", entity);
                    stale.destroy();
                }
            }
            (Some(_), Some(position)) => {
                if let Some(object) = self.objects.get_mut(&entity) {
                    object.set_position(position);
                }
            }
            (_, None) => {}
        }
    }

    /// Destroys the object bound to a removed entity. No-op when none was
    /// ever created.
    pub fn release(&mut self, entity: &E) {
        if let Some(object) = self.objects.remove(entity) {
            object.destroy();
        }
    }

    pub fn has_object(&self, entity: &E) -> bool {
        self.objects.contains_key(entity)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}
