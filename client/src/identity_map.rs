use std::collections::HashMap;

use mirra_shared::{EntityError, EntityKey, RemoteEntity};

/// Table translating server entity ids to this client's mirror entities.
///
/// Owned exclusively by one client process and never seen by the server.
/// Every entry maps to a live mirror entity that has not yet been marked
/// for removal: entries are inserted when a create is applied and removed
/// when a removal is applied, at which point the removal marker, not the
/// map, tracks the pending cleanup.
pub struct IdentityMap<E: EntityKey> {
    remote_to_local: HashMap<RemoteEntity, E>,
    local_to_remote: HashMap<E, RemoteEntity>,
}

impl<E: EntityKey> Default for IdentityMap<E> {
    fn default() -> Self {
        Self {
            remote_to_local: HashMap::new(),
            local_to_remote: HashMap::new(),
        }
    }
}

impl<E: EntityKey> IdentityMap<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fresh mapping. Fails without mutating when either side is
    /// already bound.
    pub fn try_insert(&mut self, remote: RemoteEntity, local: E) -> Result<(), EntityError> {
        if self.remote_to_local.contains_key(&remote) {
            return Err(EntityError::RemoteEntityAlreadyMapped {
                remote_id: remote.to_u64(),
                context: "identity map insert",
            });
        }
        if self.local_to_remote.contains_key(&local) {
            return Err(EntityError::MirrorEntityAlreadyBound {
                entity_id: format!("{:?}", local),
                context: "identity map insert",
            });
        }

        self.remote_to_local.insert(remote, local);
        self.local_to_remote.insert(local, remote);
        Ok(())
    }

    /// Removes a mapping, returning the mirror entity it pointed at.
    pub fn try_remove(&mut self, remote: &RemoteEntity) -> Result<E, EntityError> {
        let Some(local) = self.remote_to_local.remove(remote) else {
            return Err(EntityError::RemoteEntityNotMapped {
                remote_id: remote.to_u64(),
                context: "identity map remove",
            });
        };
        self.local_to_remote.remove(&local);
        Ok(local)
    }

    pub fn local_entity(&self, remote: &RemoteEntity) -> Option<&E> {
        self.remote_to_local.get(remote)
    }

    pub fn remote_entity(&self, local: &E) -> Option<&RemoteEntity> {
        self.local_to_remote.get(local)
    }

    pub fn contains_remote(&self, remote: &RemoteEntity) -> bool {
        self.remote_to_local.contains_key(remote)
    }

    pub fn len(&self) -> usize {
        self.remote_to_local.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remote_to_local.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RemoteEntity, &E)> {
        self.remote_to_local.iter()
    }
}
