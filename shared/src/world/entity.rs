use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Conversion contract for world-store entity ids.
///
/// Implemented by the host program for whatever id type its world store
/// allocates. The replication crates address entities only through this
/// trait; a store's ids never cross the wire directly.
pub trait EntityKey: Copy + Eq + Hash + Debug {
    fn to_u64(&self) -> u64;
    fn from_u64(value: u64) -> Self;
}

// RemoteEntity
//
// A server-allocated entity id as it appears on the wire and in client-side
// tables. Never comparable with a local world id: the two sides allocate
// independently, and the type system keeps them apart.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RemoteEntity(u64);

impl RemoteEntity {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn from_key<E: EntityKey>(key: &E) -> Self {
        Self(key.to_u64())
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}
