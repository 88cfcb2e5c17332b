//! # Mirra Shared
//! Common functionality shared between mirra-server & mirra-client crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod error;
pub mod messages;
pub mod world;

pub use error::EntityError;
pub use messages::{ClientRequest, ReplicationEvent};
pub use world::{
    change::{coalesce, PositionDelta},
    entity::{EntityKey, RemoteEntity},
    position::{Position, PositionUpdate},
    world_type::{WorldMutType, WorldRefType},
};
