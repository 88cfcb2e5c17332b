//! # Mirra Client
//! The mirroring side of the replication protocol: applies replication
//! events against a local world store through a server-to-local identity
//! map, and keeps a rendering backend in step with the mirrored state.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use mirra_shared::{
        ClientRequest, EntityError, EntityKey, Position, PositionUpdate, RemoteEntity,
        ReplicationEvent, WorldMutType, WorldRefType,
    };
}

mod binder;
mod client;
mod identity_map;
mod transport;

pub use binder::{RenderBackend, RenderObject, RepresentationBinder};
pub use client::{ClientConfig, ClientReplicator, Phase};
pub use identity_map::IdentityMap;
pub use transport::ClientTransport;
