//! # Mirra Server
//! The authoritative side of the replication protocol: classifies per-tick
//! Position changes into Added/Removed/Changed broadcasts to all connected
//! clients, and answers Ready signals with one-shot full-state snapshots.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use mirra_shared::{
        coalesce, ClientRequest, EntityKey, Position, PositionDelta, PositionUpdate, RemoteEntity,
        ReplicationEvent, WorldMutType, WorldRefType,
    };
}

mod server;
mod transport;

pub use server::{ServerConfig, ServerReplicator};
pub use transport::{ClientKey, ServerTransport};
