use serde::{Deserialize, Serialize};

use crate::{Position, RemoteEntity};

/// Server → client replication traffic.
///
/// `Added` / `Removed` / `Changed` are broadcast to every connected client
/// once per server tick; `All` is the full-state snapshot sent to a single
/// client in response to [`ClientRequest::Ready`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReplicationEvent {
    /// A new entity exists with the given position.
    Added(RemoteEntity, Position),
    /// The entity no longer exists.
    Removed(RemoteEntity),
    /// The entity's position was replaced.
    Changed(RemoteEntity, Position),
    /// Complete state at one point in time, one entry per live entity.
    All(Vec<(RemoteEntity, Position)>),
}

/// Client → server signaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientRequest {
    /// The client has joined and wants the full state.
    Ready,
}
