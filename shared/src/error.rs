use thiserror::Error as ThisError;

/// Errors that can occur while maintaining a client's identity map and
/// applying replication events against it.
///
/// Every variant is non-fatal at the protocol level: callers downgrade
/// them to logged warnings and continue, because a missing entity has
/// nothing to update or remove and a duplicate create has nothing left to
/// create.
#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum EntityError {
    /// A create arrived for a server entity that is already mapped
    #[error("Remote entity {remote_id} is already mapped: {context}")]
    RemoteEntityAlreadyMapped {
        remote_id: u64,
        context: &'static str,
    },

    /// A change or removal arrived for a server entity with no map entry
    #[error("Remote entity {remote_id} is not mapped: {context}")]
    RemoteEntityNotMapped {
        remote_id: u64,
        context: &'static str,
    },

    /// Two map entries would point at the same mirror entity
    #[error("Mirror entity {entity_id} already mirrors another remote entity: {context}")]
    MirrorEntityAlreadyBound {
        entity_id: String,
        context: &'static str,
    },

    /// A mapped mirror entity is missing from the world store
    #[error("Mirror entity missing from world: {context}")]
    MirrorEntityMissing {
        context: &'static str,
    },
}
