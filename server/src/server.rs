use std::marker::PhantomData;

use log::{info, trace};

use mirra_shared::{
    coalesce, EntityKey, Position, RemoteEntity, ReplicationEvent, WorldMutType, WorldRefType,
};

use crate::{ClientKey, ServerTransport};

/// Contains Config properties which will be used by the Server
#[derive(Clone)]
pub struct ServerConfig {
    /// Whether every broadcast decision is logged at trace level.
    pub log_broadcasts: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_broadcasts: false,
        }
    }
}

/// The authoritative side of the replication protocol. One instance serves
/// one server world.
///
/// `receive_ready` is the only entry point legal outside the tick boundary
/// and only enqueues; everything else happens inside [`tick`], which the
/// host's scheduler invokes once per cadence beat. The server world is
/// never mutated by replication.
///
/// [`tick`]: ServerReplicator::tick
pub struct ServerReplicator<E: EntityKey> {
    config: ServerConfig,
    pending_ready: Vec<ClientKey>,
    phantom_e: PhantomData<E>,
}

impl<E: EntityKey> ServerReplicator<E> {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            pending_ready: Vec::new(),
            phantom_e: PhantomData,
        }
    }

    /// Handler entry point for an inbound Ready signal. Safe to call
    /// between ticks; the snapshot goes out during the next `tick`, built
    /// from the same state as that tick's diff broadcast.
    pub fn receive_ready(&mut self, client: ClientKey) {
        self.pending_ready.push(client);
    }

    /// Runs the server's replication systems once, in order: the diff
    /// broadcast, then the snapshot responder.
    pub fn tick<W: WorldMutType<E>>(&mut self, world: &mut W, transport: &mut dyn ServerTransport) {
        self.replicate_changes(world, transport);
        self.serve_ready(world, transport);
    }

    /// Drains the world's change journal, folds same-tick observations per
    /// entity, and broadcasts one event per surviving observation. A
    /// create-then-update within the tick therefore surfaces as exactly
    /// one Added carrying the final value.
    fn replicate_changes<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        transport: &mut dyn ServerTransport,
    ) {
        for (entity, delta) in coalesce(world.take_position_changes()) {
            let remote = RemoteEntity::from_key(&entity);
            let event = match (delta.old, delta.new) {
                (None, Some(position)) => ReplicationEvent::Added(remote, position),
                (Some(_), None) => ReplicationEvent::Removed(remote),
                (Some(_), Some(position)) => ReplicationEvent::Changed(remote, position),
                // coalesce() drops observations with neither value
                (None, None) => continue,
            };
            if self.config.log_broadcasts {
                trace!("broadcast {:?}", event);
            }
            transport.broadcast(event);
        }
    }

    /// Serves every Ready queued since the last tick with one snapshot of
    /// the current state: each entity holding a Position, enumerated once.
    fn serve_ready<W: WorldRefType<E>>(&mut self, world: &W, transport: &mut dyn ServerTransport) {
        if self.pending_ready.is_empty() {
            return;
        }

        let snapshot: Vec<(RemoteEntity, Position)> = world
            .entities()
            .iter()
            .filter_map(|entity| {
                world
                    .position(entity)
                    .map(|position| (RemoteEntity::from_key(entity), position))
            })
            .collect();

        for client in std::mem::take(&mut self.pending_ready) {
            info!(
                "serving snapshot of {} entities to client {:?}",
                snapshot.len(),
                client
            );
            transport.send(client, ReplicationEvent::All(snapshot.clone()));
        }
    }
}
