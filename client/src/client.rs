use log::{info, warn};

use mirra_shared::{
    coalesce, EntityError, EntityKey, Position, PositionUpdate, RemoteEntity, ReplicationEvent,
    WorldMutType,
};

use crate::{ClientTransport, IdentityMap, RenderBackend, RepresentationBinder};

/// Contains Config properties which will be used by the Client
#[derive(Clone)]
pub struct ClientConfig {
    /// Whether mirror lifecycle transitions are logged at info level.
    pub log_lifecycle: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_lifecycle: true,
        }
    }
}

/// Client-side system phases for one tick.
///
/// The scheduler contract: phases run in [`Phase::ORDER`], so `Cleanup`
/// only ever sees entities marked during the same tick's `Apply` pass, and
/// every other system has observed the tick's changes before anything is
/// despawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Drain the event inbox into the world store and bind representation
    /// objects to whatever that changed.
    Apply,
    /// Destroy representation objects and despawn entities marked during
    /// Apply.
    Cleanup,
}

impl Phase {
    /// Deterministic system order for one client tick.
    pub const ORDER: [Phase; 2] = [Phase::Apply, Phase::Cleanup];
}

/// The mirroring side of the replication protocol. One instance serves one
/// client world.
///
/// [`receive`](Self::receive) is the only entry point legal outside the
/// tick boundary and only enqueues; [`tick`](Self::tick) applies the inbox
/// and cleans up, in phase order. Anomalies (unknown ids, duplicate
/// creates, a mapped entity missing from the world) degrade to logged
/// warnings, never to failure: convergence is recovered by the
/// snapshot-on-ready path, not by crashing the mirror.
pub struct ClientReplicator<E: EntityKey, B: RenderBackend> {
    config: ClientConfig,
    inbox: Vec<ReplicationEvent>,
    identity_map: IdentityMap<E>,
    binder: RepresentationBinder<E, B>,
}

impl<E: EntityKey, B: RenderBackend> ClientReplicator<E, B> {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            inbox: Vec::new(),
            identity_map: IdentityMap::new(),
            binder: RepresentationBinder::new(),
        }
    }

    /// Announces this client to the server; the next server tick answers
    /// with a full snapshot. Called once at composition time.
    pub fn announce_ready(&self, transport: &mut dyn ClientTransport) {
        transport.send_ready();
    }

    /// Handler entry point for an inbound replication event. Safe to call
    /// between ticks; application happens during the next `tick`.
    pub fn receive(&mut self, event: ReplicationEvent) {
        self.inbox.push(event);
    }

    /// Runs the client's systems once, in [`Phase::ORDER`].
    pub fn tick<W: WorldMutType<E>>(&mut self, world: &mut W, backend: &mut B) {
        for phase in Phase::ORDER {
            match phase {
                Phase::Apply => self.apply(world, backend),
                Phase::Cleanup => self.cleanup(world),
            }
        }
    }

    /// The identity map, for inspection. Every entry points at a live
    /// mirror entity not yet marked for removal.
    pub fn identity_map(&self) -> &IdentityMap<E> {
        &self.identity_map
    }

    /// The representation binder, for inspection.
    pub fn binder(&self) -> &RepresentationBinder<E, B> {
        &self.binder
    }

    fn apply<W: WorldMutType<E>>(&mut self, world: &mut W, backend: &mut B) {
        for event in std::mem::take(&mut self.inbox) {
            match event {
                ReplicationEvent::All(entries) => {
                    // a snapshot is a batch of independent creates, applied
                    // in sequence order
                    for (remote, position) in entries {
                        self.apply_create(world, remote, position);
                    }
                }
                ReplicationEvent::Added(remote, position) => {
                    self.apply_create(world, remote, position);
                }
                ReplicationEvent::Changed(remote, position) => {
                    self.apply_change(world, remote, position);
                }
                ReplicationEvent::Removed(remote) => {
                    self.apply_remove(world, remote);
                }
            }
        }

        // Bind backend objects to whatever this pass changed. Folding per
        // entity keeps a spawn that was already rolled back (or patched in
        // the same pass) down to a single observation.
        for (entity, delta) in coalesce(world.take_position_changes()) {
            self.binder.observe(backend, entity, delta);
        }
    }

    fn apply_create<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        remote: RemoteEntity,
        position: Position,
    ) {
        if self.identity_map.contains_remote(&remote) {
            warn!("ignoring duplicate create for {:?}", remote);
            return;
        }

        let local = world.spawn_entity(position);
        match self.identity_map.try_insert(remote, local) {
            Ok(()) => {
                if self.config.log_lifecycle {
                    info!("created mirror {:?} for {:?} at {:?}", local, remote, position);
                }
            }
            Err(error) => {
                // roll the spawn back rather than leave an unmapped mirror
                warn!("create for {:?} not applied: {}", remote, error);
                world.despawn_entity(&local);
            }
        }
    }

    fn apply_change<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        remote: RemoteEntity,
        position: Position,
    ) {
        let Some(local) = self.identity_map.local_entity(&remote).copied() else {
            warn!(
                "{}",
                EntityError::RemoteEntityNotMapped {
                    remote_id: remote.to_u64(),
                    context: "change application",
                }
            );
            return;
        };
        if !world.has_entity(&local) {
            warn!(
                "{}",
                EntityError::MirrorEntityMissing {
                    context: "change application",
                }
            );
            return;
        }

        world.patch_position(&local, PositionUpdate::replace(position));
        if self.config.log_lifecycle {
            info!("moved mirror {:?} to {:?}", local, position);
        }
    }

    fn apply_remove<W: WorldMutType<E>>(&mut self, world: &mut W, remote: RemoteEntity) {
        match self.identity_map.try_remove(&remote) {
            Ok(local) => {
                world.mark_removal(&local);
                if self.config.log_lifecycle {
                    info!("marked mirror {:?} for removal ({:?})", local, remote);
                }
            }
            Err(error) => {
                warn!("removal not applied: {}", error);
            }
        }
    }

    /// Destroys every representation object and despawns every entity
    /// marked during this tick's apply pass. Markers disappear with their
    /// entities; nothing leaks.
    fn cleanup<W: WorldMutType<E>>(&mut self, world: &mut W) {
        for entity in world.removal_marked() {
            self.binder.release(&entity);
            world.despawn_entity(&entity);
            if self.config.log_lifecycle {
                info!("despawned mirror {:?}", entity);
            }
        }
    }
}
