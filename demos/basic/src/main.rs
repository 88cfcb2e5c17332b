//! One-process composition of the replication protocol: an authoritative
//! server world and two client mirrors wired over the in-memory socket,
//! driven through a fixed tick loop. The second mirror joins late and
//! catches up through the snapshot-on-ready path.

use log::info;

use mirra_client::shared::{ClientRequest, Position, PositionUpdate, WorldMutType};
use mirra_client::{ClientConfig, ClientReplicator};
use mirra_server::{ClientKey, ServerConfig, ServerReplicator};
use mirra_test::{LocalSocket, StubBackend, TestEntity, TestWorld};

struct Mirror {
    key: ClientKey,
    world: TestWorld,
    replicator: ClientReplicator<TestEntity, StubBackend>,
    backend: StubBackend,
}

impl Mirror {
    /// Connects to the server's socket and announces readiness.
    fn connect(socket: &mut LocalSocket) -> Self {
        let mut client_socket = socket.connect();
        info!("connected as client #{}", client_socket.key().to_u64());
        let replicator = ClientReplicator::new(ClientConfig::default());
        replicator.announce_ready(&mut client_socket);
        Self {
            key: client_socket.key(),
            world: TestWorld::new(),
            replicator,
            backend: StubBackend::new(),
        }
    }

    /// Message arrival plus one client tick.
    fn step(&mut self, socket: &mut LocalSocket) {
        for event in socket.drain_client(&self.key) {
            self.replicator.receive(event);
        }
        self.replicator.tick(&mut self.world, &mut self.backend);
    }

    fn report(&self, name: &str) {
        info!(
            "{}: {} mirrored entities, {} visible objects at {:?}",
            name,
            self.replicator.identity_map().len(),
            self.backend.object_count(),
            self.backend.positions(),
        );
    }
}

/// Route queued client requests, then run the server's replication systems.
fn server_tick(
    world: &mut TestWorld,
    replicator: &mut ServerReplicator<TestEntity>,
    socket: &mut LocalSocket,
) {
    for (client, request) in socket.take_requests() {
        match request {
            ClientRequest::Ready => replicator.receive_ready(client),
        }
    }
    replicator.tick(world, socket);
}

fn main() {
    env_logger::init();

    let mut world = TestWorld::new();
    let mut replicator: ServerReplicator<TestEntity> = ServerReplicator::new(ServerConfig {
        log_broadcasts: true,
    });
    let mut socket = LocalSocket::new();

    let mut first_mirror = Mirror::connect(&mut socket);

    // tick 1: the first mirror's Ready is answered with an empty snapshot
    server_tick(&mut world, &mut replicator, &mut socket);
    first_mirror.step(&mut socket);

    // tick 2: one entity appears
    let first_entity = world.spawn_entity(Position::new(1.0, 1.0, 1.0));
    server_tick(&mut world, &mut replicator, &mut socket);
    first_mirror.step(&mut socket);
    first_mirror.report("first mirror");

    // tick 3: a second entity appears, and the first moves in the same tick
    let second_entity = world.spawn_entity(Position::new(0.0, 10.0, 0.0));
    world.patch_position(
        &first_entity,
        PositionUpdate::replace(Position::new(10.0, 10.0, 0.0)),
    );
    server_tick(&mut world, &mut replicator, &mut socket);
    first_mirror.step(&mut socket);
    first_mirror.report("first mirror");

    // tick 4: the second entity is gone again
    world.despawn_entity(&second_entity);
    server_tick(&mut world, &mut replicator, &mut socket);
    first_mirror.step(&mut socket);
    first_mirror.report("first mirror");

    // tick 5: a late joiner catches up through the snapshot path
    let mut second_mirror = Mirror::connect(&mut socket);
    server_tick(&mut world, &mut replicator, &mut socket);
    first_mirror.step(&mut socket);
    second_mirror.step(&mut socket);
    second_mirror.report("second mirror");

    info!(
        "mirrors agree: {}",
        first_mirror.backend.positions() == second_mirror.backend.positions()
    );
}
