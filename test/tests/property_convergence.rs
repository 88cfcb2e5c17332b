/// Property test: for any sequence of spawn/patch/despawn operations on
/// the server, interleaved with replication ticks at arbitrary points, the
/// client mirror reconstructed through the identity map equals the
/// server's live entity/position set once the wire is quiet.
use proptest::prelude::*;

use mirra_shared::{Position, PositionUpdate, RemoteEntity, WorldRefType};
use mirra_test::{TestClient, TestEntity, TestServer};

#[derive(Clone, Debug)]
enum Op {
    Spawn(Position),
    Patch(usize, Position),
    Despawn(usize),
    Tick,
}

fn position_strategy() -> impl Strategy<Value = Position> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0)
        .prop_map(|(x, y, z)| Position::new(x, y, z))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => position_strategy().prop_map(Op::Spawn),
        3 => (any::<usize>(), position_strategy()).prop_map(|(i, p)| Op::Patch(i, p)),
        2 => any::<usize>().prop_map(Op::Despawn),
        2 => Just(Op::Tick),
    ]
}

/// One full round trip: server tick, message delivery, client tick.
fn exchange(server: &mut TestServer, client: &mut TestClient) {
    server.tick();
    client.pump(server);
    client.tick();
}

proptest! {
    #[test]
    fn client_converges_to_server_state(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut server = TestServer::new();
        let mut client = TestClient::connect(&mut server);
        exchange(&mut server, &mut client);

        let mut live: Vec<TestEntity> = Vec::new();

        for op in ops {
            match op {
                Op::Spawn(position) => {
                    live.push(server.spawn(position));
                }
                Op::Patch(index, position) => {
                    if !live.is_empty() {
                        let entity = live[index % live.len()];
                        server.patch(entity, PositionUpdate::replace(position));
                    }
                }
                Op::Despawn(index) => {
                    if !live.is_empty() {
                        let entity = live.remove(index % live.len());
                        server.despawn(entity);
                    }
                }
                Op::Tick => {
                    exchange(&mut server, &mut client);
                }
            }
        }

        // quiescence: flush whatever is still on the wire
        exchange(&mut server, &mut client);
        exchange(&mut server, &mut client);

        let expected: Vec<(RemoteEntity, Position)> = server
            .world
            .entities()
            .iter()
            .map(|entity| {
                (
                    RemoteEntity::from_key(entity),
                    server.world.position(entity).unwrap(),
                )
            })
            .collect();

        prop_assert_eq!(client.mirrored_set(), expected);
        prop_assert_eq!(
            client.backend.object_count(),
            live.len(),
            "one representation object per live entity"
        );
        prop_assert_eq!(client.world.entities().len(), live.len());
    }
}
