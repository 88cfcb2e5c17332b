/// Recording render backend for E2E testing
///
/// Tracks every live object and its position so tests can assert on the
/// visible scene, plus running create/destroy counters.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use mirra_client::{RenderBackend, RenderObject};
use mirra_shared::Position;

struct Scene {
    next_id: u64,
    objects: HashMap<u64, Position>,
    created: usize,
    destroyed: usize,
}

pub struct StubBackend {
    scene: Arc<Mutex<Scene>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self {
            scene: Arc::new(Mutex::new(Scene {
                next_id: 0,
                objects: HashMap::new(),
                created: 0,
                destroyed: 0,
            })),
        }
    }

    /// Live objects in the scene.
    pub fn object_count(&self) -> usize {
        self.scene.lock().unwrap().objects.len()
    }

    /// Positions of every live object, in creation order.
    pub fn positions(&self) -> Vec<Position> {
        let scene = self.scene.lock().unwrap();
        let mut entries: Vec<(u64, Position)> = scene
            .objects
            .iter()
            .map(|(id, position)| (*id, *position))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, position)| position).collect()
    }

    pub fn created_total(&self) -> usize {
        self.scene.lock().unwrap().created
    }

    pub fn destroyed_total(&self) -> usize {
        self.scene.lock().unwrap().destroyed
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for StubBackend {
    type Object = StubObject;

    fn create_object(&mut self, position: Position) -> StubObject {
        let mut scene = self.scene.lock().unwrap();
        let id = scene.next_id;
        scene.next_id += 1;
        scene.objects.insert(id, position);
        scene.created += 1;
        StubObject {
            id,
            scene: Arc::clone(&self.scene),
        }
    }
}

pub struct StubObject {
    id: u64,
    scene: Arc<Mutex<Scene>>,
}

impl RenderObject for StubObject {
    fn set_position(&mut self, position: Position) {
        self.scene.lock().unwrap().objects.insert(self.id, position);
    }

    fn destroy(self) {
        let mut scene = self.scene.lock().unwrap();
        scene.objects.remove(&self.id);
        scene.destroyed += 1;
    }
}
