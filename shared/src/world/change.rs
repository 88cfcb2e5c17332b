use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::{EntityKey, Position};

/// One changed-query observation: an entity's Position before and after,
/// since the query was last drained. Absent `old` means the component was
/// created, absent `new` means it was removed (or the entity despawned).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionDelta {
    pub old: Option<Position>,
    pub new: Option<Position>,
}

/// Folds multiple same-tick observations of one entity into a single delta:
/// the first observation's `old` and the last observation's `new` win.
/// An entity created and removed within the same drain folds to a delta
/// with neither value and drops out entirely.
///
/// Stores that already coalesce per entity pass through unchanged, in the
/// original observation order.
pub fn coalesce<E: EntityKey>(changes: Vec<(E, PositionDelta)>) -> Vec<(E, PositionDelta)> {
    let mut merged: HashMap<E, PositionDelta> = HashMap::new();
    let mut order: Vec<E> = Vec::new();

    for (entity, delta) in changes {
        match merged.entry(entity) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().new = delta.new;
            }
            Entry::Vacant(vacant) => {
                vacant.insert(delta);
                order.push(entity);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|entity| {
            let delta = merged[&entity];
            if delta.old.is_none() && delta.new.is_none() {
                return None;
            }
            Some((entity, delta))
        })
        .collect()
}
