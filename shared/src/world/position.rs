use serde::{Deserialize, Serialize};

/// The replicated component: a 3-dimensional coordinate attached to an
/// entity. The value is replaced in place; entity identity never changes
/// with it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns this position with `update` applied. Axes the update leaves
    /// unset are copied forward unchanged.
    pub fn patched(&self, update: PositionUpdate) -> Self {
        Self {
            x: update.x.unwrap_or(self.x),
            y: update.y.unwrap_or(self.y),
            z: update.z.unwrap_or(self.z),
        }
    }
}

/// A partial update to a [`Position`]. Unset axes leave the current value
/// untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

impl PositionUpdate {
    /// An update that replaces every axis with `position`'s.
    pub fn replace(position: Position) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
            z: Some(position.z),
        }
    }
}
