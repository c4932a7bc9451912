//! Rest-pose snapshots: the initial state records the tweens mutate.

use serde::{Deserialize, Serialize};

use crate::round::round4;
use crate::scene::Transform;

/// Per-object rest pose sampled at the rest frame. Field names match the
/// tween property names; rotation is in degrees, everything rounded to 4
/// decimals.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ObjectSnapshot {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(rename = "rotationX")]
    pub rotation_x: f32,
    #[serde(rename = "rotationY")]
    pub rotation_y: f32,
    #[serde(rename = "rotationZ")]
    pub rotation_z: f32,
    #[serde(rename = "scaleX")]
    pub scale_x: f32,
    #[serde(rename = "scaleY")]
    pub scale_y: f32,
    #[serde(rename = "scaleZ")]
    pub scale_z: f32,
}

impl ObjectSnapshot {
    pub fn from_transform(transform: &Transform) -> Self {
        let [x, y, z] = transform.translation;
        let [rx, ry, rz] = transform.rotation_euler;
        let [sx, sy, sz] = transform.scale;
        Self {
            x: round4(x),
            y: round4(y),
            z: round4(z),
            rotation_x: round4(rx.to_degrees()),
            rotation_y: round4(ry.to_degrees()),
            rotation_z: round4(rz.to_degrees()),
            scale_x: round4(sx),
            scale_y: round4(sy),
            scale_z: round4(sz),
        }
    }
}
