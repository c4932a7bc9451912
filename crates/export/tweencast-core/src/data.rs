//! Canonical keyframe data model for animated channels.
//!
//! The vocabulary (interpolation kinds, easing directions, handle layout,
//! dynamic-effect parameters) mirrors the source animation model's curve
//! attributes; `scene.rs` carries the surrounding document schema.

use serde::{Deserialize, Serialize};

/// 2D handle position in (frame, value) space.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Per-segment interpolation kind, taken from the outgoing keyframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interpolation {
    Constant,
    Linear,
    Bezier,
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
    Back,
    Bounce,
    Elastic,
}

impl Interpolation {
    /// Overshooting/oscillating kinds whose motion reads as exit easing.
    #[inline]
    pub fn is_dynamic_effect(self) -> bool {
        matches!(self, Self::Back | Self::Bounce | Self::Elastic)
    }
}

/// Per-keyframe easing direction; `Auto` resolves per interpolation kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Easing {
    #[default]
    Auto,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// Dynamic-effect parameters carried by every keyframe. Only the kinds
/// that use them read them (`Back` -> back, `Elastic` -> amplitude/period).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Dynamics {
    #[serde(default = "default_back")]
    pub back: f32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_period")]
    pub period: f32,
}

fn default_back() -> f32 {
    1.0
}

fn default_amplitude() -> f32 {
    1.0
}

fn default_period() -> f32 {
    0.3
}

impl Default for Dynamics {
    fn default() -> Self {
        Self {
            back: default_back(),
            amplitude: default_amplitude(),
            period: default_period(),
        }
    }
}

/// A single keyframe on one animated channel.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    /// Position on the timeline, in frames.
    pub frame: f32,
    pub value: f32,
    pub interpolation: Interpolation,
    #[serde(default)]
    pub easing: Easing,
    /// Incoming tangent handle (frame, value).
    #[serde(default)]
    pub handle_left: Vec2,
    /// Outgoing tangent handle (frame, value).
    #[serde(default)]
    pub handle_right: Vec2,
    #[serde(default)]
    pub dynamics: Dynamics,
}

/// An animated scalar property of one object: a data path plus a component
/// index, holding ordered keyframes. Resolution to one of the 9 tracked
/// properties happens in `binding.rs`; unresolvable channels are skipped.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub data_path: String,
    pub array_index: u32,
    pub keyframes: Vec<Keyframe>,
}
