//! Channel-path resolution to the tracked target properties.
//!
//! A channel is addressed by `(data_path, array_index)`. Three roots are
//! recognized (`location`, `rotation_euler`, `scale`), each with components
//! 0..=2; everything else is an unsupported channel and contributes nothing
//! to the export.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the 9 properties a tween can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetProperty {
    X,
    Y,
    Z,
    RotationX,
    RotationY,
    RotationZ,
    ScaleX,
    ScaleY,
    ScaleZ,
}

impl TargetProperty {
    /// Resolve a channel address to a tracked property. `None` means the
    /// channel is unsupported and must be skipped.
    pub fn resolve(data_path: &str, array_index: u32) -> Option<Self> {
        let by_component = |props: [Self; 3]| props.get(array_index as usize).copied();
        match data_path {
            "location" => by_component([Self::X, Self::Y, Self::Z]),
            "rotation_euler" => by_component([Self::RotationX, Self::RotationY, Self::RotationZ]),
            "scale" => by_component([Self::ScaleX, Self::ScaleY, Self::ScaleZ]),
            _ => None,
        }
    }

    /// Property name as it appears in the emitted document.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::RotationX => "rotationX",
            Self::RotationY => "rotationY",
            Self::RotationZ => "rotationZ",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::ScaleZ => "scaleZ",
        }
    }

    /// Rotation channels carry radians and are emitted in degrees.
    #[inline]
    pub fn is_rotation(self) -> bool {
        matches!(self, Self::RotationX | Self::RotationY | Self::RotationZ)
    }
}

impl fmt::Display for TargetProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
