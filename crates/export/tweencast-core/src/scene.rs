//! Scene-host interface consumed by the export pass.
//!
//! The host application owns the scene graph, the playhead cursor and the
//! ability to sample world transforms; the exporter only ever sees this
//! seam. `SceneDocument` is the serde-backed reference implementation used
//! for data-driven exports and tests.

use serde::{Deserialize, Serialize};

use crate::binding::TargetProperty;
use crate::data::Channel;
use crate::error::ExportError;

/// Scene frame rate as two components combined by division.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct FrameRate {
    pub fps: f32,
    #[serde(default = "default_base")]
    pub base: f32,
}

fn default_base() -> f32 {
    1.0
}

impl FrameRate {
    /// Effective frames-per-second.
    #[inline]
    pub fn effective(self) -> f32 {
        self.fps / self.base
    }

    pub(crate) fn validate(self) -> Result<f32, ExportError> {
        let fps = self.effective();
        if !fps.is_finite() || fps <= 0.0 {
            return Err(ExportError::InvalidFrameRate {
                fps: self.fps,
                base: self.base,
            });
        }
        Ok(fps)
    }
}

/// World-space pose of one object. Rotation is an XYZ Euler, in radians.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub translation: [f32; 3],
    pub rotation_euler: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation_euler: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

/// An object's animation container: its set of animated channels.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionData {
    #[serde(default)]
    pub name: String,
    pub channels: Vec<Channel>,
}

/// The scene-traversal collaborator. `world_transform` samples at the
/// host's current playhead position, which is shared mutable state; the
/// exporter brackets all sampling with a [`PlayheadGuard`].
pub trait SceneHost {
    fn frame_rate(&self) -> FrameRate;
    fn current_frame(&self) -> f32;
    fn seek(&mut self, frame: f32);
    /// Object names in enumeration order.
    fn object_names(&self) -> Vec<String>;
    fn action(&self, object: &str) -> Option<&ActionData>;
    fn world_transform(&self, object: &str) -> Transform;
}

/// Scoped hold on the host's playhead cursor. Acquiring seeks to the rest
/// frame; dropping restores the original position, so the net effect of a
/// pass on the cursor is zero even when compilation bails early.
pub struct PlayheadGuard<'a, H: SceneHost + ?Sized> {
    host: &'a mut H,
    original: f32,
}

impl<'a, H: SceneHost + ?Sized> PlayheadGuard<'a, H> {
    pub fn acquire(host: &'a mut H, frame: f32) -> Self {
        let original = host.current_frame();
        host.seek(frame);
        Self { host, original }
    }

    /// Playhead position the guard will restore.
    pub fn original(&self) -> f32 {
        self.original
    }

    /// Read access to the held host.
    pub fn host(&self) -> &H {
        self.host
    }
}

impl<H: SceneHost + ?Sized> Drop for PlayheadGuard<'_, H> {
    fn drop(&mut self) {
        self.host.seek(self.original);
    }
}

/// One object record in a scene document. `rest` is the world-space pose
/// authored at the rest frame.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    pub name: String,
    #[serde(default)]
    pub rest: Transform,
    #[serde(default)]
    pub action: Option<ActionData>,
}

/// Serde-backed scene snapshot implementing [`SceneHost`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    pub frame_rate: FrameRate,
    #[serde(default)]
    pub current_frame: f32,
    pub objects: Vec<ObjectRecord>,
}

impl SceneDocument {
    /// Validate basic invariants: a usable frame rate and strictly
    /// increasing keyframe times on every supported channel.
    pub fn validate(&self) -> Result<(), ExportError> {
        self.frame_rate.validate()?;
        for object in &self.objects {
            let Some(action) = &object.action else {
                continue;
            };
            for channel in &action.channels {
                let Some(property) =
                    TargetProperty::resolve(&channel.data_path, channel.array_index)
                else {
                    continue;
                };
                let mut last = f32::NEG_INFINITY;
                for key in &channel.keyframes {
                    if key.frame <= last {
                        return Err(ExportError::NonMonotonicKeyframes {
                            property: property.name(),
                            frame: key.frame,
                        });
                    }
                    last = key.frame;
                }
            }
        }
        Ok(())
    }
}

impl SceneHost for SceneDocument {
    fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    fn current_frame(&self) -> f32 {
        self.current_frame
    }

    fn seek(&mut self, frame: f32) {
        self.current_frame = frame;
    }

    fn object_names(&self) -> Vec<String> {
        self.objects.iter().map(|o| o.name.clone()).collect()
    }

    fn action(&self, object: &str) -> Option<&ActionData> {
        self.objects
            .iter()
            .find(|o| o.name == object)
            .and_then(|o| o.action.as_ref())
    }

    fn world_transform(&self, object: &str) -> Transform {
        self.objects
            .iter()
            .find(|o| o.name == object)
            .map(|o| o.rest)
            .unwrap_or_default()
    }
}

/// Parse and validate a scene document from JSON.
pub fn parse_scene_json(s: &str) -> Result<SceneDocument, ExportError> {
    let doc: SceneDocument = serde_json::from_str(s)?;
    doc.validate()?;
    Ok(doc)
}
