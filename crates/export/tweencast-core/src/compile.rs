//! Curve-to-tween compilation: the full export pass.
//!
//! Per object, the first segment of each property becomes a from-to
//! descriptor carrying an explicit start value; later segments become to
//! descriptors, since the target engine continues from the live property
//! value. Objects without an animation container are skipped outright;
//! objects with one but no supported channels still contribute a snapshot.

use hashbrown::HashSet;
use indexmap::IndexMap;
use log::debug;

use crate::binding::TargetProperty;
use crate::config::Config;
use crate::ease::{map_ease, EaseDescriptor};
use crate::emit::render_document;
use crate::error::ExportError;
use crate::scene::{ActionData, PlayheadGuard, SceneHost};
use crate::segment::extract_segments;
use crate::snapshot::ObjectSnapshot;

/// One emitted tween instruction. `start` is present only for the first
/// segment of a property on its object.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenDescriptor {
    pub object: String,
    pub property: TargetProperty,
    /// Seconds.
    pub duration: f32,
    /// Absolute start position on the timeline, seconds.
    pub position: f32,
    pub start: Option<f32>,
    pub end: f32,
    pub ease: EaseDescriptor,
}

/// Compiled output of one pass: the rest-pose table (object enumeration
/// order) and the tween sequence (emission order).
#[derive(Clone, Debug, PartialEq)]
pub struct ExportDocument {
    pub snapshots: IndexMap<String, ObjectSnapshot>,
    pub tweens: Vec<TweenDescriptor>,
}

impl ExportDocument {
    /// Render the generated timeline module.
    pub fn render(&self) -> Result<String, ExportError> {
        render_document(self)
    }
}

/// Compile one object's channels into tween descriptors, in channel order.
pub fn compile_object(
    object: &str,
    action: &ActionData,
    fps: f32,
) -> Result<Vec<TweenDescriptor>, ExportError> {
    let mut tweens = Vec::new();
    let mut established: HashSet<TargetProperty> = HashSet::new();
    for channel in &action.channels {
        let Some(property) = TargetProperty::resolve(&channel.data_path, channel.array_index)
        else {
            debug!(
                "skipping unsupported channel '{}[{}]' on '{}'",
                channel.data_path, channel.array_index, object
            );
            continue;
        };
        for segment in extract_segments(property, &channel.keyframes, fps)? {
            let ease = map_ease(&segment.transition);
            let start = if established.insert(property) {
                Some(segment.start_value)
            } else {
                None
            };
            tweens.push(TweenDescriptor {
                object: object.to_string(),
                property,
                duration: segment.duration,
                position: segment.start_time,
                start,
                end: segment.end_value,
                ease,
            });
        }
    }
    Ok(tweens)
}

/// Run the whole pass against a scene host. The playhead cursor is parked
/// at the configured rest frame for the duration of the pass and restored
/// before returning, on success and on error alike.
pub fn compile_scene<H: SceneHost + ?Sized>(
    host: &mut H,
    config: &Config,
) -> Result<ExportDocument, ExportError> {
    let fps = host.frame_rate().validate()?;
    let guard = PlayheadGuard::acquire(host, config.rest_frame);

    let mut snapshots = IndexMap::new();
    let mut tweens = Vec::new();
    for name in guard.host().object_names() {
        let Some(action) = guard.host().action(&name) else {
            continue;
        };
        let transform = guard.host().world_transform(&name);
        snapshots.insert(name.clone(), ObjectSnapshot::from_transform(&transform));
        tweens.extend(compile_object(&name, action, fps)?);
    }

    Ok(ExportDocument { snapshots, tweens })
}

/// Compile and render in one step. A fatal error never yields a truncated
/// document.
pub fn export_scene<H: SceneHost + ?Sized>(
    host: &mut H,
    config: &Config,
) -> Result<String, ExportError> {
    compile_scene(host, config)?.render()
}
