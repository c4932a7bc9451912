//! tweencast core (engine-agnostic)
//!
//! Transcodes keyframe animation channels (per-object position, rotation
//! and scale curves with per-keyframe interpolation and easing metadata)
//! into a declarative tween sequence for a GSAP-style timeline engine,
//! together with the rest-pose data table the tweens mutate. The host
//! application supplies the scene through the [`scene::SceneHost`] seam;
//! this crate owns the ease mapping, segment math, compilation and
//! document rendering.

pub mod binding;
pub mod compile;
pub mod config;
pub mod data;
pub mod ease;
pub mod emit;
pub mod error;
pub mod round;
pub mod scene;
pub mod segment;
pub mod snapshot;

// Re-exports for consumers (host adapters)
pub use binding::TargetProperty;
pub use compile::{compile_object, compile_scene, export_scene, ExportDocument, TweenDescriptor};
pub use config::Config;
pub use data::{Channel, Dynamics, Easing, Interpolation, Keyframe, Vec2};
pub use ease::{map_ease, EaseDescriptor, EaseDirection, EaseFamily};
pub use emit::render_document;
pub use error::ExportError;
pub use scene::{
    parse_scene_json, ActionData, FrameRate, ObjectRecord, PlayheadGuard, SceneDocument,
    SceneHost, Transform,
};
pub use segment::{extract_segments, Segment, TransitionSpec};
pub use snapshot::ObjectSnapshot;
