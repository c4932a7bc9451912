//! Segment extraction: the per-keyframe math of the export.
//!
//! A segment is the closed interval between two consecutive keyframes on
//! one channel. The outgoing keyframe governs how the segment eases, so its
//! interpolation/easing/dynamics travel with the segment; the incoming
//! keyframe contributes only its left handle and end value. Segments are
//! produced and consumed within one compilation pass.

use crate::binding::TargetProperty;
use crate::data::{Easing, Interpolation, Keyframe};
use crate::error::ExportError;
use crate::round::round4;

/// Governing transition metadata for one segment, with dynamic parameters
/// already normalized to the target engine's conventions and quantized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    pub interpolation: Interpolation,
    pub easing: Easing,
    /// Back overshoot magnitude.
    pub back: f32,
    /// Elastic amplitude divided by the segment's absolute value delta.
    pub amplitude: f32,
    /// Elastic period divided by the frame rate.
    pub period: f32,
    /// Handle-offset ratios (x1, y1, x2, y2), unclamped.
    pub bezier: [f32; 4],
}

/// One derived segment, in seconds and output units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub property: TargetProperty,
    /// Absolute start position on the timeline, seconds.
    pub start_time: f32,
    pub duration: f32,
    pub start_value: f32,
    pub end_value: f32,
    pub transition: TransitionSpec,
}

/// Ratio with the degenerate-denominator fallback: a zero extent on either
/// axis resolves to 0.0 rather than dividing by zero.
#[inline]
fn safe_ratio(offset: f32, extent: f32) -> f32 {
    if extent == 0.0 {
        0.0
    } else {
        offset / extent
    }
}

/// Walk one channel's ordered keyframes and derive its segments.
/// N keyframes yield N-1 segments; all rounding to 4 decimals happens here,
/// at the point of derivation. Rotation-valued channels convert radians to
/// degrees before rounding. `fps` must already be validated as positive.
pub fn extract_segments(
    property: TargetProperty,
    keyframes: &[Keyframe],
    fps: f32,
) -> Result<Vec<Segment>, ExportError> {
    let mut segments = Vec::with_capacity(keyframes.len().saturating_sub(1));
    for pair in keyframes.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        let frame_delta = cur.frame - prev.frame;
        if frame_delta <= 0.0 {
            return Err(ExportError::NonMonotonicKeyframes {
                property: property.name(),
                frame: cur.frame,
            });
        }
        let value_delta = (cur.value - prev.value).abs();

        let output_value = |v: f32| {
            if property.is_rotation() {
                round4(v.to_degrees())
            } else {
                round4(v)
            }
        };

        // Handle offsets measured against the keyframe that owns the handle,
        // as ratios of the segment extent on each axis.
        let bezier = [
            round4(safe_ratio((prev.handle_right.x - prev.frame).abs(), frame_delta)),
            round4(safe_ratio((prev.handle_right.y - prev.value).abs(), value_delta)),
            round4(safe_ratio((cur.handle_left.x - cur.frame).abs(), frame_delta)),
            round4(safe_ratio((cur.handle_left.y - cur.value).abs(), value_delta)),
        ];

        segments.push(Segment {
            property,
            start_time: round4(prev.frame / fps),
            duration: round4(frame_delta / fps),
            start_value: output_value(prev.value),
            end_value: output_value(cur.value),
            transition: TransitionSpec {
                interpolation: prev.interpolation,
                easing: prev.easing,
                back: round4(prev.dynamics.back),
                amplitude: round4(safe_ratio(prev.dynamics.amplitude, value_delta)),
                period: round4(prev.dynamics.period / fps),
                bezier,
            },
        });
    }
    Ok(segments)
}
