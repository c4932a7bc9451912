//! Mapping from curve interpolation metadata to timeline ease descriptors.
//!
//! The target engine distinguishes string-typed ease identifiers (quoted in
//! the generated document) from callable ease expressions (emitted bare).
//! `EaseDescriptor::Display` renders the exact fragment, quotes included, so
//! the emitter never has to re-inspect the variant.

use std::fmt;

use crate::data::{Easing, Interpolation};
use crate::round::fmt_num;
use crate::segment::TransitionSpec;

/// Resolved easing direction suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

impl EaseDirection {
    /// Resolve an authored easing against the governing interpolation.
    /// `Auto` reads as exit motion for the dynamic-effect kinds and entry
    /// easing for everything else.
    pub fn resolve(easing: Easing, interpolation: Interpolation) -> Self {
        match easing {
            Easing::EaseIn => Self::In,
            Easing::EaseOut => Self::Out,
            Easing::EaseInOut => Self::InOut,
            Easing::Auto => {
                if interpolation.is_dynamic_effect() {
                    Self::Out
                } else {
                    Self::In
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inOut",
        }
    }
}

/// Named ease family in the target engine's vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EaseFamily {
    Sine,
    Power1,
    Power2,
    Power3,
    Power4,
    Expo,
    Circ,
}

impl EaseFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Power1 => "power1",
            Self::Power2 => "power2",
            Self::Power3 => "power3",
            Self::Power4 => "power4",
            Self::Expo => "expo",
            Self::Circ => "circ",
        }
    }
}

/// Target-engine-facing encoding of how a segment transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum EaseDescriptor {
    /// Step hold: the value stays until the next segment.
    Hold,
    /// Identity ease.
    Linear,
    /// A named monotonic curve with a direction suffix, e.g. `"sine.in"`.
    Curve {
        family: EaseFamily,
        direction: EaseDirection,
    },
    /// Overshoot with a configurable back magnitude.
    Back {
        direction: EaseDirection,
        overshoot: f32,
    },
    /// Bounce takes no parameters regardless of configured dynamics.
    Bounce { direction: EaseDirection },
    /// Elastic with amplitude/period already normalized to the target
    /// engine's value/time-relative convention.
    Elastic {
        direction: EaseDirection,
        amplitude: f32,
        period: f32,
    },
    /// Inline cubic-bezier control-point ratios (x1, y1, x2, y2).
    CubicBezier([f32; 4]),
}

impl EaseDescriptor {
    /// Whether the rendered fragment is a double-quoted string identifier
    /// rather than a bare callable expression.
    pub fn is_quoted(&self) -> bool {
        !matches!(self, Self::Hold | Self::CubicBezier(_))
    }
}

impl fmt::Display for EaseDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hold => f.write_str("config.constantEase"),
            Self::Linear => f.write_str("\"linear\""),
            Self::Curve { family, direction } => {
                write!(f, "\"{}.{}\"", family.as_str(), direction.as_str())
            }
            Self::Back {
                direction,
                overshoot,
            } => write!(f, "\"back.{}({})\"", direction.as_str(), fmt_num(*overshoot)),
            Self::Bounce { direction } => write!(f, "\"bounce.{}\"", direction.as_str()),
            Self::Elastic {
                direction,
                amplitude,
                period,
            } => write!(
                f,
                "\"elastic.{}({}, {})\"",
                direction.as_str(),
                fmt_num(*amplitude),
                fmt_num(*period)
            ),
            Self::CubicBezier([x1, y1, x2, y2]) => write!(
                f,
                "config.bezierEase({},{},{},{})",
                fmt_num(*x1),
                fmt_num(*y1),
                fmt_num(*x2),
                fmt_num(*y2)
            ),
        }
    }
}

/// Map a segment's governing transition metadata to an ease descriptor.
/// Dynamic parameters and bezier ratios in `transition` are already
/// normalized and quantized by the segment extractor.
pub fn map_ease(transition: &TransitionSpec) -> EaseDescriptor {
    let direction = EaseDirection::resolve(transition.easing, transition.interpolation);
    let curve = |family| EaseDescriptor::Curve { family, direction };
    match transition.interpolation {
        Interpolation::Constant => EaseDescriptor::Hold,
        Interpolation::Linear => EaseDescriptor::Linear,
        Interpolation::Bezier => EaseDescriptor::CubicBezier(transition.bezier),
        Interpolation::Sine => curve(EaseFamily::Sine),
        Interpolation::Quad => curve(EaseFamily::Power1),
        Interpolation::Cubic => curve(EaseFamily::Power2),
        Interpolation::Quart => curve(EaseFamily::Power3),
        Interpolation::Quint => curve(EaseFamily::Power4),
        Interpolation::Expo => curve(EaseFamily::Expo),
        Interpolation::Circ => curve(EaseFamily::Circ),
        Interpolation::Back => EaseDescriptor::Back {
            direction,
            overshoot: transition.back,
        },
        Interpolation::Bounce => EaseDescriptor::Bounce { direction },
        Interpolation::Elastic => EaseDescriptor::Elastic {
            direction,
            amplitude: transition.amplitude,
            period: transition.period,
        },
    }
}
