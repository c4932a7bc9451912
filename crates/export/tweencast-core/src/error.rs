//! Error types for the export pass.

/// Fatal conditions that abort an export. Unsupported channels are not
/// errors; they are skipped during compilation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ExportError {
    /// The scene frame rate resolves to zero or a non-finite value.
    #[error("invalid frame rate: {fps} / {base} (effective rate must be finite and > 0)")]
    InvalidFrameRate { fps: f32, base: f32 },

    /// Two consecutive keyframes on one channel share a frame, or run
    /// backwards in time. Segment durations are undefined for such input.
    #[error("keyframes on '{property}' must be strictly increasing in time (offending frame {frame})")]
    NonMonotonicKeyframes { property: &'static str, frame: f32 },

    /// Scene document could not be parsed or serialized.
    #[error("scene document error: {reason}")]
    Document { reason: String },
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Document {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_channel() {
        let err = ExportError::NonMonotonicKeyframes {
            property: "rotationX",
            frame: 12.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("rotationX"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn json_errors_convert() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: ExportError = bad.unwrap_err().into();
        assert!(matches!(err, ExportError::Document { .. }));
    }
}
