//! Rendering the compiled document as a timeline module.
//!
//! The output is a mixed data/code artifact: a JSON data table mapping
//! object names to rest-pose records, a timeline-construction routine whose
//! body is one call per tween, and a trailing export exposing both. Quoted
//! ease identifiers and bare ease expressions are rendered exactly as the
//! descriptors dictate.

use indexmap::IndexMap;
use serde::Serialize;

use crate::compile::{ExportDocument, TweenDescriptor};
use crate::error::ExportError;
use crate::round::fmt_num;
use crate::snapshot::ObjectSnapshot;

/// Render the full document. All numbers were quantized when derived; no
/// further rounding happens here.
pub fn render_document(document: &ExportDocument) -> Result<String, ExportError> {
    let data = data_literal(&document.snapshots)?;
    let mut tweens = String::new();
    for tween in &document.tweens {
        tweens.push_str(&render_tween(tween));
    }
    Ok(format!(
        "const data = {data};\n\n\
         function create(tl, config) {{\n{tweens}}}\n\n\
         export default {{\n\tdata, create\n}};\n"
    ))
}

/// The object -> rest-pose table as a 4-space-indented JSON literal, in
/// enumeration order.
fn data_literal(snapshots: &IndexMap<String, ObjectSnapshot>) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    snapshots.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|err| ExportError::Document {
        reason: err.to_string(),
    })
}

/// One timeline call. From-to tweens re-state the start value; to tweens
/// continue from the live value at playback time.
fn render_tween(tween: &TweenDescriptor) -> String {
    let prop = tween.property.name();
    let end = fmt_num(tween.end);
    let duration = fmt_num(tween.duration);
    let position = fmt_num(tween.position);
    match tween.start {
        Some(start) => format!(
            "\ttl.fromTo(data[{:?}], {duration}, {{ {prop}: {} }}, {{ {prop}: {end}, ease: {} }}, {position});\n",
            tween.object,
            fmt_num(start),
            tween.ease,
        ),
        None => format!(
            "\ttl.to(data[{:?}], {duration}, {{ {prop}: {end}, ease: {} }}, {position});\n",
            tween.object, tween.ease,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::TargetProperty;
    use crate::ease::{EaseDescriptor, EaseDirection, EaseFamily};

    #[test]
    fn from_to_and_to_lines() {
        let first = TweenDescriptor {
            object: "Cube".into(),
            property: TargetProperty::X,
            duration: 0.4167,
            position: 0.0,
            start: Some(0.0),
            end: 2.0,
            ease: EaseDescriptor::Curve {
                family: EaseFamily::Sine,
                direction: EaseDirection::In,
            },
        };
        assert_eq!(
            render_tween(&first),
            "\ttl.fromTo(data[\"Cube\"], 0.4167, { x: 0 }, { x: 2, ease: \"sine.in\" }, 0);\n"
        );

        let follow = TweenDescriptor {
            start: None,
            position: 0.4167,
            end: -1.5,
            ease: EaseDescriptor::Hold,
            ..first
        };
        assert_eq!(
            render_tween(&follow),
            "\ttl.to(data[\"Cube\"], 0.4167, { x: -1.5, ease: config.constantEase }, 0.4167);\n"
        );
    }
}
