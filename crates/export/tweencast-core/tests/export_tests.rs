use tweencast_core::{
    export_scene, parse_scene_json, ActionData, Channel, Config, Dynamics, Easing, ExportError,
    FrameRate, Interpolation, Keyframe, ObjectRecord, SceneDocument, SceneHost, Transform, Vec2,
};
use tweencast_test_fixtures as fixtures;

fn load(name: &str) -> SceneDocument {
    let json = fixtures::scenes::json(name).expect("fixture should load");
    parse_scene_json(&json).expect("fixture should parse")
}

/// it should render the full document for the bouncing-cube fixture
#[test]
fn bouncing_cube_full_pass() {
    let mut doc = load("bouncing-cube");
    let out = export_scene(&mut doc, &Config::default()).unwrap();

    // Structure: data table, construction routine, trailing export.
    assert!(out.starts_with("const data = {"));
    assert!(out.contains("\nfunction create(tl, config) {\n"));
    assert!(out.ends_with("export default {\n\tdata, create\n};\n"));

    // Snapshot table: animated objects only, enumeration order.
    assert!(out.contains("\"Cube\""));
    assert!(out.contains("\"Empty\""));
    assert!(!out.contains("Lamp"));
    assert!(out.find("\"Cube\"").unwrap() < out.find("\"Empty\"").unwrap());
    assert!(out.contains("\"y\": 1.0"));

    // First segment of x: from-to with the governing sine ease.
    assert!(out.contains(
        "\ttl.fromTo(data[\"Cube\"], 0.4167, { x: 0 }, { x: 2, ease: \"sine.in\" }, 0);\n"
    ));
    // Second segment of x: to, continuing from the live value.
    assert!(out.contains("\ttl.to(data[\"Cube\"], 0.4167, { x: 0, ease: \"linear\" }, 0.4167);\n"));
    // Back keeps its overshoot parameter.
    assert!(out.contains(
        "\ttl.fromTo(data[\"Cube\"], 0.5, { z: 0 }, { z: 1, ease: \"back.out(1.7016)\" }, 0);\n"
    ));
    // Elastic is normalized (2 / |PI/2| amplitude, 0.3 / 24 period) and the
    // rotation channel is emitted in degrees.
    assert!(out.contains(
        "\ttl.fromTo(data[\"Cube\"], 1, { rotationY: 0 }, { rotationY: 90, ease: \"elastic.out(1.2732, 0.0125)\" }, 0);\n"
    ));
    // The unsupported channel contributed nothing.
    assert!(!out.contains("hide_viewport"));
}

/// it should pass inline bezier control-point ratios through to the ease
#[test]
fn bezier_slide_inline_curve() {
    let mut doc = load("bezier-slide");
    let out = export_scene(&mut doc, &Config::default()).unwrap();
    assert!(out.contains(
        "\ttl.fromTo(data[\"Slider\"], 0.4167, { x: 0 }, { x: 10, ease: config.bezierEase(0.2,0.1,0.2,0.1) }, 0);\n"
    ));
}

/// it should produce byte-identical output across repeated passes
#[test]
fn export_is_idempotent() {
    let mut first_doc = load("bouncing-cube");
    let first = export_scene(&mut first_doc, &Config::default()).unwrap();
    let second = export_scene(&mut first_doc, &Config::default()).unwrap();
    assert_eq!(first, second);

    let mut fresh = load("bouncing-cube");
    let third = export_scene(&mut fresh, &Config::default()).unwrap();
    assert_eq!(first, third);
}

/// it should restore the playhead cursor after a successful pass
#[test]
fn playhead_restored_after_pass() {
    let mut doc = load("bouncing-cube");
    assert_eq!(doc.current_frame(), 42.0);
    let _ = export_scene(&mut doc, &Config::default()).unwrap();
    assert_eq!(doc.current_frame(), 42.0);
}

/// it should restore the playhead cursor on failure paths too
#[test]
fn playhead_restored_on_failure() {
    let broken = Keyframe {
        frame: 5.0,
        value: 0.0,
        interpolation: Interpolation::Linear,
        easing: Easing::Auto,
        handle_left: Vec2 { x: 3.0, y: 0.0 },
        handle_right: Vec2 { x: 7.0, y: 0.0 },
        dynamics: Dynamics::default(),
    };
    let mut doc = SceneDocument {
        frame_rate: FrameRate {
            fps: 24.0,
            base: 1.0,
        },
        current_frame: 7.0,
        objects: vec![ObjectRecord {
            name: "Broken".to_string(),
            rest: Transform::default(),
            action: Some(ActionData {
                name: "BrokenAction".to_string(),
                channels: vec![Channel {
                    data_path: "location".to_string(),
                    array_index: 0,
                    keyframes: vec![broken, broken],
                }],
            }),
        }],
    };

    let err = export_scene(&mut doc, &Config::default()).unwrap_err();
    assert!(matches!(err, ExportError::NonMonotonicKeyframes { .. }));
    assert_eq!(doc.current_frame(), 7.0);
}

/// it should abort on a zero or non-finite effective frame rate
#[test]
fn zero_frame_rate_is_fatal() {
    let mut doc = load("bouncing-cube");
    doc.frame_rate = FrameRate {
        fps: 0.0,
        base: 1.0,
    };
    assert!(matches!(
        export_scene(&mut doc, &Config::default()),
        Err(ExportError::InvalidFrameRate { .. })
    ));

    doc.frame_rate = FrameRate {
        fps: 24.0,
        base: 0.0,
    };
    assert!(matches!(
        export_scene(&mut doc, &Config::default()),
        Err(ExportError::InvalidFrameRate { .. })
    ));
}

/// it should round-trip scene documents through serde
#[test]
fn scene_document_roundtrip() {
    let doc = load("bouncing-cube");
    let json = serde_json::to_string(&doc).unwrap();
    let reparsed = parse_scene_json(&json).unwrap();
    assert_eq!(doc, reparsed);
}

/// it should reject documents with out-of-order keyframes at parse time
#[test]
fn parse_rejects_non_monotonic_documents() {
    let json = r#"{
        "frameRate": { "fps": 24 },
        "objects": [{
            "name": "Bad",
            "action": {
                "channels": [{
                    "dataPath": "location",
                    "arrayIndex": 0,
                    "keyframes": [
                        { "frame": 10, "value": 0, "interpolation": "LINEAR" },
                        { "frame": 10, "value": 1, "interpolation": "LINEAR" }
                    ]
                }]
            }
        }]
    }"#;
    assert!(matches!(
        parse_scene_json(json),
        Err(ExportError::NonMonotonicKeyframes { .. })
    ));

    assert!(matches!(
        parse_scene_json("not json"),
        Err(ExportError::Document { .. })
    ));
}

/// it should expose every fixture listed in the manifest
#[test]
fn manifest_fixtures_all_parse() {
    for name in fixtures::scenes::keys() {
        let json = fixtures::scenes::json(&name).unwrap();
        parse_scene_json(&json).unwrap();
    }
}
