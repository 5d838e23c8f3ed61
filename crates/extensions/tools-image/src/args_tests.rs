use super::*;

use crate::catalog;
use serde_json::json;

#[test]
fn test_direct_lookup() {
    let args = RawArgs::new(json!({"threshold": 0.7}));
    assert_eq!(args.number(&catalog::THRESHOLD), 0.7);
}

#[test]
fn test_missing_uses_default() {
    let args = RawArgs::new(json!({}));
    assert_eq!(args.number(&catalog::THRESHOLD), 0.5);
    assert_eq!(args.number(&catalog::QUALITY), 85.0);
}

#[test]
fn test_non_numeric_falls_back_to_default() {
    let args = RawArgs::new(json!({"quality": "not a number"}));
    assert_eq!(args.number(&catalog::QUALITY), 85.0);

    let args = RawArgs::new(json!({"quality": {"value": 10}}));
    assert_eq!(args.number(&catalog::QUALITY), 85.0);
}

#[test]
fn test_numeric_string_coerces() {
    let args = RawArgs::new(json!({"threshold": " 0.25 "}));
    assert_eq!(args.number(&catalog::THRESHOLD), 0.25);
}

#[test]
fn test_nested_bag_wins_over_direct() {
    let args = RawArgs::new(json!({
        "threshold": 0.9,
        "kwargs": {"threshold": 0.1}
    }));
    assert_eq!(args.number(&catalog::THRESHOLD), 0.1);
}

#[test]
fn test_json_embedded_in_path_field() {
    let embedded = r#"{"image_path": "/tmp/in.png", "threshold": 0.2}"#;
    let args = RawArgs::new(json!({"image_path": embedded}));
    assert_eq!(args.number(&catalog::THRESHOLD), 0.2);
    // The real path is recovered from inside the serialized bag; existence
    // is checked separately.
    assert_eq!(
        args.get("image_path").and_then(serde_json::Value::as_str),
        Some("/tmp/in.png")
    );
}

#[test]
fn test_nested_bag_wins_over_embedded_json() {
    let embedded = r#"{"threshold": 0.2}"#;
    let args = RawArgs::new(json!({
        "image_path": embedded,
        "kwargs": {"threshold": 0.3}
    }));
    assert_eq!(args.number(&catalog::THRESHOLD), 0.3);
}

#[test]
fn test_malformed_embedded_json_is_ignored() {
    let args = RawArgs::new(json!({
        "image_path": "{not json",
        "threshold": 0.4
    }));
    assert_eq!(args.number(&catalog::THRESHOLD), 0.4);
}

#[test]
fn test_missing_image_path_message() {
    let args = RawArgs::new(json!({}));
    let err = args.image_path().unwrap_err();
    assert_eq!(err.to_string(), "No image path provided");
}

#[test]
fn test_empty_image_path_message() {
    let args = RawArgs::new(json!({"image_path": "   "}));
    let err = args.image_path().unwrap_err();
    assert_eq!(err.to_string(), "No image path provided");
}

#[test]
fn test_nonexistent_image_path_message() {
    let args = RawArgs::new(json!({"image_path": "/definitely/not/here.png"}));
    let err = args.image_path().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Image file not found at /definitely/not/here.png"
    );
}

#[test]
fn test_null_arguments_behave_as_empty_bag() {
    let args = RawArgs::new(serde_json::Value::Null);
    assert!(args.image_path().is_err());
    assert_eq!(args.number(&catalog::SIGMA), 3.0);
}

#[test]
fn test_maybe_number_unset() {
    let args = RawArgs::new(json!({}));
    assert_eq!(args.maybe_number(&catalog::WIDTH), None);
    assert_eq!(args.maybe_number(&catalog::SCALE), None);
}

#[test]
fn test_maybe_number_discards_non_positive_dimension() {
    let args = RawArgs::new(json!({"width": -100}));
    assert_eq!(args.maybe_number(&catalog::WIDTH), None);
}

#[test]
fn test_scale_reset_to_identity() {
    let args = RawArgs::new(json!({"scale": -0.5}));
    assert_eq!(args.maybe_number(&catalog::SCALE), Some(1.0));
}

#[test]
fn test_string_lookup_trims_and_rejects_empty() {
    let args = RawArgs::new(json!({"output_format": "  png  "}));
    assert_eq!(args.string("output_format"), Some("png".to_string()));

    let args = RawArgs::new(json!({"output_format": ""}));
    assert_eq!(args.string("output_format"), None);
}

#[test]
fn test_out_of_range_values_repaired_not_rejected() {
    let args = RawArgs::new(json!({
        "threshold": 3.0,
        "brightness": 900,
        "saturation": -40,
        "quality": 0,
        "radius": -2,
        "sigma": -9,
        "hue_shift": 800
    }));
    assert_eq!(args.number(&catalog::THRESHOLD), 0.5);
    assert_eq!(args.number(&catalog::BRIGHTNESS), 200.0);
    assert_eq!(args.number(&catalog::SATURATION), 0.0);
    assert_eq!(args.number(&catalog::QUALITY), 1.0);
    assert_eq!(args.number(&catalog::RADIUS), 0.0);
    assert_eq!(args.number(&catalog::SIGMA), 3.0);
    assert_eq!(args.number(&catalog::HUE_SHIFT), 80.0);
}
