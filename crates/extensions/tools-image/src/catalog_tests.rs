use super::*;

#[test]
fn test_threshold_out_of_range_resets_to_default() {
    for raw in [-0.1, 1.1, 5.0, -100.0, f64::MAX] {
        assert_eq!(THRESHOLD.normalize(Some(raw)), Some(0.5), "raw = {raw}");
    }
}

#[test]
fn test_threshold_in_range_passes_through() {
    assert_eq!(THRESHOLD.normalize(Some(0.0)), Some(0.0));
    assert_eq!(THRESHOLD.normalize(Some(1.0)), Some(1.0));
    assert_eq!(THRESHOLD.normalize(Some(0.25)), Some(0.25));
}

#[test]
fn test_threshold_missing_uses_default() {
    assert_eq!(THRESHOLD.normalize(None), Some(0.5));
}

#[test]
fn test_hue_wrap_terminates_in_range() {
    for raw in [-3000.0, -721.0, -361.0, 0.0, 360.0, 361.0, 800.0, 4321.5] {
        let wrapped = HUE_SHIFT.normalize(Some(raw)).unwrap();
        assert!(
            (-360.0..=360.0).contains(&wrapped),
            "raw {raw} wrapped to {wrapped}"
        );
    }
}

#[test]
fn test_hue_wrap_preserves_value_mod_range_width() {
    // Adjustment always steps by the range width, so the residue mod 720 is
    // an invariant of wrapping.
    for raw in [800.0, -800.0, 1530.0, -1530.0, 3610.0] {
        let wrapped = HUE_SHIFT.normalize(Some(raw)).unwrap();
        let diff = (raw - wrapped).rem_euclid(720.0);
        assert!(
            diff.abs() < 1e-9 || (diff - 720.0).abs() < 1e-9,
            "raw {raw} wrapped to {wrapped}"
        );
    }
}

#[test]
fn test_hue_wrap_examples() {
    assert_eq!(HUE_SHIFT.normalize(Some(800.0)), Some(80.0));
    assert_eq!(HUE_SHIFT.normalize(Some(-800.0)), Some(-80.0));
    assert_eq!(HUE_SHIFT.normalize(Some(360.0)), Some(360.0));
    assert_eq!(HUE_SHIFT.normalize(None), Some(0.0));
}

#[test]
fn test_brightness_clamps_to_nearest_bound_not_default() {
    assert_eq!(BRIGHTNESS.normalize(Some(-50.0)), Some(0.0));
    assert_eq!(BRIGHTNESS.normalize(Some(250.0)), Some(200.0));
    assert_eq!(SATURATION.normalize(Some(-1.0)), Some(0.0));
    assert_eq!(SATURATION.normalize(Some(1e9)), Some(200.0));
}

#[test]
fn test_brightness_missing_uses_default() {
    assert_eq!(BRIGHTNESS.normalize(None), Some(100.0));
    assert_eq!(SATURATION.normalize(None), Some(100.0));
}

#[test]
fn test_quality_clamps_and_defaults() {
    assert_eq!(QUALITY.normalize(Some(0.0)), Some(1.0));
    assert_eq!(QUALITY.normalize(Some(150.0)), Some(100.0));
    assert_eq!(QUALITY.normalize(None), Some(85.0));
}

#[test]
fn test_radius_clamps_negative_to_zero() {
    assert_eq!(RADIUS.normalize(Some(-5.0)), Some(0.0));
    assert_eq!(RADIUS.normalize(Some(2.5)), Some(2.5));
    assert_eq!(RADIUS.normalize(None), Some(0.0));
}

#[test]
fn test_sigma_resets_negative_to_default() {
    // Deliberately diverges from radius: negative sigma falls back to the
    // declared default, not to zero.
    assert_eq!(SIGMA.normalize(Some(-1.0)), Some(3.0));
    assert_eq!(SIGMA.normalize(Some(0.0)), Some(0.0));
    assert_eq!(SIGMA.normalize(Some(7.0)), Some(7.0));
    assert_eq!(SIGMA.normalize(None), Some(3.0));
}

#[test]
fn test_width_height_discard_non_positive() {
    assert_eq!(WIDTH.normalize(Some(0.0)), None);
    assert_eq!(WIDTH.normalize(Some(-10.0)), None);
    assert_eq!(WIDTH.normalize(Some(640.0)), Some(640.0));
    assert_eq!(HEIGHT.normalize(None), None);
}

#[test]
fn test_scale_unit_reset() {
    assert_eq!(SCALE.normalize(Some(-2.0)), Some(1.0));
    assert_eq!(SCALE.normalize(Some(0.0)), Some(1.0));
    assert_eq!(SCALE.normalize(Some(0.5)), Some(0.5));
    assert_eq!(SCALE.normalize(None), None);
}

#[test]
fn test_operations_table_names() {
    let names: Vec<_> = OPERATIONS.iter().map(|op| op.name).collect();
    assert_eq!(
        names,
        vec![
            "binarize_image",
            "blur_image",
            "convert_image_format",
            "grayscale_image",
            "get_image_info",
            "modify_colors",
            "resize_image",
        ]
    );
}

#[test]
fn test_every_operation_requires_image_path() {
    for op in OPERATIONS {
        assert!(
            op.required.iter().any(|f| f.name == "image_path"),
            "{} missing image_path",
            op.name
        );
    }
}

#[test]
fn test_convert_requires_output_format() {
    assert!(CONVERT_IMAGE_FORMAT
        .required
        .iter()
        .any(|f| f.name == "output_format"));
}

#[test]
fn test_schema_defaults_match_specs() {
    // The advertised catalog is generated from the same table dispatch
    // normalization reads, so defaults must agree field by field.
    for op in OPERATIONS {
        let schema = op.input_schema();
        let properties = schema["properties"].as_object().unwrap();
        for param in op.params {
            let prop = &properties[param.name];
            match param.default {
                Some(default) => {
                    let advertised = prop["default"].as_f64().unwrap();
                    assert_eq!(advertised, default, "{}.{}", op.name, param.name);
                }
                None => assert!(prop.get("default").is_none(), "{}.{}", op.name, param.name),
            }
        }
        let required: Vec<_> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        for field in op.required {
            assert!(required.contains(&field.name.to_string()));
        }
    }
}

#[test]
fn test_schema_types() {
    let schema = CONVERT_IMAGE_FORMAT.input_schema();
    assert_eq!(schema["properties"]["quality"]["type"], "integer");
    assert_eq!(schema["properties"]["quality"]["minimum"], 1);
    assert_eq!(schema["properties"]["quality"]["maximum"], 100);
    assert_eq!(schema["properties"]["output_format"]["type"], "string");

    let schema = BINARIZE_IMAGE.input_schema();
    assert_eq!(schema["properties"]["threshold"]["type"], "number");
}
