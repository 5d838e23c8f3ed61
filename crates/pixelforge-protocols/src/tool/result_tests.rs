use super::*;

#[test]
fn test_text_result() {
    let result = ToolResult::text("Image blurred successfully. Output saved to: /tmp/a_blurred.png");
    assert!(result.success);
    assert_eq!(result.content.len(), 1);
    assert!(result.error.is_none());
}

#[test]
fn test_error_result() {
    let result = ToolResult::error("No image path provided");
    assert!(!result.success);
    assert!(result.content.is_empty());
    assert_eq!(result.error.as_deref(), Some("No image path provided"));
}

#[test]
fn test_with_block_appends_in_order() {
    let result = ToolResult::text("saved")
        .with_block(ContentBlock::image("image/png", "aGVsbG8="));
    assert_eq!(result.content.len(), 2);
    assert_eq!(result.content[0].as_text(), "saved");
    assert!(matches!(result.content[1], ContentBlock::Image { .. }));
}

#[test]
fn test_with_metadata() {
    let result = ToolResult::text("ok").with_metadata("output_path", serde_json::json!("/tmp/x"));
    assert_eq!(result.metadata["output_path"], "/tmp/x");
}

#[test]
fn test_result_serialization_skips_error_on_success() {
    let result = ToolResult::text("ok");
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("error").is_none());
    assert_eq!(json["success"], true);
}
