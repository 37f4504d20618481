//! Identification response handling tests.

use herbal_memory::core::IdentifyError;
use herbal_memory::identify::{check_upload, parse_response, CAPTURE_FILE_NAME, NO_INFORMATION};

/// A full success body from the upload endpoint.
#[test]
fn test_parse_success() {
    let body = r#"{
        "success": true,
        "plant_name": "Tulsi",
        "scientific_name": "Ocimum tenuiflorum",
        "common_names": ["Holy basil", "Tulsi"],
        "medicinal_properties": "Adaptogen used in teas.",
        "growing_conditions": "Warm, sunny, well-drained soil.",
        "harvesting_guidelines": "Pick leaves before flowering.",
        "precautions": "Avoid large doses during pregnancy.",
        "image_url": "/static/uploads/capture.jpg"
    }"#;

    let result = parse_response(true, body).unwrap();
    assert_eq!(result.plant_name, "Tulsi");
    assert_eq!(result.scientific_name, "Ocimum tenuiflorum");
    assert_eq!(result.common_names, vec!["Holy basil".to_string(), "Tulsi".to_string()]);
    assert_eq!(result.precautions_text(), "Avoid large doses during pregnancy.");
    assert_eq!(result.medicinal_properties_text(), "Adaptogen used in teas.");
    assert_eq!(result.image_url, "/static/uploads/capture.jpg");
}

/// Missing or null descriptive fields fall back to the placeholder.
#[test]
fn test_parse_success_with_gaps() {
    let body = r#"{
        "plant_name": "Neem",
        "scientific_name": "Azadirachta indica",
        "image_url": "/static/uploads/neem.png",
        "medicinal_properties": null
    }"#;

    let result = parse_response(true, body).unwrap();
    assert_eq!(result.medicinal_properties_text(), NO_INFORMATION);
    assert_eq!(result.growing_conditions_text(), NO_INFORMATION);
    assert_eq!(result.precautions, None);
    assert!(result.common_names.is_empty());
}

/// The endpoint sends an empty list when a plant has no other names.
#[test]
fn test_parse_success_with_empty_common_names() {
    let body = r#"{
        "success": true,
        "plant_name": "Neem",
        "scientific_name": "Azadirachta indica",
        "common_names": [],
        "medicinal_properties": "No information available",
        "growing_conditions": "Hot, dry climates.",
        "harvesting_guidelines": "No information available",
        "precautions": "No information available",
        "image_url": "/static/uploads/neem.png"
    }"#;

    let result = parse_response(true, body).unwrap();
    assert!(result.common_names.is_empty());
    assert_eq!(result.growing_conditions_text(), "Hot, dry climates.");
    assert_eq!(result.harvesting_guidelines_text(), NO_INFORMATION);
}

#[test]
fn test_parse_rejection_carries_endpoint_message() {
    let err = parse_response(false, r#"{"error": "No matching plant found"}"#).unwrap_err();
    assert!(matches!(&err, IdentifyError::Rejected(m) if m == "No matching plant found"));
    assert_eq!(err.to_string(), "No matching plant found");
}

#[test]
fn test_parse_rejection_without_message() {
    let err = parse_response(false, "{}").unwrap_err();
    assert_eq!(err.to_string(), "Failed to identify plant");
}

#[test]
fn test_camera_capture_passes_upload_check() {
    assert!(check_upload(CAPTURE_FILE_NAME, 512 * 1024).is_ok());
}
