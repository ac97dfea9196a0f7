use crate::{SuccessResponse, VersionData};

use serde_json::json;

#[test]
fn test_message_envelope_shape() {
    let value = serde_json::to_value(SuccessResponse::message("Hello World!")).unwrap();

    assert_eq!(
        value,
        json!({"response": {"success": true, "message": "Hello World!"}})
    );
}

#[test]
fn test_data_fields_are_flattened_next_to_success() {
    let value =
        serde_json::to_value(SuccessResponse::new(VersionData { version: "1.2.3" })).unwrap();

    assert_eq!(value["response"]["success"], true);
    assert_eq!(value["response"]["version"], "1.2.3");
    assert_eq!(value["response"].as_object().unwrap().len(), 2);
}
