use groups::builder::{error_response, to_response};
use groups::core::models::Group;
use groups::errors::{GroupError, MappingError, StorageError};
use serde_json::{Map, json};

/// Tests for the response builders.
/// These verify the API Gateway shaped payloads for both outcomes.

#[test]
fn test_default_group_maps_to_success() {
    let response = to_response(&Group::default());

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        response.body_json().unwrap(),
        json!({
            "group": {
                "groupId": null,
                "attributes": {},
                "items": [],
                "itemCount": 0
            }
        })
    );
}

#[test]
fn test_group_is_wrapped_unchanged() {
    let mut attributes = Map::new();
    attributes.insert("name".to_string(), json!("Climbers"));
    let mut item = Map::new();
    item.insert("groupId".to_string(), json!("g1"));
    item.insert("memberId".to_string(), json!("m1"));
    let group = Group {
        group_id: Some("g1".to_string()),
        attributes,
        items: vec![item],
        item_count: 1,
    };

    let response = to_response(&group);
    let body = response.body_json().unwrap();
    let round_tripped: Group = serde_json::from_value(body["group"].clone()).unwrap();
    assert_eq!(round_tripped, group);
}

#[test]
fn test_response_serializes_in_proxy_format() {
    let payload = serde_json::to_value(to_response(&Group::default())).unwrap();

    assert_eq!(payload["statusCode"], json!(200));
    assert!(payload["body"].is_string(), "body must be a JSON string");
    assert_eq!(payload["headers"]["Content-Type"], json!("application/json"));
}

#[test]
fn test_error_envelope_carries_reason_unmodified() {
    let error = GroupError::from(StorageError::query("table not found"));
    let response = error_response(&error);

    assert_eq!(response.status_code, 502);
    assert_eq!(
        response.body_json().unwrap(),
        json!({ "error": "Failed to query groups table: table not found" })
    );
}

#[test]
fn test_error_envelope_status_codes() {
    let cases = [
        (GroupError::from(StorageError::MissingGroupId), 400),
        (
            GroupError::from(StorageError::TableNotFound("groups".into())),
            404,
        ),
        (GroupError::from(StorageError::Decode("bad".into())), 502),
        (
            GroupError::from(MappingError::MissingField {
                index: 0,
                field: "groupId".into(),
            }),
            500,
        ),
    ];

    for (error, status) in cases {
        assert_eq!(error_response(&error).status_code, status, "{error}");
    }
}
