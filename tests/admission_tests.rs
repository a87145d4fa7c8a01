//! # Admission Tests
//!
//! Drives `review_rotation_config` with admission reviews as the API server
//! would send them.

use cert_rotation_config::admission::{review_rotation_config, rotation_config_from_object};
use kube::core::admission::AdmissionReview;
use kube::core::DynamicObject;
use serde_json::{json, Value};

const UID: &str = "705ab4f5-6393-11e8-b7cc-42010a800002";

fn review(operation: &str, object: Value) -> AdmissionReview<DynamicObject> {
    let review = json!({
        "apiVersion": "admission.k8s.io/v1",
        "kind": "AdmissionReview",
        "request": {
            "uid": UID,
            "kind": { "group": "nmstate.io", "version": "v1", "kind": "NMState" },
            "resource": { "group": "nmstate.io", "version": "v1", "resource": "nmstates" },
            "requestKind": { "group": "nmstate.io", "version": "v1", "kind": "NMState" },
            "requestResource": { "group": "nmstate.io", "version": "v1", "resource": "nmstates" },
            "name": "nmstate",
            "operation": operation,
            "userInfo": { "username": "admin", "groups": ["system:authenticated"] },
            "object": object,
            "oldObject": null,
            "dryRun": false
        }
    });
    serde_json::from_value(review).expect("Should deserialize admission review")
}

fn nmstate(spec: Value) -> Value {
    json!({
        "apiVersion": "nmstate.io/v1",
        "kind": "NMState",
        "metadata": { "name": "nmstate" },
        "spec": spec
    })
}

fn allowed(review: &AdmissionReview<DynamicObject>) -> bool {
    review
        .response
        .as_ref()
        .expect("Review should carry a response")
        .allowed
}

fn response_json(review: &AdmissionReview<DynamicObject>) -> Value {
    serde_json::to_value(review).expect("Should serialize admission review")
}

#[test]
fn test_valid_configuration_is_allowed() {
    let object = nmstate(json!({
        "selfSignConfiguration": {
            "caRotateInterval": "168h",
            "caOverlapInterval": "24h",
            "certRotateInterval": "24h",
            "certOverlapInterval": "8h"
        }
    }));

    let result = review_rotation_config(review("CREATE", object));
    assert!(allowed(&result));
    assert_eq!(response_json(&result)["response"]["uid"], UID);
}

#[test]
fn test_missing_configuration_is_allowed() {
    let result = review_rotation_config(review("CREATE", nmstate(json!({}))));
    assert!(allowed(&result));
}

#[test]
fn test_empty_configuration_is_allowed() {
    let object = nmstate(json!({ "selfSignConfiguration": {} }));
    let result = review_rotation_config(review("UPDATE", object));
    assert!(allowed(&result));
}

#[test]
fn test_delete_without_object_is_allowed() {
    let result = review_rotation_config(review("DELETE", Value::Null));
    assert!(allowed(&result));
}

#[test]
fn test_invalid_configuration_is_denied_with_all_errors() {
    let object = nmstate(json!({
        "selfSignConfiguration": {
            "caRotateInterval": "1h",
            "caOverlapInterval": "2h",
            "certRotateInterval": "3h",
            "certOverlapInterval": "1h"
        }
    }));

    let result = review_rotation_config(review("CREATE", object));
    assert!(!allowed(&result));

    let message = response_json(&result)["response"]["status"]["message"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    assert_eq!(
        message,
        "caOverlapInterval(2h0m0s) has to be <= caRotateInterval(1h0m0s)\n\
         certRotateInterval(3h0m0s) has to be <= caRotateInterval(1h0m0s)"
    );
}

#[test]
fn test_undecodable_configuration_is_denied() {
    let object = nmstate(json!({
        "selfSignConfiguration": { "caRotateInterval": 3600 }
    }));

    let result = review_rotation_config(review("CREATE", object));
    assert!(!allowed(&result));
}

#[test]
fn test_rotation_config_from_object() {
    let object: DynamicObject = serde_json::from_value(nmstate(json!({
        "selfSignConfiguration": { "certRotateInterval": "12h" }
    })))
    .expect("Should deserialize object");

    let config = rotation_config_from_object(&object)
        .expect("Should decode rotation config")
        .expect("Rotation config should be present");
    assert_eq!(config.cert_rotate_interval, "12h");
    assert!(config.ca_rotate_interval.is_empty());

    let bare: DynamicObject =
        serde_json::from_value(nmstate(json!({ "selfSignConfiguration": null })))
            .expect("Should deserialize object");
    assert!(rotation_config_from_object(&bare)
        .expect("Null config should decode")
        .is_none());
}
