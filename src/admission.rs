//! # Admission Check
//!
//! Validating admission for resources that embed a rotation configuration at
//! `spec.selfSignConfiguration`.
//!
//! Works on [`DynamicObject`] so the same check can be wired to any resource
//! kind that carries the field. Serving the webhook is left to the caller;
//! this module only maps a review to its answer.

use anyhow::{Context, Result};
use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview};
use kube::core::DynamicObject;
use tracing::{debug, info, warn};

use crate::constants::SELF_SIGN_CONFIGURATION_POINTER;
use crate::crd::RotationConfig;
use crate::validation::{format_errors, validate_rotation_config};

/// Answer an admission review for an object carrying a rotation configuration
///
/// The object is denied when its rotation configuration cannot be decoded or
/// fails validation; the denial message lists every violation, one per line.
/// Objects without the field, and requests without an object (DELETE), are
/// allowed.
#[must_use]
pub fn review_rotation_config(
    review: AdmissionReview<DynamicObject>,
) -> AdmissionReview<DynamicObject> {
    let request: AdmissionRequest<DynamicObject> = match review.try_into() {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Received malformed admission review");
            return AdmissionResponse::invalid(e.to_string()).into_review();
        }
    };

    let response = AdmissionResponse::from(&request);
    let Some(object) = request.object.as_ref() else {
        debug!(uid = %request.uid, operation = ?request.operation, "No object in request, allowing");
        return response.into_review();
    };
    let object_name = object.metadata.name.as_deref().unwrap_or(&request.name);

    let config = match rotation_config_from_object(object) {
        Ok(Some(config)) => config,
        Ok(None) => {
            debug!(uid = %request.uid, object = object_name, "No rotation configuration set, allowing");
            return response.into_review();
        }
        Err(e) => {
            warn!(uid = %request.uid, object = object_name, error = %e, "Denying undecodable rotation configuration");
            return response.deny(format!("{e:#}")).into_review();
        }
    };

    let errors = validate_rotation_config(&config);
    if errors.is_empty() {
        info!(uid = %request.uid, object = object_name, "Rotation configuration accepted");
        response.into_review()
    } else {
        warn!(
            uid = %request.uid,
            object = object_name,
            error_count = errors.len(),
            "Denying invalid rotation configuration"
        );
        response.deny(format_errors(&errors)).into_review()
    }
}

/// Extract the rotation configuration from an object's spec
///
/// Returns `Ok(None)` when the field is absent or null.
///
/// # Errors
///
/// Fails when the field is present but is not a rotation configuration
/// (e.g. an interval given as a number).
pub fn rotation_config_from_object(object: &DynamicObject) -> Result<Option<RotationConfig>> {
    match object.data.pointer(SELF_SIGN_CONFIGURATION_POINTER) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => {
            let config: RotationConfig = serde_json::from_value(value.clone())
                .context("Failed to decode spec.selfSignConfiguration")?;
            Ok(Some(config))
        }
    }
}
