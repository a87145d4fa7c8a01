//! # Rotation Configuration Validation
//!
//! Checks run in stages: presence, parsing, positivity, ordering.
//! Every check within a stage is reported, but a failing stage stops the
//! later ones so that an unparsed value does not produce follow-up noise.

use chrono::TimeDelta;

use super::duration::{format_duration, parse_duration};
use super::errors::ValidationError;
use crate::crd::{RotationConfig, RotationField};

/// Validate a rotation configuration
///
/// An entirely empty configuration is valid (defaults are applied by the
/// caller). Returns every violation found in the first failing stage, or an
/// empty list when the configuration is valid.
#[must_use]
pub fn validate_rotation_config(config: &RotationConfig) -> Vec<ValidationError> {
    if config.is_empty() {
        return Vec::new();
    }

    let mut errors: Vec<ValidationError> = RotationField::ALL
        .into_iter()
        .filter_map(|field| check_present(field, config.get(field)))
        .collect();
    if !errors.is_empty() {
        return errors;
    }

    let parsed = RotationField::ALL.map(|field| match parse_interval(field, config.get(field)) {
        Ok(duration) => Some(duration),
        Err(e) => {
            errors.push(e);
            None
        }
    });
    let [Some(ca_rotate), Some(ca_overlap), Some(cert_rotate), Some(cert_overlap)] = parsed else {
        return errors;
    };

    let intervals = [
        (RotationField::CaRotateInterval, ca_rotate),
        (RotationField::CaOverlapInterval, ca_overlap),
        (RotationField::CertRotateInterval, cert_rotate),
        (RotationField::CertOverlapInterval, cert_overlap),
    ];
    errors.extend(
        intervals
            .into_iter()
            .filter_map(|(field, duration)| check_positive(field, config.get(field), duration)),
    );
    if !errors.is_empty() {
        return errors;
    }

    let bounds = [
        (
            RotationField::CaOverlapInterval,
            ca_overlap,
            RotationField::CaRotateInterval,
            ca_rotate,
        ),
        (
            RotationField::CertRotateInterval,
            cert_rotate,
            RotationField::CaRotateInterval,
            ca_rotate,
        ),
        (
            RotationField::CertOverlapInterval,
            cert_overlap,
            RotationField::CertRotateInterval,
            cert_rotate,
        ),
    ];
    errors.extend(
        bounds
            .into_iter()
            .filter_map(|(field, value, limit_field, limit)| {
                check_not_longer(field, value, limit_field, limit)
            }),
    );

    errors
}

fn check_present(field: RotationField, value: &str) -> Option<ValidationError> {
    value
        .is_empty()
        .then_some(ValidationError::MissingField { field })
}

fn parse_interval(field: RotationField, value: &str) -> Result<TimeDelta, ValidationError> {
    parse_duration(value).map_err(|source| ValidationError::UnparseableDuration {
        field,
        value: value.to_string(),
        source,
    })
}

fn check_positive(
    field: RotationField,
    raw: &str,
    duration: TimeDelta,
) -> Option<ValidationError> {
    (duration <= TimeDelta::zero()).then(|| ValidationError::NonPositiveDuration {
        field,
        value: raw.to_string(),
    })
}

fn check_not_longer(
    field: RotationField,
    value: TimeDelta,
    limit_field: RotationField,
    limit: TimeDelta,
) -> Option<ValidationError> {
    (value > limit).then(|| ValidationError::OrderingViolation {
        field,
        value: format_duration(value),
        limit_field,
        limit_value: format_duration(limit),
    })
}
