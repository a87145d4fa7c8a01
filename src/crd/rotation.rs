//! # Rotation Configuration
//!
//! The self-signed certificate rotation settings embedded in a custom resource spec.

use chrono::TimeDelta;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    DEFAULT_CA_OVERLAP_INTERVAL_SECS, DEFAULT_CA_ROTATE_INTERVAL_SECS,
    DEFAULT_CERT_OVERLAP_INTERVAL_SECS, DEFAULT_CERT_ROTATE_INTERVAL_SECS,
};
use crate::validation::format_duration;

/// Certificate rotation configuration
///
/// All four intervals are Go-style duration strings (e.g. "168h", "1h30m").
/// The default value has every field empty, which means "not configured":
/// callers substitute [`default_rotation_config`] in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotationConfig {
    /// How long a CA certificate lives before it is rotated
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ca_rotate_interval: String,
    /// How long the old and new CA certificates are both trusted
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ca_overlap_interval: String,
    /// How long a leaf certificate lives before it is rotated
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cert_rotate_interval: String,
    /// How long the old and new leaf certificates are both trusted
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cert_overlap_interval: String,
}

impl RotationConfig {
    /// Configuration populated with the default intervals
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            ca_rotate_interval: render_secs(DEFAULT_CA_ROTATE_INTERVAL_SECS),
            ca_overlap_interval: render_secs(DEFAULT_CA_OVERLAP_INTERVAL_SECS),
            cert_rotate_interval: render_secs(DEFAULT_CERT_ROTATE_INTERVAL_SECS),
            cert_overlap_interval: render_secs(DEFAULT_CERT_OVERLAP_INTERVAL_SECS),
        }
    }

    /// True when no interval is set at all
    ///
    /// Checked field by field so that fields added later do not change what
    /// "not configured" means.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        RotationField::ALL
            .iter()
            .all(|&field| self.get(field).is_empty())
    }

    /// Raw value of a single field
    #[must_use]
    pub fn get(&self, field: RotationField) -> &str {
        match field {
            RotationField::CaRotateInterval => &self.ca_rotate_interval,
            RotationField::CaOverlapInterval => &self.ca_overlap_interval,
            RotationField::CertRotateInterval => &self.cert_rotate_interval,
            RotationField::CertOverlapInterval => &self.cert_overlap_interval,
        }
    }
}

/// Default rotation configuration: 168h / 24h / 24h / 8h
///
/// Returns a fresh value on every call.
#[must_use]
pub fn default_rotation_config() -> RotationConfig {
    RotationConfig::with_defaults()
}

fn render_secs(secs: i64) -> String {
    format_duration(TimeDelta::seconds(secs))
}

/// Identifies one of the four rotation intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationField {
    CaRotateInterval,
    CaOverlapInterval,
    CertRotateInterval,
    CertOverlapInterval,
}

impl RotationField {
    /// All fields, in the order they are validated and reported
    pub const ALL: [RotationField; 4] = [
        RotationField::CaRotateInterval,
        RotationField::CaOverlapInterval,
        RotationField::CertRotateInterval,
        RotationField::CertOverlapInterval,
    ];

    /// Field name as it appears in the resource (camelCase)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RotationField::CaRotateInterval => "caRotateInterval",
            RotationField::CaOverlapInterval => "caOverlapInterval",
            RotationField::CertRotateInterval => "certRotateInterval",
            RotationField::CertOverlapInterval => "certOverlapInterval",
        }
    }
}

impl fmt::Display for RotationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
