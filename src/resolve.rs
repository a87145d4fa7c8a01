//! # Configuration Resolution
//!
//! Turns the rotation configuration found on a resource into the one that is
//! actually used: defaults when nothing is configured, the validated
//! configuration otherwise.

use tracing::{debug, warn};

use crate::crd::{default_rotation_config, RotationConfig};
use crate::validation::{validate_rotation_config, ValidationErrors};

/// Resolve the effective rotation configuration
///
/// `None` and an all-empty configuration both resolve to the defaults. A
/// partially or fully set configuration is returned unchanged when valid.
///
/// # Errors
///
/// Returns every violation found when the configuration is set but invalid.
pub fn resolve_rotation_config(
    config: Option<&RotationConfig>,
) -> Result<RotationConfig, ValidationErrors> {
    let Some(config) = config.filter(|c| !c.is_empty()) else {
        let defaults = default_rotation_config();
        debug!(
            ca_rotate_interval = %defaults.ca_rotate_interval,
            ca_overlap_interval = %defaults.ca_overlap_interval,
            cert_rotate_interval = %defaults.cert_rotate_interval,
            cert_overlap_interval = %defaults.cert_overlap_interval,
            "No rotation configuration set, using defaults"
        );
        return Ok(defaults);
    };

    let errors = validate_rotation_config(config);
    if errors.is_empty() {
        Ok(config.clone())
    } else {
        warn!(
            error_count = errors.len(),
            "Rejecting invalid rotation configuration"
        );
        Err(ValidationErrors::from(errors))
    }
}
