//! Certificate Rotation Configuration Library
//!
//! Validation and defaults for the self-signed certificate rotation intervals
//! carried by a custom resource (`spec.selfSignConfiguration`).
//!
//! ## Overview
//!
//! 1. **Types** - [`crd::RotationConfig`] with its four duration fields
//! 2. **Validation** - staged checks (presence, parsing, positivity, ordering)
//!    that collect every violation of a stage
//! 3. **Defaults** - 168h / 24h / 24h / 8h, applied when nothing is configured
//! 4. **Admission** - maps an admission review to allow/deny
//!
//! ```
//! use cert_rotation_config::crd::RotationConfig;
//! use cert_rotation_config::validation::{format_errors, validate_rotation_config};
//!
//! let config = RotationConfig {
//!     ca_rotate_interval: "24h".to_string(),
//!     ca_overlap_interval: "48h".to_string(),
//!     cert_rotate_interval: "24h".to_string(),
//!     cert_overlap_interval: "8h".to_string(),
//! };
//! let errors = validate_rotation_config(&config);
//! assert_eq!(
//!     format_errors(&errors),
//!     "caOverlapInterval(48h0m0s) has to be <= caRotateInterval(24h0m0s)"
//! );
//! ```

pub mod admission;
pub mod constants;
pub mod crd;
pub mod resolve;
pub mod validation;

pub use crd::{default_rotation_config, RotationConfig, RotationField};
pub use resolve::resolve_rotation_config;
pub use validation::{format_errors, validate_rotation_config, ValidationError, ValidationErrors};
