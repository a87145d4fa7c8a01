//! # Validation
//!
//! Validates rotation configurations and the duration strings they carry.

mod duration;
mod errors;
mod rotation;

pub use duration::{format_duration, parse_duration, DurationParseError};
pub use errors::{format_errors, ValidationError, ValidationErrors};
pub use rotation::validate_rotation_config;
