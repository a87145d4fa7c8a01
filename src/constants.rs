//! # Constants
//!
//! Default certificate rotation intervals.
//!
//! These are applied when a resource carries no rotation configuration at all.
//! A partially filled configuration is never completed from these values; it is
//! rejected by validation instead.

/// Default CA rotate interval (seconds): 7 days
pub const DEFAULT_CA_ROTATE_INTERVAL_SECS: i64 = 168 * 3600;

/// Default CA overlap interval (seconds): 1 day
pub const DEFAULT_CA_OVERLAP_INTERVAL_SECS: i64 = 24 * 3600;

/// Default certificate rotate interval (seconds): 1 day
pub const DEFAULT_CERT_ROTATE_INTERVAL_SECS: i64 = 24 * 3600;

/// Default certificate overlap interval (seconds): 8 hours
pub const DEFAULT_CERT_OVERLAP_INTERVAL_SECS: i64 = 8 * 3600;

/// JSON pointer to the rotation configuration inside an admitted object
pub const SELF_SIGN_CONFIGURATION_POINTER: &str = "/spec/selfSignConfiguration";
