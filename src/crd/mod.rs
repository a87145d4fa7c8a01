//! # Custom Resource Types
//!
//! Types embedded in custom resource specs.
//!
//! ## Module Structure
//!
//! - `rotation.rs` - Self-signed certificate rotation intervals and their defaults

mod rotation;

pub use rotation::{default_rotation_config, RotationConfig, RotationField};
