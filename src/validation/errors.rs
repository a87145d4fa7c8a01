//! # Validation Errors
//!
//! Error types produced by rotation configuration validation, and the
//! multi-line rendering used when reporting them.

use std::fmt;
use thiserror::Error;

use super::duration::DurationParseError;
use crate::crd::RotationField;

/// A single rotation configuration violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field is empty while other fields are set
    #[error("{field} is missing")]
    MissingField { field: RotationField },

    /// The field is not a valid duration string
    #[error("error parsing {field}: {source}")]
    UnparseableDuration {
        field: RotationField,
        value: String,
        source: DurationParseError,
    },

    /// The field parsed to zero or a negative duration
    #[error("{field} duration has to be > 0, got {value:?}")]
    NonPositiveDuration { field: RotationField, value: String },

    /// `field` is longer than the interval that bounds it
    #[error("{field}({value}) has to be <= {limit_field}({limit_value})")]
    OrderingViolation {
        field: RotationField,
        value: String,
        limit_field: RotationField,
        limit_value: String,
    },
}

impl ValidationError {
    /// The field this error is reported against
    #[must_use]
    pub fn field(&self) -> RotationField {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::UnparseableDuration { field, .. }
            | ValidationError::NonPositiveDuration { field, .. }
            | ValidationError::OrderingViolation { field, .. } => *field,
        }
    }
}

/// Join error messages with newlines, skipping entries that render empty
///
/// An empty list yields an empty string.
pub fn format_errors<'a, E, I>(errors: I) -> String
where
    E: fmt::Display + 'a,
    I: IntoIterator<Item = &'a E>,
{
    errors
        .into_iter()
        .map(ToString::to_string)
        .filter(|message| !message.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// All violations found in one configuration
///
/// Lets the full list travel through `?` as a single error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", format_errors(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
