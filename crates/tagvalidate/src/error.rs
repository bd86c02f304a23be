use std::fmt;

use crate::validator::rules::Rule;

/// Top-level error type returned by validation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The value passed to the validator is not a record. Nothing was checked.
    #[error("wrong argument given, should be a struct")]
    NotStruct,

    /// One or more fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl Error {
    /// Returns the collected field errors, if this is a validation failure.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::NotStruct => None,
        }
    }
}

/// Why a single field check failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Cause {
    /// A directive is malformed or its argument cannot be parsed.
    #[error("invalid validator syntax")]
    InvalidSyntax,

    /// A private field carries directives.
    #[error("validation for unexported field is not allowed")]
    UnexportedField,

    /// A value does not satisfy a well-formed directive.
    #[error("not valid value of struct with '{0}' tag")]
    Violation(Rule),

    /// A nested record failed validation.
    #[error(transparent)]
    Nested(ValidationErrors),
}

/// A single failure detected on one field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{cause}")]
pub struct ValidationError {
    field: String,
    cause: Cause,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, cause: Cause) -> Self {
        Self {
            field: field.into(),
            cause,
        }
    }

    /// Name of the field the failure was detected on.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The underlying failure.
    #[must_use]
    pub fn cause(&self) -> &Cause {
        &self.cause
    }
}

/// All failures found in one validation call, in detection order.
///
/// Never empty: a call that finds nothing returns `Ok(())` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

#[allow(clippy::len_without_is_empty)]
impl ValidationErrors {
    /// Number of failures. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over the failures in detection order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Returns the failures as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes `self` and returns the failures.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Accumulates failures across the fields of one record.
#[derive(Debug, Default)]
pub(crate) struct ErrorCollector {
    errors: Vec<ValidationError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, cause: Cause) {
        self.errors.push(ValidationError::new(field, cause));
    }

    pub fn record(&mut self, field: &str, result: Result<(), Cause>) {
        if let Err(cause) = result {
            self.push(field, cause);
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}
