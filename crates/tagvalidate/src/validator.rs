use tagvalidate_types::Reflect;

use crate::config::{ValidationConfig, ValidatorOption};
use crate::error::Error;

mod directive;
pub(crate) mod rules;
mod traversal;

/// Validates records against the directives in their struct tags.
///
/// A `Validator` holds only its configuration, so it is cheap to build and
/// safe to share between threads.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new `Validator` with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: ValidationConfig::new(),
        }
    }

    /// Create a new `Validator` with the given options.
    #[must_use]
    pub fn with_options(options: &[ValidatorOption]) -> Self {
        Self {
            config: ValidationConfig::from_options(options),
        }
    }

    /// Returns the struct tag key directives are read from.
    #[must_use]
    pub fn tag_key(&self) -> &str {
        &self.config.tag_key
    }

    /// Validate every field of `value` against its directives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStruct`] if `value` is not a record, or
    /// [`Error::Validation`] holding every failure found, in field
    /// declaration order.
    pub fn validate<T: Reflect + ?Sized>(&self, value: &T) -> Result<(), Error> {
        traversal::validate_value(&value.reflect(), &self.config)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a value using a `Validator` with default options.
///
/// # Errors
///
/// Returns [`Error::NotStruct`] if `value` is not a record, or
/// [`Error::Validation`] holding every failure found.
pub fn validate<T: Reflect + ?Sized>(value: &T) -> Result<(), Error> {
    Validator::new().validate(value)
}
