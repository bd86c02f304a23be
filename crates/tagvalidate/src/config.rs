use std::borrow::Cow;

/// Struct tag key that holds validation directives unless overridden.
pub const DEFAULT_TAG_KEY: &str = "validate";

/// Options for configuring the `Validator` at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidatorOption {
    /// Read directives from this struct tag key instead of `validate`.
    TagKey(String),
}

/// Resolved configuration used while walking a record.
#[derive(Debug, Clone)]
pub(crate) struct ValidationConfig {
    pub tag_key: Cow<'static, str>,
}

impl ValidationConfig {
    pub const fn new() -> Self {
        Self {
            tag_key: Cow::Borrowed(DEFAULT_TAG_KEY),
        }
    }

    pub fn from_options(options: &[ValidatorOption]) -> Self {
        let mut cfg = Self::new();
        for option in options {
            match option {
                ValidatorOption::TagKey(key) => cfg.tag_key = Cow::Owned(key.clone()),
            }
        }
        cfg
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new()
    }
}
