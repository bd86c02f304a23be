//! Declarative field validation driven by struct-tag directives.
//!
//! Each field of a record may carry a struct tag such as
//! `validate:"min:18;max:99"`. [`validate`] walks the record, checks every
//! exported field against its directives, recurses into nested records, and
//! reports every failure at once.
//!
//! # Quick start
//!
//! ```rust
//! use tagvalidate::{Error, validate};
//!
//! tagvalidate::types::record! {
//!     pub struct Signup {
//!         pub login: String => r#"validate:"min:3;max:16""#,
//!         pub age: i64 => r#"validate:"min:18""#,
//!         pub plan: String => r#"validate:"in:free,pro""#,
//!     }
//! }
//!
//! let signup = Signup { login: "al".into(), age: 17, plan: "pro".into() };
//! match validate(&signup) {
//!     Err(Error::Validation(errors)) => assert_eq!(errors.len(), 2),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```
//!
//! # Directives
//!
//! | Rule | Field kinds | Argument | Check |
//! |------|-------------|----------|-------|
//! | `len` | string | integer | byte length equals the argument |
//! | `min` | int, string | integer | value (or byte length) is at least the argument |
//! | `max` | int, string | integer | value (or byte length) is at most the argument |
//! | `in` | int, string | comma-separated list | value equals one of the elements |
//!
//! Directives are separated by `;`. Rules that do not apply to a field's kind
//! are ignored.
//!
//! # Error types
//!
//! | Type | When |
//! |------|------|
//! | [`Error::NotStruct`] | The value passed in is not a record |
//! | [`Error::Validation`] | One or more fields failed; holds [`ValidationErrors`] |
//! | [`Cause`] | The reason behind one [`ValidationError`] |
//!
//! # Re-exported types
//!
//! The [`types`] module re-exports
//! [`tagvalidate-types`](https://crates.io/crates/tagvalidate-types), which
//! defines the record model and the [`record!`](types::record!) macro.

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

/// Re-export of [`tagvalidate-types`](https://crates.io/crates/tagvalidate-types)
/// for declaring and reflecting records.
pub use tagvalidate_types as types;

pub use config::{DEFAULT_TAG_KEY, ValidatorOption};
pub use error::{Cause, Error, ValidationError, ValidationErrors};
pub use validator::rules::Rule;
pub use validator::{Validator, validate};
