//! Record model for [`tagvalidate`](https://crates.io/crates/tagvalidate).
//!
//! Validation needs a uniform view of arbitrary records: for each field, its
//! name, visibility, struct tag and runtime value. This crate provides that
//! view and three ways to obtain it:
//!
//! - [`record!`] declares a plain struct and implements [`Record`] and
//!   [`Reflect`] for it.
//! - [`Record`] can be implemented by hand using [`Field`] builders.
//! - [`DynamicRecord`] pairs a [`RecordDescriptor`] schema with a
//!   `serde_json::Value`, for records only known at runtime.
//!
//! Struct tags follow the conventional `key:"value"` layout and are read
//! through [`StructTag::lookup`].

#![warn(missing_docs)]

mod dynamic;
mod record;
mod tag;
mod value;

pub use dynamic::{DynamicRecord, FieldDescriptor, FieldKind, RecordDescriptor};
pub use record::{Field, Record};
pub use tag::StructTag;
pub use value::{Kind, Reflect, Value};
