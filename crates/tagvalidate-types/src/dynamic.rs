use serde::{Deserialize, Serialize};

use crate::record::{Field, Record};
use crate::tag::StructTag;
use crate::value::{Reflect, Value};

/// Schema for a record whose values live in a `serde_json::Value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDescriptor {
    /// Record type name.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

/// Schema for one field of a [`RecordDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name; also the key looked up in the JSON object.
    pub name: String,
    /// Declared kind of the field.
    pub kind: FieldKind,
    /// Whether the field is exported. Defaults to `true`.
    #[serde(default = "exported_by_default")]
    pub exported: bool,
    /// Struct tag attached to the field.
    #[serde(default)]
    pub tag: String,
}

/// Declared kind of a [`FieldDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A JSON integer representable as `i64`.
    Int,
    /// A JSON string.
    String,
    /// A nested JSON object described by its own schema.
    Record(RecordDescriptor),
    /// Any other value; never inspected by rules.
    Other,
}

fn exported_by_default() -> bool {
    true
}

impl RecordDescriptor {
    /// Pairs this schema with a JSON value.
    #[must_use]
    pub fn bind<'a>(&'a self, value: &'a serde_json::Value) -> DynamicRecord<'a> {
        DynamicRecord::new(self, value)
    }
}

/// A JSON value viewed through a [`RecordDescriptor`].
///
/// Reflects as a record only when the JSON value is an object. Fields that
/// are missing, `null`, or hold a JSON type that does not match their declared
/// kind reflect as [`Value::Unsupported`].
#[derive(Debug, Clone, Copy)]
pub struct DynamicRecord<'a> {
    descriptor: &'a RecordDescriptor,
    value: &'a serde_json::Value,
}

impl<'a> DynamicRecord<'a> {
    /// Creates a view of `value` using `descriptor`.
    #[must_use]
    pub fn new(descriptor: &'a RecordDescriptor, value: &'a serde_json::Value) -> Self {
        Self { descriptor, value }
    }

    /// Returns the schema of this record.
    #[must_use]
    pub fn descriptor(&self) -> &'a RecordDescriptor {
        self.descriptor
    }
}

impl Record for DynamicRecord<'_> {
    fn fields(&self) -> Vec<Field<'_>> {
        self.descriptor
            .fields
            .iter()
            .map(|desc| Field {
                name: &desc.name,
                exported: desc.exported,
                tag: StructTag::new(&desc.tag),
                value: field_value(&desc.kind, self.value.get(&desc.name)),
            })
            .collect()
    }
}

impl Reflect for DynamicRecord<'_> {
    fn reflect(&self) -> Value<'_> {
        if self.value.is_object() {
            Value::record(self)
        } else {
            Value::Unsupported
        }
    }
}

fn field_value<'a>(kind: &'a FieldKind, json: Option<&'a serde_json::Value>) -> Value<'a> {
    let Some(json) = json else {
        return Value::Unsupported;
    };
    match kind {
        FieldKind::Int => json.as_i64().map_or(Value::Unsupported, Value::Int),
        FieldKind::String => json.as_str().map_or(Value::Unsupported, Value::String),
        FieldKind::Record(descriptor) if json.is_object() => {
            Value::Struct(Box::new(DynamicRecord::new(descriptor, json)))
        }
        FieldKind::Record(_) | FieldKind::Other => Value::Unsupported,
    }
}
