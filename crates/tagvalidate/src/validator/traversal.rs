use tagvalidate_types::{Field, Record, Value};

use crate::config::ValidationConfig;
use crate::error::{Cause, Error, ErrorCollector, ValidationErrors};

use super::{directive, rules};

/// Validates a reflected value, which must be a record.
pub(crate) fn validate_value(value: &Value<'_>, cfg: &ValidationConfig) -> Result<(), Error> {
    let Some(record) = value.as_record() else {
        return Err(Error::NotStruct);
    };
    validate_record(record, cfg)?;
    Ok(())
}

/// Checks every field of `record` and collects all failures.
fn validate_record(record: &dyn Record, cfg: &ValidationConfig) -> Result<(), ValidationErrors> {
    let mut errors = ErrorCollector::new();
    for field in record.fields() {
        validate_field(&field, cfg, &mut errors);
    }
    errors.finish()
}

fn validate_field(field: &Field<'_>, cfg: &ValidationConfig, errors: &mut ErrorCollector) {
    // Nested records are always walked; their own tag is ignored.
    if let Some(nested) = field.value.as_record() {
        if let Err(nested_errors) = validate_record(nested, cfg) {
            errors.push(field.name, Cause::Nested(nested_errors));
        }
        return;
    }

    let directives = field.tag.get(&cfg.tag_key);

    if !field.exported {
        if directives.is_empty() {
            tracing::trace!(field = field.name, "skipping private field");
        } else {
            errors.push(field.name, Cause::UnexportedField);
        }
        return;
    }

    for parsed in directive::parse_all(&directives) {
        let result = parsed.and_then(|d| rules::apply(&field.value, d.rule, d.args));
        errors.record(field.name, result);
    }
}
