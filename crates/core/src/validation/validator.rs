//! Structure validation: walk the declared fields, stop at the first failure.

use super::inspector::{is_empty, text_len};
use super::schema::{FieldSchema, FieldValue};
use super::validatable::Validatable;

/// A single failed constraint.
///
/// Always a client-input error; [`status_code`](Self::status_code) is 400.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Violation {
    message: String,
}

impl Violation {
    /// HTTP status every violation maps to.
    pub const STATUS_CODE: u16 = 400;

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn required(name: &str) -> Self {
        Self::new(format!("{name} is required"))
    }

    fn too_short(name: &str, threshold: &str) -> Self {
        Self::new(format!(
            "{name} must be at least {threshold} characters long"
        ))
    }

    fn too_few_items(name: &str, threshold: &str) -> Self {
        Self::new(format!("{name} must have at least {threshold} items"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        Self::STATUS_CODE
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Validate every declared field of `value`, in declaration order.
///
/// Returns the first violation found; later fields are not looked at.
/// Values that are not structures (see [`Validatable`]) always pass.
pub fn validate<T: Validatable + ?Sized>(value: &T) -> Result<(), Violation> {
    // Non-structures pass unconditionally, so a caller handing over the
    // wrong value gets no signal here.
    let Some(schema) = value.schema() else {
        return Ok(());
    };

    for field in schema.fields() {
        check_field(field, &value.field_value(field.ident()))?;
    }
    Ok(())
}

/// Apply one field's constraints to its current value: `required` first,
/// then `min`.
///
/// `min` applies to text (character count) and collections (element count)
/// only, and is skipped when its threshold does not parse. Messages quote the
/// threshold as declared, so `min("03")` reads "at least 03".
pub fn check_field(field: &FieldSchema, value: &FieldValue<'_>) -> Result<(), Violation> {
    let constraints = field.constraints();

    if constraints.required && is_empty(value) {
        return Err(Violation::required(field.display_name()));
    }

    let Some(declared) = constraints.min.as_deref() else {
        return Ok(());
    };
    let Some(threshold) = constraints.threshold() else {
        return Ok(());
    };

    match *value {
        FieldValue::Text(text) if text_len(text) < threshold => {
            Err(Violation::too_short(field.display_name(), declared))
        }
        FieldValue::Collection { len } if len < threshold => {
            Err(Violation::too_few_items(field.display_name(), declared))
        }
        _ => Ok(()),
    }
}
