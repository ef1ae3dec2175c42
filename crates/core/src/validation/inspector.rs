//! Single-field predicates: emptiness, display names, thresholds.
//!
//! Everything here is pure and infallible. Missing or malformed metadata
//! yields a non-failing answer rather than an error.

use super::schema::{FieldSchema, FieldValue};

/// Serialization annotation meaning "this field is not serialized".
const IGNORE_SENTINEL: &str = "-";

/// Whether `value` is the zero/empty representative of its category.
///
/// Empty text, numeric zero, `false`, an absent optional, and a zero-length
/// collection are empty. Unsupported values are never empty, so `required`
/// has no effect on nested structures.
pub fn is_empty(value: &FieldValue<'_>) -> bool {
    match *value {
        FieldValue::Text(text) => text.is_empty(),
        FieldValue::Integer(n) => n == 0,
        FieldValue::Float(f) => f == 0.0,
        FieldValue::Boolean(b) => !b,
        FieldValue::Optional { present } => !present,
        FieldValue::Collection { len } => len == 0,
        FieldValue::Unsupported => false,
    }
}

/// The name a client knows the field by.
///
/// Prefers the serialization annotation up to its first `,` (dropping
/// modifiers such as `omitempty`). Falls back to the declared identifier when
/// there is no annotation, the name part is empty, or it is the ignore
/// sentinel `-`.
pub fn resolve_display_name(field: &FieldSchema) -> &'static str {
    match field.json_annotation() {
        Some(annotation) => {
            let name = annotation
                .split_once(',')
                .map_or(annotation, |(name, _)| name);
            if name.is_empty() || name == IGNORE_SENTINEL {
                field.ident()
            } else {
                name
            }
        }
        None => field.ident(),
    }
}

/// Parse a declared `min` threshold. Anything that is not a non-negative
/// integer is treated as no threshold.
pub fn parse_threshold(raw: &str) -> Option<usize> {
    raw.parse().ok()
}

/// Length of text as seen by `min`, in characters.
pub fn text_len(text: &str) -> usize {
    text.chars().count()
}
