//! Field metadata and borrowed field values.

use super::inspector;

/// The current value of one field, borrowed from the payload under
/// validation.
///
/// Only the information the rules need is kept: text is borrowed, numbers
/// are widened, and optionals/collections are reduced to presence and length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i128),
    Float(f64),
    Boolean(bool),
    Optional { present: bool },
    Collection { len: usize },
    Unsupported,
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

macro_rules! integer_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue<'_> {
                fn from(value: $ty) -> Self {
                    FieldValue::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_field_value!(i32, i64, u32, u64);

impl<'a, T> From<&'a Option<T>> for FieldValue<'a> {
    fn from(value: &'a Option<T>) -> Self {
        FieldValue::Optional {
            present: value.is_some(),
        }
    }
}

impl<'a, T> From<&'a [T]> for FieldValue<'a> {
    fn from(value: &'a [T]) -> Self {
        FieldValue::Collection { len: value.len() }
    }
}

impl<'a, T> From<&'a Vec<T>> for FieldValue<'a> {
    fn from(value: &'a Vec<T>) -> Self {
        FieldValue::Collection { len: value.len() }
    }
}

/// Constraints attached to a single field.
///
/// `min` keeps the threshold exactly as declared. It is parsed on every
/// evaluation and a threshold that does not parse as a non-negative integer
/// behaves as if no `min` was declared at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub required: bool,
    pub min: Option<String>,
}

impl Constraints {
    /// The parsed `min` threshold, or `None` when absent or malformed.
    pub fn threshold(&self) -> Option<usize> {
        self.min.as_deref().and_then(inspector::parse_threshold)
    }
}

/// Declared metadata for one field of a payload structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    ident: &'static str,
    json: Option<&'static str>,
    constraints: Constraints,
}

impl FieldSchema {
    /// A field with the given declared identifier and no constraints.
    pub fn new(ident: &'static str) -> Self {
        Self {
            ident,
            json: None,
            constraints: Constraints::default(),
        }
    }

    /// Attach the serialization name annotation, e.g. `"name,omitempty"`.
    ///
    /// The part before the first `,` becomes the display name; `"-"` keeps
    /// the declared identifier.
    pub fn json(mut self, annotation: &'static str) -> Self {
        self.json = Some(annotation);
        self
    }

    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    /// Declare a minimum text length or collection size.
    ///
    /// Accepts anything printable so thresholds can be declared either as
    /// numbers or as raw annotation text.
    pub fn min(mut self, threshold: impl ToString) -> Self {
        self.constraints.min = Some(threshold.to_string());
        self
    }

    pub fn ident(&self) -> &'static str {
        self.ident
    }

    pub fn json_annotation(&self) -> Option<&'static str> {
        self.json
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Name used in violation messages. See [`inspector::resolve_display_name`].
    pub fn display_name(&self) -> &'static str {
        inspector::resolve_display_name(self)
    }
}

/// The declared shape of a payload structure: its fields in declaration
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructSchema {
    fields: Vec<FieldSchema>,
}

impl StructSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Fields are evaluated in the order they are added.
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }
}
