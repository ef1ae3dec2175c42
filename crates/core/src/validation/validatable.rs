//! The capability a value needs in order to be validated.

use std::sync::Arc;

use super::schema::{FieldValue, StructSchema};

/// A value the validator can look inside.
///
/// Payload structures override both methods: [`schema`](Self::schema)
/// returns the declared field list (usually a `OnceLock` static), and
/// [`field_value`](Self::field_value) maps a declared identifier to the
/// field's current value. Everything else keeps the defaults and is treated
/// as "not a structure", which always validates.
///
/// ```
/// use std::sync::OnceLock;
/// use httpkit_core::validation::{FieldSchema, FieldValue, StructSchema, Validatable};
///
/// struct CreateTag {
///     name: String,
/// }
///
/// impl Validatable for CreateTag {
///     fn schema(&self) -> Option<&StructSchema> {
///         static SCHEMA: OnceLock<StructSchema> = OnceLock::new();
///         Some(SCHEMA.get_or_init(|| {
///             StructSchema::new()
///                 .field(FieldSchema::new("Name").json("name").required().min(2))
///         }))
///     }
///
///     fn field_value(&self, ident: &str) -> FieldValue<'_> {
///         match ident {
///             "Name" => FieldValue::from(&self.name),
///             _ => FieldValue::Unsupported,
///         }
///     }
/// }
///
/// let tag = CreateTag { name: String::new() };
/// let err = httpkit_core::validation::validate(&tag).unwrap_err();
/// assert_eq!(err.message(), "name is required");
/// ```
pub trait Validatable {
    /// The declared schema, or `None` if this value is not a structure.
    fn schema(&self) -> Option<&StructSchema> {
        None
    }

    /// Current value of the field declared as `ident`.
    fn field_value(&self, ident: &str) -> FieldValue<'_> {
        let _ = ident;
        FieldValue::Unsupported
    }
}

macro_rules! non_structure {
    ($($ty:ty),* $(,)?) => {
        $(impl Validatable for $ty {})*
    };
}

non_structure!(bool, i32, i64, u32, u64, f64, str, String, serde_json::Value);

impl<T> Validatable for [T] {}

impl<T> Validatable for Vec<T> {}

// Pointer-like wrappers are looked through.

impl<T: Validatable + ?Sized> Validatable for &T {
    fn schema(&self) -> Option<&StructSchema> {
        (**self).schema()
    }

    fn field_value(&self, ident: &str) -> FieldValue<'_> {
        (**self).field_value(ident)
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn schema(&self) -> Option<&StructSchema> {
        (**self).schema()
    }

    fn field_value(&self, ident: &str) -> FieldValue<'_> {
        (**self).field_value(ident)
    }
}

impl<T: Validatable + ?Sized> Validatable for Arc<T> {
    fn schema(&self) -> Option<&StructSchema> {
        (**self).schema()
    }

    fn field_value(&self, ident: &str) -> FieldValue<'_> {
        (**self).field_value(ident)
    }
}

/// An absent value has nothing to validate; a present one is looked through.
impl<T: Validatable> Validatable for Option<T> {
    fn schema(&self) -> Option<&StructSchema> {
        self.as_ref().and_then(T::schema)
    }

    fn field_value(&self, ident: &str) -> FieldValue<'_> {
        match self {
            Some(inner) => inner.field_value(ident),
            None => FieldValue::Unsupported,
        }
    }
}
