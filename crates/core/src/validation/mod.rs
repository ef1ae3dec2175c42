//! Declarative request payload validation.
//!
//! A payload type describes its fields once, as a [`StructSchema`] of
//! [`FieldSchema`] entries carrying [`Constraints`]. At validation time the
//! engine asks the payload for each field's current [`FieldValue`], checks
//! `required` before `min`, and stops at the first [`Violation`].

pub mod inspector;
pub mod schema;
pub mod validatable;
pub mod validator;

pub use schema::{Constraints, FieldSchema, FieldValue, StructSchema};
pub use validatable::Validatable;
pub use validator::{check_field, validate, Violation};
