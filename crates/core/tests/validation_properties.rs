//! Property-based tests for the structure validator.
//!
//! Payloads are built at runtime from a generated schema so that field
//! counts, thresholds, and values can all vary.

use std::cell::RefCell;

use httpkit_core::validation::{
    validate, FieldSchema, FieldValue, StructSchema, Validatable, Violation,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Runtime payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Value {
    Text(String),
    Items(Vec<u8>),
}

/// A structure whose schema and values are supplied at runtime. Records the
/// identifier of every field the validator reads.
struct Record {
    schema: StructSchema,
    values: Vec<Value>,
    reads: RefCell<Vec<&'static str>>,
}

impl Record {
    fn new(schema: StructSchema, values: Vec<Value>) -> Self {
        Self {
            schema,
            values,
            reads: RefCell::new(Vec::new()),
        }
    }
}

impl Validatable for Record {
    fn schema(&self) -> Option<&StructSchema> {
        Some(&self.schema)
    }

    fn field_value(&self, ident: &str) -> FieldValue<'_> {
        let Some(index) = self.schema.fields().iter().position(|f| f.ident() == ident) else {
            return FieldValue::Unsupported;
        };
        self.reads.borrow_mut().push(self.schema.fields()[index].ident());
        match &self.values[index] {
            Value::Text(text) => FieldValue::from(text),
            Value::Items(items) => FieldValue::from(items),
        }
    }
}

const IDENTS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zé]{0,12}".prop_map(Value::Text),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::Items),
    ]
}

fn single(field: FieldSchema, value: Value) -> Record {
    Record::new(StructSchema::new().field(field), vec![value])
}

fn message(result: Result<(), Violation>) -> Option<String> {
    result.err().map(Violation::into_message)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn unconstrained_structures_always_pass(values in prop::collection::vec(value_strategy(), 0..8)) {
        let schema = IDENTS
            .iter()
            .take(values.len())
            .fold(StructSchema::new(), |s, ident| s.field(FieldSchema::new(*ident)));
        let record = Record::new(schema, values);

        prop_assert_eq!(validate(&record), Ok(()));
    }

    #[test]
    fn text_shorter_than_min_fails(threshold in 1usize..16, text in "[a-z]{0,15}") {
        prop_assume!(text.chars().count() < threshold);
        let record = single(FieldSchema::new("Name").min(threshold), Value::Text(text));

        prop_assert_eq!(
            message(validate(&record)),
            Some(format!("Name must be at least {threshold} characters long"))
        );
    }

    #[test]
    fn text_of_exactly_min_passes(threshold in 0usize..16) {
        let text: String = "é".repeat(threshold);
        let record = single(FieldSchema::new("Name").min(threshold), Value::Text(text));

        prop_assert_eq!(validate(&record), Ok(()));
    }

    #[test]
    fn collection_boundary(threshold in 1usize..16) {
        let at = single(FieldSchema::new("Tags").min(threshold), Value::Items(vec![0; threshold]));
        let below = single(
            FieldSchema::new("Tags").min(threshold),
            Value::Items(vec![0; threshold - 1]),
        );

        prop_assert_eq!(validate(&at), Ok(()));
        prop_assert_eq!(
            message(validate(&below)),
            Some(format!("Tags must have at least {threshold} items"))
        );
    }

    #[test]
    fn required_empty_field_short_circuits(
        before in prop::collection::vec(value_strategy(), 0..4),
        after in prop::collection::vec(value_strategy(), 0..3),
        empty_text in any::<bool>(),
    ) {
        let position = before.len();
        let mut schema = StructSchema::new();
        let mut values = Vec::new();

        for (ident, value) in IDENTS.iter().zip(before) {
            schema = schema.field(FieldSchema::new(*ident));
            values.push(value);
        }
        schema = schema.field(FieldSchema::new(IDENTS[position]).required());
        values.push(if empty_text { Value::Text(String::new()) } else { Value::Items(vec![]) });
        for (ident, value) in IDENTS[position + 1..].iter().zip(after) {
            schema = schema.field(FieldSchema::new(*ident).required().min(1));
            values.push(value);
        }

        let record = Record::new(schema, values);
        let result = validate(&record);

        prop_assert_eq!(message(result), Some(format!("{} is required", IDENTS[position])));
        prop_assert_eq!(record.reads.borrow().len(), position + 1);
    }

    #[test]
    fn malformed_thresholds_never_fail(raw in "[a-z.+-]{1,6}", value in value_strategy()) {
        prop_assume!(raw.parse::<usize>().is_err());
        let record = single(FieldSchema::new("Name").min(raw), value);

        prop_assert_eq!(validate(&record), Ok(()));
    }

    #[test]
    fn validation_is_idempotent(
        values in prop::collection::vec(value_strategy(), 1..8),
        thresholds in prop::collection::vec(0usize..6, 8),
    ) {
        let schema = IDENTS
            .iter()
            .zip(&thresholds)
            .take(values.len())
            .fold(StructSchema::new(), |s, (ident, min)| {
                s.field(FieldSchema::new(*ident).min(*min))
            });
        let record = Record::new(schema, values);

        prop_assert_eq!(validate(&record), validate(&record));
    }
}

#[test]
fn bare_number_is_valid() {
    assert_eq!(validate(&17_u32), Ok(()));
}
