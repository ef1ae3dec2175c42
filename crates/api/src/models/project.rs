//! Project payloads and their declared constraints.

use std::sync::OnceLock;

use httpkit_core::types::DbId;
use httpkit_core::validation::{FieldSchema, FieldValue, StructSchema, Validatable};
use serde::{Deserialize, Serialize};

/// A stored project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub priority: i32,
}

/// Body of `POST /api/v1/projects`.
///
/// Missing keys decode to their empty values so that `required` reports
/// them by name instead of the decoder rejecting the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub priority: i32,
}

impl Validatable for CreateProject {
    fn schema(&self) -> Option<&StructSchema> {
        static SCHEMA: OnceLock<StructSchema> = OnceLock::new();
        Some(SCHEMA.get_or_init(|| {
            StructSchema::new()
                .field(FieldSchema::new("Name").json("name").required().min(3))
                .field(FieldSchema::new("Description").json("description,omitempty"))
                .field(FieldSchema::new("Tags").json("tags").min(1))
                .field(FieldSchema::new("Priority").json("priority"))
        }))
    }

    fn field_value(&self, ident: &str) -> FieldValue<'_> {
        match ident {
            "Name" => FieldValue::from(&self.name),
            "Description" => FieldValue::from(&self.description),
            "Tags" => FieldValue::from(&self.tags),
            "Priority" => FieldValue::from(self.priority),
            _ => FieldValue::Unsupported,
        }
    }
}

/// One page of projects.
#[derive(Debug, Serialize)]
pub struct ProjectPage {
    pub items: Vec<Project>,
    pub page: i64,
    pub limit: i64,
    pub total: usize,
}
