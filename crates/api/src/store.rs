//! In-memory project storage backing the demo endpoints.

use std::collections::BTreeMap;

use httpkit_core::error::CoreError;
use httpkit_core::pagination::Pagination;
use httpkit_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::project::{CreateProject, Project};

#[derive(Debug, Default)]
struct Inner {
    next_id: DbId,
    projects: BTreeMap<DbId, Project>,
}

/// Projects keyed by id, in insertion order.
#[derive(Debug, Default)]
pub struct ProjectStore {
    inner: RwLock<Inner>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a project. Names are unique, compared case-insensitively.
    pub async fn insert(&self, input: CreateProject) -> Result<Project, CoreError> {
        let mut inner = self.inner.write().await;

        if inner
            .projects
            .values()
            .any(|p| p.name.eq_ignore_ascii_case(&input.name))
        {
            return Err(CoreError::Conflict(format!(
                "A project named '{}' already exists",
                input.name
            )));
        }

        inner.next_id += 1;
        let project = Project {
            id: inner.next_id,
            name: input.name,
            description: input.description,
            tags: input.tags,
            priority: input.priority,
        };
        inner.projects.insert(project.id, project.clone());
        Ok(project)
    }

    /// One page of projects plus the total count.
    pub async fn list(&self, pagination: Pagination) -> (Vec<Project>, usize) {
        let inner = self.inner.read().await;
        let skip = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(pagination.limit).unwrap_or(0);

        let items = inner
            .projects
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect();
        (items, inner.projects.len())
    }

    pub async fn get(&self, id: DbId) -> Option<Project> {
        self.inner.read().await.projects.get(&id).cloned()
    }

    /// Remove a project. Returns `false` if it did not exist.
    pub async fn remove(&self, id: DbId) -> bool {
        self.inner.write().await.projects.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn named(name: &str) -> CreateProject {
        CreateProject {
            name: name.to_string(),
            tags: vec!["demo".into()],
            ..CreateProject::default()
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially() {
        let store = ProjectStore::new();
        let a = store.insert(named("Alpha")).await.unwrap();
        let b = store.insert(named("Beta")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn duplicate_names_conflict() {
        let store = ProjectStore::new();
        store.insert(named("Alpha")).await.unwrap();
        assert_matches!(
            store.insert(named("ALPHA")).await,
            Err(CoreError::Conflict(_))
        );
    }

    #[tokio::test]
    async fn list_pages_through_projects() {
        let store = ProjectStore::new();
        for name in ["Alpha", "Beta", "Gamma"] {
            store.insert(named(name)).await.unwrap();
        }

        let (items, total) = store.list(Pagination { page: 2, limit: 2 }).await;
        assert_eq!(total, 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Gamma");
    }

    #[tokio::test]
    async fn remove_reports_missing_ids() {
        let store = ProjectStore::new();
        let project = store.insert(named("Alpha")).await.unwrap();
        assert!(store.remove(project.id).await);
        assert!(!store.remove(project.id).await);
        assert!(store.get(project.id).await.is_none());
    }
}
