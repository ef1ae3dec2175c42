//! Handlers for the project resource.

use axum::extract::State;
use httpkit_core::error::CoreError;
use httpkit_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::models::project::{CreateProject, Project, ProjectPage};
use crate::query::PageParams;
use crate::response::Reply;
use crate::state::AppState;

/// GET /api/v1/projects
///
/// Paginated listing. Malformed `page`/`limit` values fall back to defaults.
pub async fn list_projects(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Reply<ProjectPage>> {
    let pagination = params.pagination();
    let (items, total) = state.projects.list(pagination).await;

    Ok(Reply::Ok(ProjectPage {
        items,
        page: pagination.page,
        limit: pagination.limit,
        total,
    }))
}

/// POST /api/v1/projects
///
/// The body is validated against [`CreateProject`]'s declared constraints
/// before it reaches this handler.
pub async fn create_project(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<Reply<Project>> {
    let project = state.projects.insert(input).await?;

    tracing::info!(project_id = project.id, name = %project.name, "Project created");

    Ok(Reply::Created(project))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<Project>> {
    let project = state.projects.get(id).await.ok_or_else(|| not_found(id))?;

    Ok(Reply::Ok(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Reply<()>> {
    if !state.projects.remove(id).await {
        return Err(not_found(id));
    }

    tracing::info!(project_id = id, "Project deleted");

    Ok(Reply::NoContent)
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}
