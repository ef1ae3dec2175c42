//! Route definitions for projects, mounted at `/projects`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{fallback, projects};
use crate::state::AppState;

/// ```text
/// GET    /         -> list_projects
/// POST   /         -> create_project
/// GET    /{id}     -> get_project
/// DELETE /{id}     -> delete_project
///
/// Other methods on these paths get a 405 envelope.
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/{id}",
            get(projects::get_project).delete(projects::delete_project),
        )
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
