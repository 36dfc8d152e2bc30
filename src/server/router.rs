use axum::{routing::post, Router};

use crate::server::{controller::dispatch, state::AppState};

/// Builds the application router.
///
/// All dispatch endpoints are POST: the method name and arguments live in
/// the body, and invocations may persist data.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users/invoke", post(dispatch::invoke_on_user))
        .route("/api/courses/invoke", post(dispatch::invoke_on_course))
        .route(
            "/api/projects/invoke",
            post(dispatch::invoke_on_course_project),
        )
}
