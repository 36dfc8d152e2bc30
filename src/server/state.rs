//! Application state shared across all request handlers.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::dispatch::Dispatcher;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during startup and cloned cheaply for each request via
/// Axum's state extraction: `DatabaseConnection` is a connection pool and
/// the dispatcher is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,
    /// Method registries, built once at startup.
    pub dispatcher: Arc<Dispatcher>,
}
