//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database
//! operations against SQLite. It follows the same layered layout throughout:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Dispatch Layer** (`dispatch/`) - named-method registries and generic invocation
//! - **Data Layer** (`data/`) - database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - application error types and HTTP response mapping
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - environment-based application configuration
//! - **State** (`state`) - shared application state (DB connection, dispatcher)
//! - **Startup** (`startup`) - database connection, migrations, and admin seeding
//! - **Router** (`router`) - Axum route configuration
//!
//! A dispatch request flows router → controller → dispatcher → resolver
//! (data layer) → registered method, which may itself call back into the
//! data layer (e.g. persisting a schedule), and the result or classified
//! failure flows back out as JSON.

pub mod config;
pub mod controller;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
pub mod state;
pub mod util;
