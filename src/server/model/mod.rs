//! Domain models and operation-specific parameter types.
//!
//! Entities are converted into these models at the repository boundary so
//! the rest of the server never handles raw rows.

pub mod course;
pub mod course_project;
pub mod schedule;
pub mod user;
