//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod course;
pub mod course_project;
pub mod schedule;
pub mod user;

pub use course::CourseRepository;
pub use course_project::CourseProjectRepository;
pub use schedule::ScheduleRepository;
pub use user::UserRepository;

#[cfg(test)]
mod test;
