//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM active
//! models, bypassing the repositories under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let course = factory::course::create_course(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("grader@example.org")
//!     .status("confirmed")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `course` - Create course entities
//! - `course_project` - Create course project entities
//! - `schedule` - Create schedule rows (window bounds as epoch seconds)
//! - `delivery` - Create delivery rows owned by a schedule

pub mod course;
pub mod course_project;
pub mod delivery;
pub mod helpers;
pub mod schedule;
pub mod user;
