//! Course project factory for creating test project entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test course projects with customizable fields.
pub struct CourseProjectFactory<'a> {
    db: &'a DatabaseConnection,
    project_name: String,
    course_name: String,
}

impl<'a> CourseProjectFactory<'a> {
    /// Creates a new CourseProjectFactory with default values.
    ///
    /// Defaults:
    /// - project_name: `"Project {id}"` where id is auto-incremented
    /// - course_name: `"Course {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CourseProjectFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            project_name: format!("Project {}", id),
            course_name: format!("Course {}", id),
        }
    }

    /// Sets the project name.
    pub fn project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = project_name.into();
        self
    }

    /// Sets the owning course name.
    pub fn course_name(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = course_name.into();
        self
    }

    /// Inserts the course project into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created course project entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course_project::Model, DbErr> {
        entity::course_project::ActiveModel {
            project_name: ActiveValue::Set(self.project_name),
            course_name: ActiveValue::Set(self.course_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course project with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created course project entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_course_project(
    db: &DatabaseConnection,
) -> Result<entity::course_project::Model, DbErr> {
    CourseProjectFactory::new(db).build().await
}
