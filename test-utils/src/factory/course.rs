//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    semester: String,
    course_name: String,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - semester: `"WS24"`
    /// - course_name: `"Course {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CourseFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            semester: "WS24".to_string(),
            course_name: format!("Course {}", id),
        }
    }

    /// Sets the semester for the course.
    pub fn semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    /// Sets the name for the course.
    pub fn course_name(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = course_name.into();
        self
    }

    /// Inserts the course into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            semester: ActiveValue::Set(self.semester),
            course_name: ActiveValue::Set(self.course_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created course entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
