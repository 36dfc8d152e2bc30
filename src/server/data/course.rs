//! Course data repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::course::Course;

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a course by identity, the dispatch key for the course category.
    ///
    /// # Arguments
    /// - `id` - Course identity
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course found
    /// - `Ok(None)` - No course with that identity
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }
}
