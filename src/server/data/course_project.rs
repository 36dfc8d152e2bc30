//! Course project data repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::course_project::CourseProject;

pub struct CourseProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a course project by identity, the dispatch key for the project category.
    ///
    /// # Arguments
    /// - `id` - Project identity
    ///
    /// # Returns
    /// - `Ok(Some(CourseProject))` - Project found
    /// - `Ok(None)` - No project with that identity
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CourseProject>, DbErr> {
        let entity = entity::prelude::CourseProject::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(CourseProject::from_entity))
    }
}
