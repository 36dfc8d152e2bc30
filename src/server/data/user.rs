//! User data repository for database operations.
//!
//! Provides the keyed lookups consumed by the dispatch layer plus the
//! inserts used by startup seeding. Entity models are converted to domain
//! models at this boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by email address.
    ///
    /// Email is the dispatch key for the user category.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by identity.
    ///
    /// # Arguments
    /// - `id` - User identity
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that identity
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Counts all users.
    ///
    /// Used during startup to decide whether the default admin account needs
    /// to be seeded.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of user rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Inserts a user from parameter model.
    ///
    /// # Arguments
    /// - `param` - User fields; the password must already be a digest
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            github_username: ActiveValue::Set(None),
            email: ActiveValue::Set(param.email),
            status: ActiveValue::Set(param.status),
            password: ActiveValue::Set(Some(param.password)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }
}
