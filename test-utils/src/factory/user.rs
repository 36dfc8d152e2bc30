//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("grader@example.org")
///     .status("confirmed")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    github_username: Option<String>,
    email: String,
    status: String,
    password: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - github_username: `None`
    /// - email: `"user{id}@example.org"`
    /// - status: `"unconfirmed"`
    /// - password: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            github_username: None,
            email: format!("user{}@example.org", id),
            status: "unconfirmed".to_string(),
            password: None,
        }
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the GitHub username for the user.
    pub fn github_username(mut self, github_username: Option<String>) -> Self {
        self.github_username = github_username;
        self
    }

    /// Sets the email address for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the account status for the user.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the password digest for the user.
    pub fn password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }

    /// Inserts the user into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            github_username: ActiveValue::Set(self.github_username),
            email: ActiveValue::Set(self.email),
            status: ActiveValue::Set(self.status),
            password: ActiveValue::Set(self.password),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
