//! User domain model and parameters.

/// Application user as seen by the dispatch surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub github_username: Option<String>,
    pub email: String,
    /// Account status, either "unconfirmed" or "confirmed".
    pub status: String,
}

impl User {
    /// Converts an entity model to the domain model at the repository boundary.
    ///
    /// The password digest never leaves the data layer.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            github_username: entity.github_username,
            email: entity.email,
            status: entity.status,
        }
    }

    /// Whether the account has confirmed its email address.
    pub fn is_confirmed(&self) -> bool {
        self.status == "confirmed"
    }
}

/// Parameters for inserting a user, used by startup seeding.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    /// Password digest, not the plain password.
    pub password: String,
    pub status: String,
}
