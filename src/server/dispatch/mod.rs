//! Generic method dispatch over domain entities.
//!
//! A remote caller names an entity category, a category-specific key, a
//! method, and positional arguments; the dispatcher resolves the entity
//! through the matching repository and invokes the method from the
//! category's registry. The registries are built once at startup, so no
//! per-method wiring exists at the boundary and an unknown method is a map
//! miss rather than a routing gap.
//!
//! Every invocation is stateless and independent; nothing spans two calls.

pub mod args;
pub mod registry;

mod course;
mod course_project;
mod user;

use std::fmt;

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::{CourseProjectRepository, CourseRepository, UserRepository},
    dispatch::registry::MethodRegistry,
    error::dispatch::DispatchError,
    model::{course::Course, course_project::CourseProject, user::User},
};

/// Entity categories reachable through dispatch.
///
/// The key is category-specific: email for users, numeric identity for
/// courses and course projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    User,
    Course,
    CourseProject,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Course => write!(f, "Course"),
            Self::CourseProject => write!(f, "Course Project"),
        }
    }
}

/// Method registries for every dispatchable category.
pub struct Dispatcher {
    users: MethodRegistry<User>,
    courses: MethodRegistry<Course>,
    projects: MethodRegistry<CourseProject>,
}

impl Dispatcher {
    /// Builds all registries. Called once at startup.
    pub fn new() -> Self {
        Self {
            users: user::registry(),
            courses: course::registry(),
            projects: course_project::registry(),
        }
    }

    /// Invokes a named method on the user identified by email.
    ///
    /// # Arguments
    /// - `db` - Database connection for resolution and for the method itself
    /// - `email` - Dispatch key of the user category
    /// - `method` - Public method name
    /// - `args` - Positional arguments
    ///
    /// # Returns
    /// - `Ok(Value)` - The method's result payload
    /// - `Err(DispatchError::NotFound)` - No user with that email
    /// - `Err(DispatchError::MethodNotFound)` - Unknown method name
    /// - `Err(DispatchError::Invocation)` - The method failed; detail attached
    pub async fn invoke_on_user(
        &self,
        db: &DatabaseConnection,
        email: &str,
        method: &str,
        args: &[Value],
    ) -> Result<Value, DispatchError> {
        let user = UserRepository::new(db)
            .find_by_email(email)
            .await?
            .ok_or(DispatchError::NotFound(Category::User))?;

        self.users
            .invoke(Category::User, &user, method, args, db)
            .await
    }

    /// Invokes a named method on the course identified by id.
    ///
    /// Failure classification is identical to `invoke_on_user`.
    pub async fn invoke_on_course(
        &self,
        db: &DatabaseConnection,
        course_id: i32,
        method: &str,
        args: &[Value],
    ) -> Result<Value, DispatchError> {
        let course = CourseRepository::new(db)
            .find_by_id(course_id)
            .await?
            .ok_or(DispatchError::NotFound(Category::Course))?;

        self.courses
            .invoke(Category::Course, &course, method, args, db)
            .await
    }

    /// Invokes a named method on the course project identified by id.
    ///
    /// Failure classification is identical to `invoke_on_user`.
    pub async fn invoke_on_course_project(
        &self,
        db: &DatabaseConnection,
        project_id: i32,
        method: &str,
        args: &[Value],
    ) -> Result<Value, DispatchError> {
        let project = CourseProjectRepository::new(db)
            .find_by_id(project_id)
            .await?
            .ok_or(DispatchError::NotFound(Category::CourseProject))?;

        self.projects
            .invoke(Category::CourseProject, &project, method, args, db)
            .await
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
