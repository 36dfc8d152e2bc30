//! Registered methods of the course project category.

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    dispatch::registry::{MethodFuture, MethodRegistry},
    model::course_project::CourseProject,
};

pub(super) fn registry() -> MethodRegistry<CourseProject> {
    let mut methods = MethodRegistry::new();

    methods.register("getProjectName", get_project_name);
    methods.register("getCourseName", get_course_name);

    methods
}

fn get_project_name<'a>(
    project: &'a CourseProject,
    _args: &'a [Value],
    _db: &'a DatabaseConnection,
) -> MethodFuture<'a> {
    Box::pin(async move { Ok(Value::String(project.project_name.clone())) })
}

fn get_course_name<'a>(
    project: &'a CourseProject,
    _args: &'a [Value],
    _db: &'a DatabaseConnection,
) -> MethodFuture<'a> {
    Box::pin(async move { Ok(Value::String(project.course_name.clone())) })
}
