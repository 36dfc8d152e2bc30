//! Registered methods of the user category.
//!
//! Thin accessors over the user domain model; the public method names match
//! the boundary contract consumed by remote callers.

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    dispatch::registry::{MethodFuture, MethodRegistry},
    model::user::User,
};

pub(super) fn registry() -> MethodRegistry<User> {
    let mut methods = MethodRegistry::new();

    methods.register("getName", get_name);
    methods.register("getEmail", get_email);
    methods.register("getStatus", get_status);
    methods.register("isConfirmed", is_confirmed);
    methods.register("getGithubUsername", get_github_username);

    methods
}

fn get_name<'a>(user: &'a User, _args: &'a [Value], _db: &'a DatabaseConnection) -> MethodFuture<'a> {
    Box::pin(async move { Ok(Value::String(user.name.clone())) })
}

fn get_email<'a>(
    user: &'a User,
    _args: &'a [Value],
    _db: &'a DatabaseConnection,
) -> MethodFuture<'a> {
    Box::pin(async move { Ok(Value::String(user.email.clone())) })
}

fn get_status<'a>(
    user: &'a User,
    _args: &'a [Value],
    _db: &'a DatabaseConnection,
) -> MethodFuture<'a> {
    Box::pin(async move { Ok(Value::String(user.status.clone())) })
}

fn is_confirmed<'a>(
    user: &'a User,
    _args: &'a [Value],
    _db: &'a DatabaseConnection,
) -> MethodFuture<'a> {
    Box::pin(async move { Ok(Value::Bool(user.is_confirmed())) })
}

fn get_github_username<'a>(
    user: &'a User,
    _args: &'a [Value],
    _db: &'a DatabaseConnection,
) -> MethodFuture<'a> {
    Box::pin(async move {
        Ok(user
            .github_username
            .clone()
            .map_or(Value::Null, Value::String))
    })
}
