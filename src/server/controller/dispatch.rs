//! HTTP boundary of the dispatch layer.
//!
//! Each handler names a target category explicitly; the request body carries
//! the category-specific key, the method name, and positional arguments.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::api::InvokeResultDto,
    server::{error::dispatch::DispatchError, state::AppState},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeOnUserDto {
    pub user_email: String,
    pub function_name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeOnCourseDto {
    pub course_id: i32,
    pub function_name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeOnCourseProjectDto {
    pub course_project_id: i32,
    pub function_name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Invokes a named method on the user identified by email.
pub async fn invoke_on_user(
    State(state): State<AppState>,
    Json(dto): Json<InvokeOnUserDto>,
) -> Result<Json<InvokeResultDto>, DispatchError> {
    let result = state
        .dispatcher
        .invoke_on_user(&state.db, &dto.user_email, &dto.function_name, &dto.args)
        .await?;

    Ok(Json(InvokeResultDto { result }))
}

/// Invokes a named method on the course identified by id.
pub async fn invoke_on_course(
    State(state): State<AppState>,
    Json(dto): Json<InvokeOnCourseDto>,
) -> Result<Json<InvokeResultDto>, DispatchError> {
    let result = state
        .dispatcher
        .invoke_on_course(&state.db, dto.course_id, &dto.function_name, &dto.args)
        .await?;

    Ok(Json(InvokeResultDto { result }))
}

/// Invokes a named method on the course project identified by id.
pub async fn invoke_on_course_project(
    State(state): State<AppState>,
    Json(dto): Json<InvokeOnCourseProjectDto>,
) -> Result<Json<InvokeResultDto>, DispatchError> {
    let result = state
        .dispatcher
        .invoke_on_course_project(
            &state.db,
            dto.course_project_id,
            &dto.function_name,
            &dto.args,
        )
        .await?;

    Ok(Json(InvokeResultDto { result }))
}
