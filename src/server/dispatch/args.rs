//! Positional argument extraction for registered methods.
//!
//! Arguments arrive as a JSON array and are not validated before invocation;
//! these helpers turn a missing or mistyped position into the
//! `InvocationError` the method reports as its own failure.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::server::error::dispatch::InvocationError;

/// Extracts an integer identity argument.
pub fn id(method: &'static str, args: &[Value], index: usize) -> Result<i32, InvocationError> {
    let value = require(method, args, index)?;

    value
        .as_i64()
        .and_then(|id| i32::try_from(id).ok())
        .ok_or(InvocationError::InvalidArgument {
            method,
            index,
            expected: "integer id",
        })
}

/// Extracts an epoch-seconds argument as a point in time.
pub fn datetime(
    method: &'static str,
    args: &[Value],
    index: usize,
) -> Result<DateTime<Utc>, InvocationError> {
    let value = require(method, args, index)?;

    epoch_seconds(method, index, value)
}

/// Extracts an array-of-epoch-seconds argument.
pub fn datetime_list(
    method: &'static str,
    args: &[Value],
    index: usize,
) -> Result<Vec<DateTime<Utc>>, InvocationError> {
    let value = require(method, args, index)?;

    let items = value.as_array().ok_or(InvocationError::InvalidArgument {
        method,
        index,
        expected: "array of epoch seconds",
    })?;

    items
        .iter()
        .map(|item| epoch_seconds(method, index, item))
        .collect()
}

fn require<'v>(
    method: &'static str,
    args: &'v [Value],
    index: usize,
) -> Result<&'v Value, InvocationError> {
    args.get(index)
        .ok_or(InvocationError::MissingArgument { method, index })
}

fn epoch_seconds(
    method: &'static str,
    index: usize,
    value: &Value,
) -> Result<DateTime<Utc>, InvocationError> {
    value
        .as_i64()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
        .ok_or(InvocationError::InvalidArgument {
            method,
            index,
            expected: "epoch seconds",
        })
}
