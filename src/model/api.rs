use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Successful result of a generic method invocation.
#[derive(Serialize, Deserialize)]
pub struct InvokeResultDto {
    pub result: Value,
}
