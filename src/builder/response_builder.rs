//! Wire shapes returned to the invoker.
//!
//! Replies follow the API Gateway proxy format so the function can sit behind
//! an HTTP route or be invoked directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::core::models::Group;
use crate::errors::{GroupError, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl GroupResponse {
    fn json(status_code: u16, body: &serde_json::Value) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body: body.to_string(),
        }
    }

    /// Parses the body back into JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Wraps a group in the success envelope. Never fails.
#[must_use]
pub fn to_response(group: &Group) -> GroupResponse {
    GroupResponse::json(200, &json!({ "group": group }))
}

/// Builds the error envelope carrying the failure reason as-is.
#[must_use]
pub fn error_response(error: &GroupError) -> GroupResponse {
    let status_code = match error {
        GroupError::Storage(StorageError::MissingGroupId) => 400,
        GroupError::Storage(StorageError::TableNotFound(_)) => 404,
        GroupError::Storage(_) => 502,
        GroupError::Mapping(_) => 500,
    };
    GroupResponse::json(status_code, &json!({ "error": error.to_string() }))
}
