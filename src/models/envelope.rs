use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::utils::constants::SUCCESS_CODE;

/// Wrapper every backend response comes in
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub response_code: String,
    #[serde(default)]
    pub response_msg: String,
    pub content: Option<T>,
    #[serde(default)]
    pub exception: Option<serde_json::Value>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.response_code == SUCCESS_CODE
    }

    /// Server message, or `fallback` when the server sent none
    pub fn message_or(&self, fallback: &str) -> String {
        if self.response_msg.trim().is_empty() {
            fallback.to_string()
        } else {
            self.response_msg.clone()
        }
    }

    /// Content of a successful envelope; a null `content` counts as failure.
    pub fn into_content(self, fallback: &str) -> ClientResult<T> {
        if !self.is_success() {
            return Err(ClientError::Domain(self.message_or(fallback)));
        }
        let message = self.message_or(fallback);
        self.content.ok_or(ClientError::Domain(message))
    }

    /// Like `into_content` but tolerates a null `content` on success.
    pub fn into_optional_content(self, fallback: &str) -> ClientResult<Option<T>> {
        if self.is_success() {
            Ok(self.content)
        } else {
            Err(ClientError::Domain(self.message_or(fallback)))
        }
    }
}
