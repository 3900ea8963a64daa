//! JSON-RPC implementation of the wiki service contract.
//!
//! Talks to Confluence's `confluenceservice-v2` endpoint: one POST per
//! operation, positional params with the session token first, faults
//! reported in the response's `error` object.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;
use ureq::Agent;

use super::WikiService;
use crate::error::WikiError;
use crate::types::{Comment, CommentUpdate, NewComment, NewPage, Page};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Path of the JSON-RPC endpoint under the server base URL.
const RPC_PATH: &str = "/rpc/json-rpc/confluenceservice-v2";

/// JSON-RPC client for the Confluence wiki service.
pub struct RpcService {
    agent: Agent,
    base_url: String,
}

/// JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcFault>,
}

/// Fault object inside a JSON-RPC error response.
#[derive(Debug, Deserialize)]
struct RpcFault {
    #[serde(default)]
    code: i64,
    message: String,
}

impl RpcFault {
    /// Classify the fault. Session rejection has no dedicated code on
    /// this endpoint; it is recognizable only by the exception name in
    /// the message.
    fn into_error(self) -> WikiError {
        if self.message.contains("InvalidSessionException")
            || self.message.contains("User not authenticated")
        {
            WikiError::SessionExpired
        } else {
            WikiError::Remote {
                code: self.code,
                message: self.message,
            }
        }
    }

    /// Whether the fault means the requested page does not exist.
    fn is_page_missing(&self) -> bool {
        self.message.contains("does not exist")
    }
}

impl RpcService {
    /// Create a service client for the given server base URL.
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Get the server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one JSON-RPC call and return the raw envelope.
    fn call_raw(&self, method: &str, params: Value) -> Result<RpcResponse, WikiError> {
        let url = format!("{}{}", self.base_url, RPC_PATH);
        let payload = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1,
        });
        let payload_bytes = serde_json::to_vec(&payload)?;

        info!("Calling {} on {}", method, self.base_url);

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])
            .map_err(|e| WikiError::Http {
                status: 0,
                body: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(WikiError::Http {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_json()?)
    }

    /// Execute one JSON-RPC call, mapping faults to [`WikiError`].
    fn call(&self, method: &str, params: Value) -> Result<Value, WikiError> {
        let envelope = self.call_raw(method, params)?;
        if let Some(fault) = envelope.error {
            return Err(fault.into_error());
        }
        Ok(envelope.result.unwrap_or(Value::Null))
    }
}

impl WikiService for RpcService {
    fn login(&self, user: &str, password: &str) -> Result<String, WikiError> {
        // Any failure here, transport included, is an authentication
        // failure from the caller's point of view.
        let result = self
            .call("login", json!([user, password]))
            .map_err(|e| WikiError::Auth(e.to_string()))?;
        serde_json::from_value(result).map_err(|e| WikiError::Auth(e.to_string()))
    }

    fn get_page(
        &self,
        token: &str,
        title: &str,
        space: &str,
    ) -> Result<Option<Page>, WikiError> {
        let envelope = self.call_raw("getPage", json!([token, space, title]))?;
        if let Some(fault) = envelope.error {
            if fault.is_page_missing() {
                return Ok(None);
            }
            return Err(fault.into_error());
        }
        match envelope.result {
            Some(Value::Null) | None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    fn store_page(&self, token: &str, page: &NewPage) -> Result<Page, WikiError> {
        let result = self.call("storePage", json!([token, page]))?;
        Ok(serde_json::from_value(result)?)
    }

    fn add_comment(&self, token: &str, comment: &NewComment) -> Result<Comment, WikiError> {
        let result = self.call("addComment", json!([token, comment]))?;
        Ok(serde_json::from_value(result)?)
    }

    fn edit_comment(&self, token: &str, comment: &CommentUpdate) -> Result<(), WikiError> {
        self.call("editComment", json!([token, comment]))?;
        Ok(())
    }

    fn remove_comment(&self, token: &str, comment_id: u64) -> Result<(), WikiError> {
        self.call("removeComment", json!([token, comment_id.to_string()]))?;
        Ok(())
    }

    fn get_comment(&self, token: &str, comment_id: u64) -> Result<Comment, WikiError> {
        let result = self.call("getComment", json!([token, comment_id.to_string()]))?;
        if result.is_null() {
            return Err(WikiError::CommentNotFound { id: comment_id });
        }
        Ok(serde_json::from_value(result)?)
    }
}
