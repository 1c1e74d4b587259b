//! Engine error type.
//!
//! Every variant names the engine method that failed. These errors cross
//! into the vault untouched: the vault neither wraps their message nor
//! retries them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    /// No HTTP response was received.
    #[error("{method}: engine unreachable: {source}")]
    Transport {
        method: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("{method}: engine answered HTTP {status}: {body}")]
    Status {
        method: String,
        status: u16,
        body: String,
    },

    /// The engine rejected the call.
    #[error("{method}: engine error {code}: {message}")]
    Engine {
        method: String,
        code: i64,
        message: String,
    },

    /// A request or response did not match the method's JSON shape.
    #[error("{method}: malformed JSON: {source}")]
    Json {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response carried neither a result nor an error.
    #[error("{method}: empty engine response")]
    EmptyResponse { method: String },
}

impl RpcError {
    /// Engine method the failure belongs to.
    pub fn method(&self) -> &str {
        match self {
            RpcError::Transport { method, .. }
            | RpcError::Status { method, .. }
            | RpcError::Engine { method, .. }
            | RpcError::Json { method, .. }
            | RpcError::EmptyResponse { method } => method,
        }
    }

    /// Whether the same call may succeed if sent again.
    pub fn is_transient(&self) -> bool {
        match self {
            RpcError::Transport { source, .. } => source.is_timeout() || source.is_connect(),
            RpcError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
