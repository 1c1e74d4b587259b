//! JSON-RPC 2.0 transport to the engine.
//!
//! One POST per call. A failed call is sent again only when the failure is
//! transient and `RpcConfig::retries` allows it; the delay doubles each time.

use crate::error::RpcError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Serialize)]
struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a Value,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Fault>,
}

#[derive(Deserialize)]
struct Fault {
    code: i64,
    message: String,
}

impl Response {
    fn into_result(self, method: &str) -> Result<Value, RpcError> {
        match (self.error, self.result) {
            (Some(fault), _) => Err(RpcError::Engine {
                method: method.to_string(),
                code: fault.code,
                message: fault.message,
            }),
            (None, Some(result)) => Ok(result),
            (None, None) => Err(RpcError::EmptyResponse {
                method: method.to_string(),
            }),
        }
    }
}

/// Engine endpoint settings.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub url: String,
    /// Basic auth, sent only when both parts are set.
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
    /// Extra attempts after a transient failure.
    pub retries: u32,
    /// Delay before the first retry.
    pub retry_delay: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8545".to_string(),
            username: None,
            password: None,
            timeout: Duration::from_secs(30),
            retries: 0,
            retry_delay: Duration::from_millis(500),
        }
    }
}

pub struct RpcClient {
    http: reqwest::Client,
    config: RpcConfig,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(url: &str) -> Result<Self, RpcError> {
        Self::with_config(RpcConfig {
            url: url.trim_end_matches('/').to_string(),
            ..Default::default()
        })
    }

    pub fn with_config(config: RpcConfig) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| RpcError::Transport {
                method: "connect".to_string(),
                source,
            })?;
        Ok(Self {
            http,
            config,
            next_id: AtomicU64::new(0),
        })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Invoke `method` with named `params` and return its raw result.
    pub async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let request = Request {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params: &params,
        };

        let mut attempt = 0;
        loop {
            match self.send(&request).await {
                Err(e) if e.is_transient() && attempt < self.config.retries => {
                    let delay = self.config.retry_delay * 2u32.saturating_pow(attempt);
                    attempt += 1;
                    log::debug!("{} failed ({}), retry {} in {:?}", method, e, attempt, delay);
                    tokio::time::sleep(delay).await;
                }
                outcome => return outcome,
            }
        }
    }

    async fn send(&self, request: &Request<'_>) -> Result<Value, RpcError> {
        let method = request.method;
        let transport = |source| RpcError::Transport {
            method: method.to_string(),
            source,
        };

        let mut builder = self.http.post(&self.config.url).json(request);
        if let (Some(user), Some(pass)) = (&self.config.username, &self.config.password) {
            builder = builder.basic_auth(user, Some(pass));
        }
        let resp = builder.send().await.map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RpcError::Status {
                method: method.to_string(),
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        let bytes = resp.bytes().await.map_err(transport)?;
        let response: Response = serde_json::from_slice(&bytes).map_err(|source| RpcError::Json {
            method: method.to_string(),
            source,
        })?;
        response.into_result(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Result<Value, RpcError> {
        let response: Response = serde_json::from_value(body).unwrap();
        response.into_result("get_gas_price")
    }

    #[test]
    fn test_config_default() {
        let config = RpcConfig::default();
        assert_eq!(config.url, "http://localhost:8545");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retries, 0);
    }

    #[test]
    fn test_client_url_trimmed() {
        let client = RpcClient::new("http://example.com:8545/").unwrap();
        assert_eq!(client.url(), "http://example.com:8545");
    }

    #[test]
    fn test_request_envelope() {
        let params = json!({ "network_id": "stc--1" });
        let request = Request {
            jsonrpc: "2.0",
            id: 7,
            method: "get_network",
            params: &params,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "get_network",
                "params": { "network_id": "stc--1" },
            })
        );
    }

    #[test]
    fn test_result_returned() {
        let out = parse(json!({ "jsonrpc": "2.0", "id": 1, "result": ["0.000000001"] }));
        assert_eq!(out.unwrap(), json!(["0.000000001"]));
    }

    #[test]
    fn test_fault_becomes_engine_error() {
        let err = parse(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32000, "message": "oracle offline" },
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            RpcError::Engine { ref method, code: -32000, ref message }
                if method == "get_gas_price" && message == "oracle offline"
        ));
    }

    #[test]
    fn test_empty_response() {
        let err = parse(json!({ "jsonrpc": "2.0", "id": 1 })).unwrap_err();
        assert!(matches!(err, RpcError::EmptyResponse { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let client = RpcClient::with_config(RpcConfig {
            url: "http://127.0.0.1:1".into(),
            timeout: Duration::from_secs(2),
            ..Default::default()
        })
        .unwrap();
        let err = client.call("get_network", json!({})).await.unwrap_err();
        assert!(matches!(err, RpcError::Transport { .. }));
        assert_eq!(err.method(), "get_network");
    }
}
