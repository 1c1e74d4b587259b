//! JSON-RPC backed [`Engine`].
//!
//! Each engine capability maps to a JSON-RPC method of the same name with
//! named parameters, e.g. `get_network {"network_id": "stc--1"}`.

use crate::client::{RpcClient, RpcConfig};
use crate::engine::{AddressValidation, Engine};
use crate::error::RpcError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use vaultkit_tx::{UnsignedTx, UnsignedTxRequest};
use vaultkit_types::{DbAccount, Network, TokenInfo};

pub struct RpcEngine {
    client: RpcClient,
}

impl RpcEngine {
    pub fn new(url: &str) -> Result<Self, RpcError> {
        Ok(Self {
            client: RpcClient::new(url)?,
        })
    }

    pub fn with_config(config: RpcConfig) -> Result<Self, RpcError> {
        Ok(Self {
            client: RpcClient::with_config(config)?,
        })
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }

    async fn call_typed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, RpcError> {
        let val = self.client.call(method, params).await?;
        serde_json::from_value(val).map_err(|source| RpcError::Json {
            method: method.to_string(),
            source,
        })
    }
}

#[async_trait]
impl Engine for RpcEngine {
    async fn get_network(&self, network_id: &str) -> Result<Network, RpcError> {
        self.call_typed("get_network", json!({ "network_id": network_id }))
            .await
    }

    async fn get_native_token_info(&self, network_id: &str) -> Result<TokenInfo, RpcError> {
        self.call_typed("get_native_token_info", json!({ "network_id": network_id }))
            .await
    }

    async fn get_db_account(&self, account_id: &str) -> Result<DbAccount, RpcError> {
        self.call_typed("get_db_account", json!({ "account_id": account_id }))
            .await
    }

    async fn get_gas_price(&self, network_id: &str) -> Result<Vec<String>, RpcError> {
        self.call_typed("get_gas_price", json!({ "network_id": network_id }))
            .await
    }

    async fn build_unsigned_tx(
        &self,
        network_id: &str,
        request: UnsignedTxRequest,
    ) -> Result<UnsignedTx, RpcError> {
        let request = serde_json::to_value(&request).map_err(|source| RpcError::Json {
            method: "build_unsigned_tx".to_string(),
            source,
        })?;
        let params = json!({ "network_id": network_id, "request": request });
        self.call_typed("build_unsigned_tx", params).await
    }

    async fn verify_address(
        &self,
        network_id: &str,
        address: &str,
    ) -> Result<AddressValidation, RpcError> {
        self.call_typed(
            "verify_address",
            json!({ "network_id": network_id, "address": address }),
        )
        .await
    }
}
