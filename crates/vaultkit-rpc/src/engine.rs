//! The engine boundary.
//!
//! Everything the vault needs from the outside world: network metadata,
//! account records, the gas-price oracle, chain-specific unsigned
//! transaction assembly, and address validation.

use crate::error::RpcError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vaultkit_tx::{UnsignedTx, UnsignedTxRequest};
use vaultkit_types::{DbAccount, Network, TokenInfo};

/// Result of `Engine::verify_address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressValidation {
    pub is_valid: bool,
    /// Chain-normalized form of the address, when valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_address: Option<String>,
}

impl AddressValidation {
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            normalized_address: None,
        }
    }
}

/// Capabilities consumed by every vault.
///
/// Implementations must be shareable across concurrently running vaults;
/// none of these calls may depend on state held by a particular vault.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn get_network(&self, network_id: &str) -> Result<Network, RpcError>;

    async fn get_native_token_info(&self, network_id: &str) -> Result<TokenInfo, RpcError>;

    async fn get_db_account(&self, account_id: &str) -> Result<DbAccount, RpcError>;

    /// Candidate unit prices, ascending, as display-unit decimal strings.
    async fn get_gas_price(&self, network_id: &str) -> Result<Vec<String>, RpcError>;

    async fn build_unsigned_tx(
        &self,
        network_id: &str,
        request: UnsignedTxRequest,
    ) -> Result<UnsignedTx, RpcError>;

    async fn verify_address(
        &self,
        network_id: &str,
        address: &str,
    ) -> Result<AddressValidation, RpcError>;
}
