//! Starcoin archetype: nonce-based account model, gas price × gas limit.

use super::settings::{VaultSettings, STC_SETTINGS};
use super::{TransferInfo, Vault, VaultContext};
use crate::error::WalletError;
use crate::keyring::KeyringMap;
use async_trait::async_trait;
use serde_json::json;
use vaultkit_tx::{DecodedTx, EncodedTx, EncodedTxStc, UnsignedTx};

pub static STC_KEYRINGS: KeyringMap = KeyringMap::ALL;

/// Starcoin addresses are hex; case carries no meaning.
pub fn addresses_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

pub struct StcVault {
    ctx: VaultContext,
}

impl StcVault {
    pub fn new(ctx: VaultContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Vault for StcVault {
    fn context(&self) -> &VaultContext {
        &self.ctx
    }

    fn settings(&self) -> &'static VaultSettings {
        &STC_SETTINGS
    }

    fn addresses_equal(&self, a: &str, b: &str) -> bool {
        addresses_equal(a, b)
    }

    async fn build_encoded_tx_from_transfer(
        &self,
        transfer: TransferInfo,
    ) -> Result<EncodedTx, WalletError> {
        if transfer.is_token() {
            return Err(WalletError::not_implemented("stc token transfers"));
        }
        let value = self.ctx.native_value(&transfer.amount).await?;
        Ok(EncodedTx::Stc(EncodedTxStc {
            from: transfer.from,
            to: transfer.to,
            value,
            nonce: None,
            gas_price: None,
            gas_limit: None,
        }))
    }

    async fn build_unsigned_tx_from_encoded_tx(
        &self,
        encoded: &EncodedTx,
    ) -> Result<UnsignedTx, WalletError> {
        encoded.as_stc()?;
        self.ctx.build_unsigned(encoded, json!({})).await
    }

    async fn decode_tx(&self, encoded: &EncodedTx) -> Result<DecodedTx, WalletError> {
        encoded.as_stc()?;
        self.ctx
            .decode_native_transfer(encoded, addresses_equal, None)
            .await
    }
}
