//! Algorand archetype: no nonce, flat fee per fee unit, optional note.

use super::settings::{VaultSettings, ALGO_SETTINGS};
use super::{TransferInfo, Vault, VaultContext};
use crate::error::WalletError;
use crate::keyring::KeyringMap;
use async_trait::async_trait;
use serde_json::{json, Value};
use vaultkit_tx::{DecodedTx, EncodedTx, EncodedTxAlgo, UnsignedTx};

/// No hardware support on this archetype.
pub static ALGO_KEYRINGS: KeyringMap = KeyringMap {
    hw: None,
    ..KeyringMap::ALL
};

/// Algorand addresses are base32 and compared exactly.
pub fn addresses_equal(a: &str, b: &str) -> bool {
    a == b
}

pub struct AlgoVault {
    ctx: VaultContext,
}

impl AlgoVault {
    pub fn new(ctx: VaultContext) -> Self {
        Self { ctx }
    }
}

fn note_value(tx: &EncodedTxAlgo) -> Option<Value> {
    tx.note.as_ref().map(|note| Value::String(note.clone()))
}

#[async_trait]
impl Vault for AlgoVault {
    fn context(&self) -> &VaultContext {
        &self.ctx
    }

    fn settings(&self) -> &'static VaultSettings {
        &ALGO_SETTINGS
    }

    fn addresses_equal(&self, a: &str, b: &str) -> bool {
        addresses_equal(a, b)
    }

    async fn build_encoded_tx_from_transfer(
        &self,
        transfer: TransferInfo,
    ) -> Result<EncodedTx, WalletError> {
        if transfer.is_token() {
            return Err(WalletError::not_implemented("algo asset transfers"));
        }
        let amount = self.ctx.native_value(&transfer.amount).await?;
        Ok(EncodedTx::Algo(EncodedTxAlgo {
            from: transfer.from,
            to: transfer.to,
            amount,
            note: None,
            flat_fee: None,
            fee_units: None,
        }))
    }

    async fn build_unsigned_tx_from_encoded_tx(
        &self,
        encoded: &EncodedTx,
    ) -> Result<UnsignedTx, WalletError> {
        let payload = match note_value(encoded.as_algo()?) {
            Some(note) => json!({ "note": note }),
            None => json!({}),
        };
        self.ctx.build_unsigned(encoded, payload).await
    }

    async fn decode_tx(&self, encoded: &EncodedTx) -> Result<DecodedTx, WalletError> {
        let extra = note_value(encoded.as_algo()?).map(|note| json!({ "note": note }));
        self.ctx
            .decode_native_transfer(encoded, addresses_equal, extra)
            .await
    }
}
