//! Canonical signer input.
//!
//! The vault only ever assembles an [`UnsignedTxRequest`]; turning it into an
//! [`UnsignedTx`] is the engine's job, because only the chain provider knows
//! how to fill in nonces, fee limits and chain-specific payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Spending side of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxInput {
    pub address: String,
    #[serde(with = "crate::serde_amount")]
    pub value: u128,
    #[serde(default)]
    pub public_key: String,
}

/// Receiving side of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOutput {
    pub address: String,
    #[serde(with = "crate::serde_amount")]
    pub value: u128,
}

/// What the vault hands to `Engine::build_unsigned_tx`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTxRequest {
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    #[serde(with = "crate::serde_amount")]
    pub fee_price_per_unit: u128,
    #[serde(default, with = "crate::serde_amount::option", skip_serializing_if = "Option::is_none")]
    pub fee_limit: Option<u128>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(default)]
    pub payload: Value,
}

/// Transaction ready for signing, as assembled by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTx {
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    #[serde(with = "crate::serde_amount")]
    pub fee_price_per_unit: u128,
    /// Fee limit computed (or echoed) by the engine.
    #[serde(default, with = "crate::serde_amount::option", skip_serializing_if = "Option::is_none")]
    pub fee_limit: Option<u128>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(default)]
    pub payload: Value,
}

/// Output of a signer: raw transaction bytes plus its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTx {
    pub txid: String,
    /// Hex-encoded raw transaction.
    pub raw_tx: String,
}
