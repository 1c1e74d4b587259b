//! Chain-agnostic decoded transactions.

use crate::fee::DecodedFeeInfo;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vaultkit_types::{Network, TokenInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodedTxStatus {
    Pending,
    Confirmed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DecodedTxDirection {
    In,
    Out,
    #[serde(rename = "SELF")]
    SelfSend,
}

impl DecodedTxDirection {
    /// Direction relative to the active account.
    ///
    /// `eq` is the family's address comparison; case handling belongs to the
    /// chain, not to this function.
    pub fn derive<F>(from: &str, to: &str, account: &str, eq: F) -> Self
    where
        F: Fn(&str, &str) -> bool,
    {
        if !eq(from, account) {
            DecodedTxDirection::In
        } else if eq(to, account) {
            DecodedTxDirection::SelfSend
        } else {
            DecodedTxDirection::Out
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTransferAction {
    pub token_info: TokenInfo,
    pub from: String,
    pub to: String,
    /// Display amount.
    pub amount: String,
    /// Atomic amount.
    pub amount_value: String,
    #[serde(default)]
    pub extra: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransferAction {
    pub token_info: TokenInfo,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub amount_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenApproveAction {
    pub token_info: TokenInfo,
    pub owner: String,
    pub spender: String,
    pub amount: String,
    pub amount_value: String,
    pub is_max: bool,
}

/// One step of a decoded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecodedTxAction {
    NativeTransfer(NativeTransferAction),
    TokenTransfer(TokenTransferAction),
    TokenApprove(TokenApproveAction),
    /// Anything the decoder could not classify; the raw payload is kept.
    Unknown { raw: Value },
}

impl DecodedTxAction {
    pub fn as_native_transfer(&self) -> Option<&NativeTransferAction> {
        match self {
            DecodedTxAction::NativeTransfer(t) => Some(t),
            _ => None,
        }
    }
}

/// Canonical display and audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedTx {
    pub txid: String,
    pub signer: String,
    pub nonce: u64,
    pub actions: Vec<DecodedTxAction>,
    pub status: DecodedTxStatus,
    pub direction: DecodedTxDirection,
    pub network: Network,
    pub fee_info: DecodedFeeInfo,
    #[serde(default)]
    pub extra: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegacyTxType {
    NativeTransfer,
}

/// Flat single-transfer record consumed by older history views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedTxLegacy {
    pub tx_type: LegacyTxType,
    pub symbol: String,
    pub amount: String,
    pub value: String,
    pub network: Network,
    pub from_address: String,
    pub to_address: String,
    pub data: String,
    /// Not available for single-transfer archetypes; always `"0"`.
    pub total: String,
}
