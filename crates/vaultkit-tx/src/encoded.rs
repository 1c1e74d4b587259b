//! Chain-native encoded transactions.
//!
//! An [`EncodedTx`] is owned by the caller between pipeline steps and is
//! never mutated in place: every transform below takes `&self` and returns
//! a new value.

use crate::fee::FeeStage;
use crate::TxError;
use serde::{Deserialize, Serialize};
use vaultkit_types::ImplFamily;

/// Nonce written into the fee-estimation dry-run copy.
pub const SENTINEL_NONCE: u64 = 1;

/// Unit price written into the fee-estimation dry-run copy.
pub const SENTINEL_PRICE: &str = "1";

/// Starcoin transfer: nonce-based, gas price × gas limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedTxStc {
    pub from: String,
    pub to: String,
    /// Atomic units, decimal string.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<String>,
}

/// Algorand payment: no nonce, flat fee per fee unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedTxAlgo {
    pub from: String,
    pub to: String,
    /// Atomic units (microalgos), decimal string.
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_units: Option<String>,
}

/// Encoded transaction, tagged by implementation family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum EncodedTx {
    Stc(EncodedTxStc),
    Algo(EncodedTxAlgo),
}

impl EncodedTx {
    pub fn family(&self) -> ImplFamily {
        match self {
            EncodedTx::Stc(_) => ImplFamily::Stc,
            EncodedTx::Algo(_) => ImplFamily::Algo,
        }
    }

    pub fn from_address(&self) -> &str {
        match self {
            EncodedTx::Stc(tx) => &tx.from,
            EncodedTx::Algo(tx) => &tx.from,
        }
    }

    pub fn to_address(&self) -> &str {
        match self {
            EncodedTx::Stc(tx) => &tx.to,
            EncodedTx::Algo(tx) => &tx.to,
        }
    }

    /// Transferred value in atomic units.
    pub fn value(&self) -> &str {
        match self {
            EncodedTx::Stc(tx) => &tx.value,
            EncodedTx::Algo(tx) => &tx.amount,
        }
    }

    pub fn nonce(&self) -> Option<u64> {
        match self {
            EncodedTx::Stc(tx) => tx.nonce,
            EncodedTx::Algo(_) => None,
        }
    }

    /// Chain-native fee price per unit, if attached.
    pub fn fee_price(&self) -> Option<&str> {
        match self {
            EncodedTx::Stc(tx) => tx.gas_price.as_deref(),
            EncodedTx::Algo(tx) => tx.flat_fee.as_deref(),
        }
    }

    /// Fee limit (gas limit or fee units), if attached.
    pub fn fee_limit(&self) -> Option<&str> {
        match self {
            EncodedTx::Stc(tx) => tx.gas_limit.as_deref(),
            EncodedTx::Algo(tx) => tx.fee_units.as_deref(),
        }
    }

    pub fn fee_stage(&self) -> FeeStage {
        if self.fee_price().is_some() && self.fee_limit().is_some() {
            FeeStage::Attached
        } else {
            FeeStage::Unpriced
        }
    }

    /// Copy with a new transferred value.
    pub fn with_value(&self, value: String) -> Self {
        match self {
            EncodedTx::Stc(tx) => EncodedTx::Stc(EncodedTxStc { value, ..tx.clone() }),
            EncodedTx::Algo(tx) => EncodedTx::Algo(EncodedTxAlgo { amount: value, ..tx.clone() }),
        }
    }

    /// Copy with chain-native fee fields written.
    pub fn with_fee(&self, price: String, limit: String) -> Self {
        match self {
            EncodedTx::Stc(tx) => EncodedTx::Stc(EncodedTxStc {
                gas_price: Some(price),
                gas_limit: Some(limit),
                ..tx.clone()
            }),
            EncodedTx::Algo(tx) => EncodedTx::Algo(EncodedTxAlgo {
                flat_fee: Some(price),
                fee_units: Some(limit),
                ..tx.clone()
            }),
        }
    }

    /// Disposable copy used only to ask the engine for a fee limit.
    ///
    /// The nonce (where the family has one) is forced to `1` and the price
    /// to `"1"` so the engine does not look either of them up. The copy must
    /// never be signed or handed back to the caller; `self` is untouched.
    pub fn sentinel_copy(&self) -> Self {
        match self {
            EncodedTx::Stc(tx) => EncodedTx::Stc(EncodedTxStc {
                nonce: Some(SENTINEL_NONCE),
                gas_price: Some(SENTINEL_PRICE.to_string()),
                ..tx.clone()
            }),
            EncodedTx::Algo(tx) => EncodedTx::Algo(EncodedTxAlgo {
                flat_fee: Some(SENTINEL_PRICE.to_string()),
                ..tx.clone()
            }),
        }
    }

    pub fn as_stc(&self) -> Result<&EncodedTxStc, TxError> {
        match self {
            EncodedTx::Stc(tx) => Ok(tx),
            other => Err(TxError::FamilyMismatch {
                expected: ImplFamily::Stc,
                got: other.family(),
            }),
        }
    }

    pub fn as_algo(&self) -> Result<&EncodedTxAlgo, TxError> {
        match self {
            EncodedTx::Algo(tx) => Ok(tx),
            other => Err(TxError::FamilyMismatch {
                expected: ImplFamily::Algo,
                got: other.family(),
            }),
        }
    }
}
