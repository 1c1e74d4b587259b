//! Canonical transaction model.
//!
//! Four shapes move through the vault pipeline:
//!
//! - [`EncodedTx`]: chain-native, not yet signed. One payload per family.
//! - [`UnsignedTx`]: canonical signer input, built only by the engine.
//! - [`DecodedTx`]: chain-agnostic record for display and audit.
//! - [`FeeInfo`]: fee candidates offered to the caller.

pub mod decoded;
pub mod encoded;
pub mod fee;
pub mod serde_amount;
pub mod unsigned;

pub use decoded::{
    DecodedTx, DecodedTxAction, DecodedTxDirection, DecodedTxLegacy, DecodedTxStatus,
    LegacyTxType, NativeTransferAction, TokenApproveAction, TokenTransferAction,
};
pub use encoded::{EncodedTx, EncodedTxAlgo, EncodedTxStc};
pub use fee::{DecodedFeeInfo, FeeInfo, FeeInfoUnit, FeeStage};
pub use unsigned::{SignedTx, TxInput, TxOutput, UnsignedTx, UnsignedTxRequest};

use thiserror::Error;
use vaultkit_types::{AmountError, ImplFamily};

#[derive(Debug, Error)]
pub enum TxError {
    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("encoded transaction belongs to {got}, expected {expected}")]
    FamilyMismatch { expected: ImplFamily, got: ImplFamily },
}
