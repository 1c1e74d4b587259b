//! Wallet error types.

use thiserror::Error;
use vaultkit_rpc::RpcError;
use vaultkit_tx::TxError;
use vaultkit_types::AmountError;

#[derive(Debug, Error)]
pub enum WalletError {
    /// The capability does not exist for this chain archetype.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// An invariant of this layer was violated by the caller.
    #[error("internal error: {0}")]
    Internal(String),

    /// Engine failures, passed through unchanged.
    #[error(transparent)]
    Provider(#[from] RpcError),

    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("transaction error: {0}")]
    Tx(#[from] TxError),

    #[error("unsupported network: {0}")]
    UnsupportedNetwork(String),

    #[error("credential not found: {0}")]
    CredentialNotFound(String),

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("encryption error: {0}")]
    Encryption(String),

    #[error("decryption failed (wrong password or corrupted data)")]
    DecryptionFailed,

    #[error("invalid credential blob: {0}")]
    InvalidBlob(String),
}

impl WalletError {
    pub fn internal(msg: impl Into<String>) -> Self {
        WalletError::Internal(msg.into())
    }

    pub fn not_implemented(msg: impl Into<String>) -> Self {
        WalletError::NotImplemented(msg.into())
    }
}
