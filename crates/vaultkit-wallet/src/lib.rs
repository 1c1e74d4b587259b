//! Vaultkit wallet core.
//!
//! Provides the per-chain vault lifecycle, keyring strategies for the four
//! custody modes, the credential store, and password-based key encryption.

pub mod credential;
pub mod encryption;
pub mod error;
pub mod keyring;
pub mod vault;

pub use credential::{Credential, CredentialStore, MemoryCredentialStore};
pub use encryption::{CipherParams, KeyCipher, PasswordCipher};
pub use error::WalletError;
pub use keyring::{HardwareSession, Keyring, KeyringContext, KeyringMap, TxSigner};
pub use vault::{
    create_vault, AlgoVault, ApproveInfo, AttachFeeInfoParams, EncodedTxUpdatePayload,
    EncodedTxUpdateType, StcVault, TransferInfo, UserCreateInputCategory, Vault, VaultContext,
    VaultDeps, VaultSettings,
};
