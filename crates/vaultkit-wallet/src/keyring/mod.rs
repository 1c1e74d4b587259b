//! Keyring strategies.
//!
//! A keyring supplies the signing and export capability for one custody
//! mode. Exactly one keyring is chosen per vault, from the archetype's
//! [`KeyringMap`], and it never changes afterwards.

pub mod derivation;
mod hardware;
mod hd;
mod imported;
mod watching;

pub use hardware::KeyringHardware;
pub use hd::KeyringHd;
pub use imported::KeyringImported;
pub use watching::KeyringWatching;

use crate::credential::CredentialStore;
use crate::encryption::KeyCipher;
use crate::error::WalletError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use vaultkit_rpc::Engine;
use vaultkit_tx::{SignedTx, UnsignedTx};
use vaultkit_types::CustodyMode;

/// Chain signer: turns an unsigned transaction plus a raw private key into
/// a signed transaction.
#[async_trait]
pub trait TxSigner: Send + Sync {
    async fn sign(
        &self,
        unsigned: &UnsignedTx,
        private_key: &[u8],
    ) -> Result<SignedTx, WalletError>;
}

/// An open session with a hardware device.
#[async_trait]
pub trait HardwareSession: Send + Sync {
    async fn sign(&self, path: &str, unsigned: &UnsignedTx) -> Result<SignedTx, WalletError>;
}

/// Capability set every custody mode exposes.
#[async_trait]
pub trait Keyring: Send + Sync {
    fn custody(&self) -> CustodyMode;

    /// Encrypted private keys, keyed by derivation path (`""` when the
    /// account has no path).
    async fn get_private_keys(
        &self,
        password: &str,
    ) -> Result<BTreeMap<String, Vec<u8>>, WalletError>;

    async fn sign_transaction(
        &self,
        unsigned: &UnsignedTx,
        password: &str,
    ) -> Result<SignedTx, WalletError>;

    /// Validate and normalize an address to be tracked watch-only.
    async fn prepare_watching_address(&self, address: &str) -> Result<String, WalletError> {
        let _ = address;
        Err(WalletError::internal(format!(
            "{} keyring cannot track watching addresses",
            self.custody()
        )))
    }
}

/// Everything a keyring constructor may need.
#[derive(Clone)]
pub struct KeyringContext {
    pub network_id: String,
    pub account_id: String,
    pub engine: Arc<dyn Engine>,
    pub credentials: Arc<dyn CredentialStore>,
    pub cipher: Arc<dyn KeyCipher>,
    pub signer: Option<Arc<dyn TxSigner>>,
    pub hardware: Option<Arc<dyn HardwareSession>>,
}

impl KeyringContext {
    pub(crate) fn signer(&self) -> Result<Arc<dyn TxSigner>, WalletError> {
        self.signer
            .clone()
            .ok_or_else(|| {
                WalletError::not_implemented(format!(
                    "no signer configured for {}",
                    self.network_id
                ))
            })
    }
}

pub type KeyringCtor = fn(KeyringContext) -> Box<dyn Keyring>;

/// Custody mode → keyring constructor, one static table per archetype.
#[derive(Clone, Copy)]
pub struct KeyringMap {
    pub hd: Option<KeyringCtor>,
    pub hw: Option<KeyringCtor>,
    pub imported: Option<KeyringCtor>,
    pub watching: Option<KeyringCtor>,
}

impl KeyringMap {
    /// Table with all four custody modes available.
    pub const ALL: KeyringMap = KeyringMap {
        hd: Some(KeyringHd::boxed),
        hw: Some(KeyringHardware::boxed),
        imported: Some(KeyringImported::boxed),
        watching: Some(KeyringWatching::boxed),
    };

    pub fn ctor(&self, mode: CustodyMode) -> Option<KeyringCtor> {
        match mode {
            CustodyMode::Hd => self.hd,
            CustodyMode::Hardware => self.hw,
            CustodyMode::Imported => self.imported,
            CustodyMode::Watching => self.watching,
        }
    }

    /// Build the keyring for `ctx.account_id`.
    pub fn select(&self, ctx: KeyringContext) -> Result<Box<dyn Keyring>, WalletError> {
        let mode = CustodyMode::from_account_id(&ctx.account_id).ok_or_else(|| {
            WalletError::internal(format!("Unknown account type: {}", ctx.account_id))
        })?;
        let ctor = self.ctor(mode).ok_or_else(|| {
            WalletError::not_implemented(format!("{} keyring on {}", mode, ctx.network_id))
        })?;
        log::debug!("selected {} keyring for {}", mode, ctx.account_id);
        Ok(ctor(ctx))
    }
}
