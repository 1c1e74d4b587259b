//! Watch-only accounts.

use super::{Keyring, KeyringContext};
use crate::error::WalletError;
use async_trait::async_trait;
use log::warn;
use std::collections::BTreeMap;
use vaultkit_tx::{SignedTx, UnsignedTx};
use vaultkit_types::CustodyMode;

/// No key material. Asking this keyring for keys or a signature is a
/// caller bug and fails immediately.
pub struct KeyringWatching {
    ctx: KeyringContext,
}

impl KeyringWatching {
    pub fn new(ctx: KeyringContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn boxed(ctx: KeyringContext) -> Box<dyn Keyring> {
        Box::new(Self::new(ctx))
    }
}

#[async_trait]
impl Keyring for KeyringWatching {
    fn custody(&self) -> CustodyMode {
        CustodyMode::Watching
    }

    async fn get_private_keys(
        &self,
        _password: &str,
    ) -> Result<BTreeMap<String, Vec<u8>>, WalletError> {
        Err(WalletError::internal("watching account has no private keys"))
    }

    async fn sign_transaction(
        &self,
        _unsigned: &UnsignedTx,
        _password: &str,
    ) -> Result<SignedTx, WalletError> {
        warn!("refusing to sign with watching account {}", self.ctx.account_id);
        Err(WalletError::internal("watching account cannot sign transactions"))
    }

    async fn prepare_watching_address(&self, address: &str) -> Result<String, WalletError> {
        let validation = self
            .ctx
            .engine
            .verify_address(&self.ctx.network_id, address)
            .await?;
        match (validation.is_valid, validation.normalized_address) {
            (true, Some(normalized)) => Ok(normalized),
            (true, None) => Ok(address.to_string()),
            (false, _) => Err(WalletError::internal(format!("invalid address: {}", address))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::credential::MemoryCredentialStore;
    use vaultkit_types::DbAccount;

    fn keyring() -> KeyringWatching {
        let account = DbAccount {
            id: "watching--stc--0xab".into(),
            name: String::new(),
            address: "0xab".into(),
            pub_key: String::new(),
            path: String::new(),
        };
        KeyringWatching::new(context(account, MemoryCredentialStore::new()))
    }

    #[tokio::test]
    async fn test_fails_fast() {
        let kr = keyring();
        assert!(matches!(kr.get_private_keys("pw").await, Err(WalletError::Internal(_))));
        assert!(matches!(
            kr.sign_transaction(&unsigned(), "pw").await,
            Err(WalletError::Internal(_))
        ));
    }

    #[tokio::test]
    async fn test_prepare_watching_address() {
        let kr = keyring();
        assert_eq!(kr.prepare_watching_address("0xABCD").await.unwrap(), "0xabcd");
        assert!(matches!(
            kr.prepare_watching_address("nope").await,
            Err(WalletError::Internal(_))
        ));
    }
}
