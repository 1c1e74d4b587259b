//! Seed-derived accounts.

use super::derivation::derive_path;
use super::{Keyring, KeyringContext};
use crate::credential::Credential;
use crate::error::WalletError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use vaultkit_tx::{SignedTx, UnsignedTx};
use vaultkit_types::CustodyMode;
use zeroize::Zeroizing;

/// Keyring for accounts derived from the wallet seed along `account.path`.
pub struct KeyringHd {
    ctx: KeyringContext,
}

impl KeyringHd {
    pub fn new(ctx: KeyringContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn boxed(ctx: KeyringContext) -> Box<dyn Keyring> {
        Box::new(Self::new(ctx))
    }

    /// Decrypt the wallet seed and derive this account's key.
    async fn derive(&self, password: &str) -> Result<(String, Zeroizing<Vec<u8>>), WalletError> {
        let account = self.ctx.engine.get_db_account(&self.ctx.account_id).await?;
        let seed = match self.ctx.credentials.get(account.wallet_id()).await? {
            Credential::Hd { seed } => seed,
            Credential::Imported { .. } => {
                return Err(WalletError::internal(format!(
                    "credential {} is not a seed",
                    account.wallet_id()
                )))
            }
        };
        let seed = Zeroizing::new(self.ctx.cipher.decrypt(password, &seed)?);
        let key = derive_path(&seed, &account.path)?;
        Ok((account.path, Zeroizing::new(key.private_key().to_vec())))
    }
}

#[async_trait]
impl Keyring for KeyringHd {
    fn custody(&self) -> CustodyMode {
        CustodyMode::Hd
    }

    async fn get_private_keys(
        &self,
        password: &str,
    ) -> Result<BTreeMap<String, Vec<u8>>, WalletError> {
        let (path, key) = self.derive(password).await?;
        let encrypted = self.ctx.cipher.encrypt(password, &key)?;
        Ok(BTreeMap::from([(path, encrypted)]))
    }

    async fn sign_transaction(
        &self,
        unsigned: &UnsignedTx,
        password: &str,
    ) -> Result<SignedTx, WalletError> {
        let signer = self.ctx.signer()?;
        let (_, key) = self.derive(password).await?;
        signer.sign(unsigned, &key).await
    }
}
