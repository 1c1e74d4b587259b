//! Accounts backed by an imported raw private key.

use super::{Keyring, KeyringContext};
use crate::credential::Credential;
use crate::error::WalletError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use vaultkit_tx::{SignedTx, UnsignedTx};
use vaultkit_types::CustodyMode;
use zeroize::Zeroizing;

pub struct KeyringImported {
    ctx: KeyringContext,
}

impl KeyringImported {
    pub fn new(ctx: KeyringContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn boxed(ctx: KeyringContext) -> Box<dyn Keyring> {
        Box::new(Self::new(ctx))
    }

    async fn encrypted_key(&self) -> Result<Vec<u8>, WalletError> {
        match self.ctx.credentials.get(&self.ctx.account_id).await? {
            Credential::Imported { private_key } => Ok(private_key),
            Credential::Hd { .. } => Err(WalletError::internal(format!(
                "credential {} is not a private key",
                self.ctx.account_id
            ))),
        }
    }
}

#[async_trait]
impl Keyring for KeyringImported {
    fn custody(&self) -> CustodyMode {
        CustodyMode::Imported
    }

    /// The stored key, still encrypted, under the empty path.
    async fn get_private_keys(
        &self,
        _password: &str,
    ) -> Result<BTreeMap<String, Vec<u8>>, WalletError> {
        let encrypted = self.encrypted_key().await?;
        Ok(BTreeMap::from([(String::new(), encrypted)]))
    }

    async fn sign_transaction(
        &self,
        unsigned: &UnsignedTx,
        password: &str,
    ) -> Result<SignedTx, WalletError> {
        let signer = self.ctx.signer()?;
        let encrypted = self.encrypted_key().await?;
        let key = Zeroizing::new(self.ctx.cipher.decrypt(password, &encrypted)?);
        signer.sign(unsigned, &key).await
    }
}
