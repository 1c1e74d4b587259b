//! Hardware-delegated accounts.

use super::{HardwareSession, Keyring, KeyringContext};
use crate::error::WalletError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use vaultkit_tx::{SignedTx, UnsignedTx};
use vaultkit_types::CustodyMode;

/// Keys never leave the device; signing is forwarded along the account path.
pub struct KeyringHardware {
    ctx: KeyringContext,
}

impl KeyringHardware {
    pub fn new(ctx: KeyringContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn boxed(ctx: KeyringContext) -> Box<dyn Keyring> {
        Box::new(Self::new(ctx))
    }

    fn session(&self) -> Result<Arc<dyn HardwareSession>, WalletError> {
        self.ctx
            .hardware
            .clone()
            .ok_or_else(|| WalletError::not_implemented("no hardware session connected"))
    }
}

#[async_trait]
impl Keyring for KeyringHardware {
    fn custody(&self) -> CustodyMode {
        CustodyMode::Hardware
    }

    async fn get_private_keys(
        &self,
        _password: &str,
    ) -> Result<BTreeMap<String, Vec<u8>>, WalletError> {
        Err(WalletError::internal("hardware keyring does not hold private keys"))
    }

    async fn sign_transaction(
        &self,
        unsigned: &UnsignedTx,
        _password: &str,
    ) -> Result<SignedTx, WalletError> {
        let session = self.session()?;
        let account = self.ctx.engine.get_db_account(&self.ctx.account_id).await?;
        session.sign(&account.path, unsigned).await
    }
}
