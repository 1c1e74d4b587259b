//! Stored credentials.
//!
//! A credential is the encrypted secret behind an account: the wallet seed
//! for HD accounts (keyed by wallet id) or the raw private key for imported
//! accounts (keyed by account id). Both are written once at import or
//! derivation time and only ever read afterwards.

use crate::error::WalletError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Encrypted secret material, as produced by a [`KeyCipher`](crate::encryption::KeyCipher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Credential {
    Hd {
        #[serde(with = "hex::serde")]
        seed: Vec<u8>,
    },
    Imported {
        #[serde(rename = "privateKey", with = "hex::serde")]
        private_key: Vec<u8>,
    },
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Credential, WalletError>;

    async fn put(&self, id: &str, credential: Credential) -> Result<(), WalletError>;
}

/// Process-local credential store.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<String, Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: HashMap<String, Credential>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, id: &str) -> Result<Credential, WalletError> {
        self.entries
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| WalletError::CredentialNotFound(id.to_string()))
    }

    async fn put(&self, id: &str, credential: Credential) -> Result<(), WalletError> {
        self.entries
            .write()
            .await
            .insert(id.to_string(), credential);
        Ok(())
    }
}
