//! Accounts and custody modes.
//!
//! An account id carries its custody mode as a string prefix. That prefix is
//! parsed here and nowhere else.

use serde::{Deserialize, Serialize};

/// Which keyring variant controls an account's key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustodyMode {
    /// Keys derived from a wallet seed along a derivation path.
    Hd,
    /// Keys held by an external hardware device.
    Hardware,
    /// A raw private key imported by the user.
    Imported,
    /// Address only; no key material at all.
    Watching,
}

impl CustodyMode {
    /// Account id prefixes, in match order.
    const PREFIXES: [(&'static str, CustodyMode); 4] = [
        ("hd-", CustodyMode::Hd),
        ("hw-", CustodyMode::Hardware),
        ("imported", CustodyMode::Imported),
        ("watching-", CustodyMode::Watching),
    ];

    /// Determine the custody mode from an account id prefix.
    pub fn from_account_id(account_id: &str) -> Option<Self> {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| account_id.starts_with(prefix))
            .map(|(_, mode)| *mode)
    }

    /// Only locally held secrets can be exported.
    pub fn can_export_credential(&self) -> bool {
        matches!(self, CustodyMode::Hd | CustodyMode::Imported)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CustodyMode::Hd => "hd",
            CustodyMode::Hardware => "hw",
            CustodyMode::Imported => "imported",
            CustodyMode::Watching => "watching",
        }
    }
}

impl std::fmt::Display for CustodyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account record as stored by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbAccount {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub address: String,
    /// Hex public key; empty for watching accounts.
    #[serde(default)]
    pub pub_key: String,
    /// Derivation path; empty for imported and watching accounts.
    #[serde(default)]
    pub path: String,
}

impl DbAccount {
    /// Id of the wallet owning this account (`"hd-1--m/44'/..."` → `"hd-1"`).
    pub fn wallet_id(&self) -> &str {
        self.id
            .split_once("--")
            .map_or(self.id.as_str(), |(wallet, _)| wallet)
    }
}
