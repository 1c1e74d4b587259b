//! Network metadata and implementation families.

use serde::{Deserialize, Serialize};

/// Separator between the implementation family and the chain id in a
/// network id (`"stc--1"`, `"algo--4160"`).
pub const NETWORK_ID_SEPARATOR: &str = "--";

/// Chain implementation family. Each family has exactly one vault archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplFamily {
    /// Starcoin: account model with nonce, gas price × gas limit fees.
    Stc,
    /// Algorand: account model without nonce, flat per-transaction fee.
    Algo,
}

impl ImplFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImplFamily::Stc => "stc",
            ImplFamily::Algo => "algo",
        }
    }

    /// Resolve the family from a network id such as `"stc--1"`.
    pub fn from_network_id(network_id: &str) -> Option<Self> {
        let family = network_id
            .split_once(NETWORK_ID_SEPARATOR)
            .map_or(network_id, |(family, _)| family);
        match family {
            "stc" => Some(ImplFamily::Stc),
            "algo" => Some(ImplFamily::Algo),
            _ => None,
        }
    }
}

impl std::fmt::Display for ImplFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable network description, loaded by id from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub name: String,
    /// Native asset symbol.
    pub symbol: String,
    /// Native asset decimal places.
    pub decimals: u32,
    /// Symbol of the asset fees are quoted in.
    pub fee_symbol: String,
    /// Decimal places of the fee asset.
    pub fee_decimals: u32,
}

/// Token metadata as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub network_id: String,
    /// Empty for the native asset.
    #[serde(default)]
    pub token_id_on_network: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u32,
}
