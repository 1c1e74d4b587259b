//! Fee information.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fee candidates offered to the caller by `fetch_fee_info`.
///
/// `limit` and every entry of `prices` are decimal strings; `prices` is
/// ordered ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeInfo {
    pub native_symbol: String,
    pub native_decimals: u32,
    /// Fee asset symbol.
    pub symbol: String,
    /// Fee asset decimals.
    pub decimals: u32,
    pub limit: String,
    pub prices: Vec<String>,
    /// Index into `prices` used as the UI default.
    pub default_preset_index: usize,
}

impl FeeInfo {
    /// The price at `default_preset_index`, if the oracle returned any.
    pub fn default_price(&self) -> Option<&str> {
        self.prices.get(self.default_preset_index).map(String::as_str)
    }
}

/// The fee value chosen by the caller.
///
/// Arrives from the service layer as loosely-typed JSON, so both fields are
/// kept as raw values and type-checked when attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeInfoUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,
}

impl FeeInfoUnit {
    pub fn new(price: Option<&str>, limit: &str) -> Self {
        Self {
            price: price.map(|p| Value::String(p.to_string())),
            limit: Some(Value::String(limit.to_string())),
        }
    }
}

/// Fee fields as recorded on a decoded transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedFeeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

/// Where an encoded transaction sits in the fee pipeline.
///
/// `Priced` is never stored on the transaction itself: it is the caller
/// holding an unpriced `EncodedTx` together with a fetched `FeeInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeStage {
    Unpriced,
    Priced,
    Attached,
}
