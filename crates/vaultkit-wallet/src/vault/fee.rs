//! Fee pipeline helpers shared by every archetype.

use crate::error::WalletError;
use serde_json::Value;
use vaultkit_tx::{EncodedTx, FeeInfo, FeeInfoUnit, UnsignedTx};
use vaultkit_types::amount::shift_decimal;
use vaultkit_types::Network;

/// Assemble the fee candidates from the network, the oracle prices and the
/// dry-run transaction's fee limit.
pub(crate) fn fee_info(network: &Network, prices: Vec<String>, dry_run: &UnsignedTx) -> FeeInfo {
    FeeInfo {
        native_symbol: network.symbol.clone(),
        native_decimals: network.decimals,
        symbol: network.fee_symbol.clone(),
        decimals: network.fee_decimals,
        limit: dry_run.fee_limit.unwrap_or(0).to_string(),
        prices,
        default_preset_index: 0,
    }
}

/// Write the chosen fee into a copy of `encoded`.
///
/// A caller price is in display units and is converted into chain units with
/// `fee_decimals`. Without one, `min_price` is used as is: it is already in
/// chain units. The limit is stored verbatim.
pub(crate) fn attach(
    encoded: &EncodedTx,
    value: &FeeInfoUnit,
    fee_decimals: u32,
    min_price: &str,
) -> Result<EncodedTx, WalletError> {
    let chain_price = match &value.price {
        None | Some(Value::Null) => min_price.to_string(),
        Some(Value::String(price)) => shift_decimal(price, fee_decimals as i32)?,
        Some(_) => return Err(WalletError::internal("Invalid gas price.")),
    };
    let limit = match &value.limit {
        Some(Value::String(limit)) => limit.clone(),
        _ => return Err(WalletError::internal("Invalid fee limit")),
    };

    Ok(encoded.with_fee(chain_price, limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vaultkit_tx::{EncodedTxStc, FeeStage};

    fn tx() -> EncodedTx {
        EncodedTx::Stc(EncodedTxStc {
            from: "0xaa".into(),
            to: "0xbb".into(),
            value: "1".into(),
            nonce: None,
            gas_price: None,
            gas_limit: None,
        })
    }

    #[test]
    fn test_default_price() {
        let out = attach(&tx(), &FeeInfoUnit::new(None, "21000"), 9, "1").unwrap();
        assert_eq!(out.fee_price(), Some("1"));
        assert_eq!(out.fee_limit(), Some("21000"));
        assert_eq!(out.fee_stage(), FeeStage::Attached);
    }

    #[test]
    fn test_default_price_not_shifted() {
        let out = attach(&tx(), &FeeInfoUnit::new(None, "1"), 6, "1000").unwrap();
        assert_eq!(out.fee_price(), Some("1000"));
    }

    #[test]
    fn test_null_price_is_default() {
        let unit = FeeInfoUnit {
            price: Some(Value::Null),
            limit: Some(json!("100")),
        };
        assert_eq!(attach(&tx(), &unit, 9, "1").unwrap().fee_price(), Some("1"));
    }

    #[test]
    fn test_price_shifted() {
        let out = attach(&tx(), &FeeInfoUnit::new(Some("0.00000002"), "5"), 9, "1").unwrap();
        assert_eq!(out.fee_price(), Some("20"));
    }

    #[test]
    fn test_non_string_values_rejected() {
        let bad_price = FeeInfoUnit {
            price: Some(json!(5)),
            limit: Some(json!("21000")),
        };
        assert!(matches!(
            attach(&tx(), &bad_price, 9, "1"),
            Err(WalletError::Internal(msg)) if msg == "Invalid gas price."
        ));

        let bad_limit = FeeInfoUnit {
            price: None,
            limit: Some(json!(21000)),
        };
        assert!(matches!(
            attach(&tx(), &bad_limit, 9, "1"),
            Err(WalletError::Internal(msg)) if msg == "Invalid fee limit"
        ));

        let no_limit = FeeInfoUnit::default();
        assert!(matches!(attach(&tx(), &no_limit, 9, "1"), Err(WalletError::Internal(_))));
    }

    #[test]
    fn test_attach_is_idempotent() {
        let unit = FeeInfoUnit::new(Some("0.000000005"), "30000");
        let once = attach(&tx(), &unit, 9, "1").unwrap();
        let twice = attach(&once, &unit, 9, "1").unwrap();
        assert_eq!(once, twice);
    }
}
