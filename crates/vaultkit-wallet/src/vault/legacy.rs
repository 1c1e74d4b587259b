//! Flat single-transfer view of a decoded transaction.

use crate::error::WalletError;
use vaultkit_tx::{DecodedTx, DecodedTxAction, DecodedTxLegacy, LegacyTxType};

pub(crate) fn to_legacy(decoded: &DecodedTx) -> Result<DecodedTxLegacy, WalletError> {
    let transfer = decoded
        .actions
        .first()
        .and_then(DecodedTxAction::as_native_transfer)
        .ok_or_else(|| WalletError::internal("Incorrect decodedTx."))?;

    Ok(DecodedTxLegacy {
        tx_type: LegacyTxType::NativeTransfer,
        symbol: decoded.network.symbol.clone(),
        amount: transfer.amount.clone(),
        value: transfer.amount_value.clone(),
        network: decoded.network.clone(),
        from_address: transfer.from.clone(),
        to_address: transfer.to.clone(),
        data: String::new(),
        total: "0".to_string(),
    })
}
