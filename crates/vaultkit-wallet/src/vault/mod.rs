//! The vault: one transaction lifecycle over many chains.
//!
//! A vault is bound to one network and one account. It turns a transfer
//! intent into a chain-native [`EncodedTx`], prices it, attaches the chosen
//! fee, hands the result to the engine for assembly and finally decodes it
//! back into a chain-agnostic [`DecodedTx`].
//!
//! ```text
//! build → update → fetch_fee_info → attach fee → build unsigned → sign
//!                                                 └──────────→ decode
//! ```
//!
//! The lifecycle steps that behave the same on every chain are default
//! methods of [`Vault`]; each archetype ([`StcVault`], [`AlgoVault`]) only
//! supplies its encoded shape, its unsigned-tx request and its address
//! comparison.

pub mod algo;
pub mod factory;
mod fee;
mod legacy;
pub mod settings;
pub mod stc;

pub use algo::AlgoVault;
pub use factory::create_vault;
pub use settings::VaultSettings;
pub use stc::StcVault;

use crate::credential::CredentialStore;
use crate::encryption::KeyCipher;
use crate::error::WalletError;
use crate::keyring::{HardwareSession, Keyring, KeyringContext, KeyringMap, TxSigner};
use async_trait::async_trait;
use log::{debug, warn};
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock};
use vaultkit_rpc::Engine;
use vaultkit_tx::{
    DecodedFeeInfo, DecodedTx, DecodedTxAction, DecodedTxDirection, DecodedTxLegacy,
    DecodedTxStatus, EncodedTx, FeeInfo, FeeInfoUnit, NativeTransferAction, SignedTx, TxInput,
    TxOutput, UnsignedTx, UnsignedTxRequest,
};
use vaultkit_types::amount::{from_atomic, parse_atomic, to_atomic};
use vaultkit_types::{CustodyMode, DbAccount, Network, TokenInfo};
use zeroize::Zeroizing;

/// Private keys are 32 bytes of hex, optionally `0x`-prefixed.
static PRIVATE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^(0x)?[0-9a-zA-Z]{64}$").expect("private key pattern"));

// ─── Inputs ─────────────────────────────────────────────────────────────────

/// A transfer intent in display units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferInfo {
    pub from: String,
    pub to: String,
    pub amount: String,
    /// Token id on the network; `None` or empty for the native asset.
    pub token: Option<String>,
}

impl TransferInfo {
    pub fn native(
        from: impl Into<String>,
        to: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount: amount.into(),
            token: None,
        }
    }

    /// Whether a non-native token was requested.
    pub fn is_token(&self) -> bool {
        self.token.as_deref().map_or(false, |t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveInfo {
    pub from: String,
    pub token: String,
    pub spender: String,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedTxUpdateType {
    Transfer,
    TokenApprove,
    Speedup,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedTxUpdatePayload {
    Transfer { amount: String },
    TokenApprove { amount: String },
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttachFeeInfoParams {
    pub encoded_tx: EncodedTx,
    pub fee_info_value: FeeInfoUnit,
}

/// What a user-typed string could be imported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserCreateInputCategory {
    PrivateKey,
    Address,
}

// ─── Context ────────────────────────────────────────────────────────────────

/// Shared collaborators handed to every vault.
#[derive(Clone)]
pub struct VaultDeps {
    pub engine: Arc<dyn Engine>,
    pub credentials: Arc<dyn CredentialStore>,
    pub cipher: Arc<dyn KeyCipher>,
    pub signer: Option<Arc<dyn TxSigner>>,
    pub hardware: Option<Arc<dyn HardwareSession>>,
}

/// Per-vault state: the binding to one network and account plus the
/// keyring selected for that account.
pub struct VaultContext {
    pub network_id: String,
    pub account_id: String,
    pub engine: Arc<dyn Engine>,
    pub cipher: Arc<dyn KeyCipher>,
    keyring: Box<dyn Keyring>,
}

impl VaultContext {
    /// Bind to `network_id`/`account_id`, selecting the keyring from `keyrings`.
    pub fn new(
        deps: &VaultDeps,
        network_id: &str,
        account_id: &str,
        keyrings: &KeyringMap,
    ) -> Result<Self, WalletError> {
        let keyring = keyrings.select(KeyringContext {
            network_id: network_id.to_string(),
            account_id: account_id.to_string(),
            engine: deps.engine.clone(),
            credentials: deps.credentials.clone(),
            cipher: deps.cipher.clone(),
            signer: deps.signer.clone(),
            hardware: deps.hardware.clone(),
        })?;
        Ok(Self {
            network_id: network_id.to_string(),
            account_id: account_id.to_string(),
            engine: deps.engine.clone(),
            cipher: deps.cipher.clone(),
            keyring,
        })
    }

    pub fn keyring(&self) -> &dyn Keyring {
        self.keyring.as_ref()
    }

    pub async fn network(&self) -> Result<Network, WalletError> {
        Ok(self.engine.get_network(&self.network_id).await?)
    }

    pub async fn db_account(&self) -> Result<DbAccount, WalletError> {
        Ok(self.engine.get_db_account(&self.account_id).await?)
    }

    pub async fn native_token(&self) -> Result<TokenInfo, WalletError> {
        Ok(self.engine.get_native_token_info(&self.network_id).await?)
    }

    async fn gas_prices(&self) -> Result<Vec<String>, WalletError> {
        Ok(self.engine.get_gas_price(&self.network_id).await?)
    }

    /// Transfer amount in display units → atomic units of the native asset.
    pub(crate) async fn native_value(&self, amount: &str) -> Result<String, WalletError> {
        let network = self.network().await?;
        Ok(to_atomic(amount, network.decimals)?.to_string())
    }

    /// Hand a single-input/single-output request for `encoded` to the
    /// engine. `payload` is the archetype's chain-specific part.
    pub(crate) async fn build_unsigned(
        &self,
        encoded: &EncodedTx,
        payload: Value,
    ) -> Result<UnsignedTx, WalletError> {
        let account = self.db_account().await?;
        let value = parse_atomic(encoded.value())?;

        let request = UnsignedTxRequest {
            inputs: vec![TxInput {
                address: account.address,
                value,
                public_key: account.pub_key,
            }],
            outputs: vec![TxOutput {
                address: encoded.to_address().to_string(),
                value,
            }],
            fee_price_per_unit: parse_atomic(encoded.fee_price().unwrap_or("1"))?,
            fee_limit: encoded.fee_limit().map(parse_atomic).transpose()?,
            nonce: encoded.nonce(),
            payload,
        };

        let unsigned = self
            .engine
            .build_unsigned_tx(&self.network_id, request)
            .await?;
        debug!(
            "built unsigned tx on {}: price={} limit={:?} nonce={:?}",
            self.network_id, unsigned.fee_price_per_unit, unsigned.fee_limit, unsigned.nonce
        );
        Ok(unsigned)
    }

    /// Decode a single native transfer.
    pub(crate) async fn decode_native_transfer<F>(
        &self,
        encoded: &EncodedTx,
        addresses_equal: F,
        extra: Option<Value>,
    ) -> Result<DecodedTx, WalletError>
    where
        F: Fn(&str, &str) -> bool,
    {
        let (network, account, token) =
            tokio::try_join!(self.network(), self.db_account(), self.native_token())?;

        let direction = DecodedTxDirection::derive(
            encoded.from_address(),
            encoded.to_address(),
            &account.address,
            addresses_equal,
        );
        let transfer = NativeTransferAction {
            token_info: token,
            from: encoded.from_address().to_string(),
            to: encoded.to_address().to_string(),
            amount: from_atomic(encoded.value(), network.decimals)?,
            amount_value: encoded.value().to_string(),
            extra: None,
        };

        Ok(DecodedTx {
            txid: String::new(),
            signer: account.address,
            nonce: encoded.nonce().unwrap_or(0),
            actions: vec![DecodedTxAction::NativeTransfer(transfer)],
            status: DecodedTxStatus::Pending,
            direction,
            network,
            fee_info: DecodedFeeInfo {
                price: encoded.fee_price().map(str::to_string),
                limit: encoded.fee_limit().map(str::to_string),
            },
            extra,
        })
    }
}

// ─── Vault ──────────────────────────────────────────────────────────────────

#[async_trait]
pub trait Vault: Send + Sync {
    fn context(&self) -> &VaultContext;

    fn settings(&self) -> &'static VaultSettings;

    /// The chain's notion of "same address".
    fn addresses_equal(&self, a: &str, b: &str) -> bool;

    fn network_id(&self) -> &str {
        &self.context().network_id
    }

    fn account_id(&self) -> &str {
        &self.context().account_id
    }

    fn custody_mode(&self) -> CustodyMode {
        self.context().keyring().custody()
    }

    async fn build_encoded_tx_from_transfer(
        &self,
        transfer: TransferInfo,
    ) -> Result<EncodedTx, WalletError>;

    async fn build_encoded_tx_from_approve(
        &self,
        _approve: ApproveInfo,
    ) -> Result<EncodedTx, WalletError> {
        Err(WalletError::not_implemented("build_encoded_tx_from_approve"))
    }

    async fn update_encoded_tx_token_approve(
        &self,
        _encoded: &EncodedTx,
        _amount: &str,
    ) -> Result<EncodedTx, WalletError> {
        Err(WalletError::not_implemented("update_encoded_tx_token_approve"))
    }

    /// Apply a typed update, returning a new transaction. Only transfer
    /// updates change anything; every other update type is a no-op.
    async fn update_encoded_tx(
        &self,
        encoded: &EncodedTx,
        payload: EncodedTxUpdatePayload,
        update_type: EncodedTxUpdateType,
    ) -> Result<EncodedTx, WalletError> {
        match (update_type, payload) {
            (EncodedTxUpdateType::Transfer, EncodedTxUpdatePayload::Transfer { amount }) => {
                let value = self.context().native_value(&amount).await?;
                Ok(encoded.with_value(value))
            }
            (EncodedTxUpdateType::Transfer, other) => Err(WalletError::internal(format!(
                "transfer update needs a transfer payload, got {:?}",
                other
            ))),
            _ => Ok(encoded.clone()),
        }
    }

    async fn build_unsigned_tx_from_encoded_tx(
        &self,
        encoded: &EncodedTx,
    ) -> Result<UnsignedTx, WalletError>;

    /// Fee candidates for `encoded`.
    ///
    /// The fee limit comes from a dry-run build of a sentinel copy, so the
    /// engine never has to look up a nonce or a price for it.
    async fn fetch_fee_info(&self, encoded: &EncodedTx) -> Result<FeeInfo, WalletError> {
        let ctx = self.context();
        let sentinel = encoded.sentinel_copy();
        let (network, prices, dry_run) = tokio::try_join!(
            ctx.network(),
            ctx.gas_prices(),
            self.build_unsigned_tx_from_encoded_tx(&sentinel),
        )?;

        let info = fee::fee_info(&network, prices, &dry_run);
        debug!(
            "fee info for {}: limit={} prices={:?}",
            ctx.network_id, info.limit, info.prices
        );
        Ok(info)
    }

    async fn attach_fee_info_to_encoded_tx(
        &self,
        params: AttachFeeInfoParams,
    ) -> Result<EncodedTx, WalletError> {
        let network = self.context().network().await?;
        fee::attach(
            &params.encoded_tx,
            &params.fee_info_value,
            network.fee_decimals,
            self.settings().min_fee_price,
        )
    }

    async fn decode_tx(&self, encoded: &EncodedTx) -> Result<DecodedTx, WalletError>;

    async fn decoded_tx_to_legacy(
        &self,
        decoded: &DecodedTx,
    ) -> Result<DecodedTxLegacy, WalletError> {
        legacy::to_legacy(decoded)
    }

    /// Sign with the account's keyring. Consumes the unsigned transaction.
    async fn sign_transaction(
        &self,
        unsigned: UnsignedTx,
        password: &str,
    ) -> Result<SignedTx, WalletError> {
        self.context().keyring().sign_transaction(&unsigned, password).await
    }

    /// The account's raw private key as `0x`-prefixed lowercase hex.
    async fn get_exported_credential(&self, password: &str) -> Result<String, WalletError> {
        let ctx = self.context();
        let account = ctx.db_account().await?;
        let exportable = CustodyMode::from_account_id(&account.id)
            .map_or(false, |mode| mode.can_export_credential());
        if !exportable {
            warn!("credential export refused for {}", account.id);
            return Err(WalletError::internal(
                "Only credential of HD or imported accounts can be exported",
            ));
        }

        let keys = ctx.keyring().get_private_keys(password).await?;
        let encrypted = keys
            .into_values()
            .next()
            .ok_or_else(|| WalletError::CredentialNotFound(account.id.clone()))?;
        let key = Zeroizing::new(ctx.cipher.decrypt(password, &encrypted)?);
        Ok(format!("0x{}", hex::encode(&key[..])))
    }

    /// Classify what a user-typed `input` could be imported as.
    async fn guess_user_create_input(
        &self,
        input: &str,
    ) -> Result<BTreeSet<UserCreateInputCategory>, WalletError> {
        let settings = self.settings();
        let mut guesses = BTreeSet::new();

        if settings.imported_account_enabled && PRIVATE_KEY.is_match(input) {
            guesses.insert(UserCreateInputCategory::PrivateKey);
        }
        if settings.watching_account_enabled {
            let ctx = self.context();
            if ctx.engine.verify_address(&ctx.network_id, input).await?.is_valid {
                guesses.insert(UserCreateInputCategory::Address);
            }
        }
        Ok(guesses)
    }

    async fn fetch_token_infos(
        &self,
        _addresses: &[String],
    ) -> Result<Vec<Option<TokenInfo>>, WalletError> {
        Err(WalletError::not_implemented("fetch_token_infos"))
    }
}
