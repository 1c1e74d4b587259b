//! Shared fixtures for the vault integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use vaultkit_rpc::{AddressValidation, Engine, RpcError};
use vaultkit_tx::{SignedTx, UnsignedTx, UnsignedTxRequest};
use vaultkit_types::{DbAccount, Network, TokenInfo};
use vaultkit_wallet::{
    CipherParams, Credential, CredentialStore, KeyCipher, MemoryCredentialStore, PasswordCipher,
    TxSigner, VaultDeps, WalletError,
};

pub const STC_NETWORK: &str = "stc--1";
pub const ALGO_NETWORK: &str = "algo--4160";

pub const STC_ADDRESS: &str = "0x1d8133a0c1a07366de459fb08d28d2a6";
pub const STC_PEER: &str = "0x621500bf2b4aad17a690cb24f9a225c6";
pub const ALGO_ADDRESS: &str = "PEXSKS4K7RXCO3AL4LBG7E6OQFOQH2F6WHTSVO4BCE6LSHDVT6KXJIETDQ";
pub const ALGO_PEER: &str = "ZW3ISEHZUHPO7OZGMKLKIIMKVICOUDRCERI454I3DB2BH52HGLSO67W754";

pub const HD_PATH: &str = "m/44'/101010'/0'/0'/0'";
pub const HD_ACCOUNT: &str = "hd-1--m/44'/101010'/0'/0'/0'";
pub const HW_ACCOUNT: &str = "hw-1--m/44'/101010'/0'/0'/0'";
pub const IMPORTED_ACCOUNT: &str = "imported--stc--0x1d8133a0";
pub const WATCHING_ACCOUNT: &str = "watching-xyz";

pub const PASSWORD: &str = "correct horse";
pub const SEED: [u8; 32] = [0x42; 32];
pub const IMPORTED_KEY: [u8; 32] = [0x0c; 32];

/// Fee limit the mock reports when the request carries none.
pub const REPORTED_FEE_LIMIT: u128 = 21_000;

/// Nonce the mock assigns when the request carries none.
pub const CHAIN_NONCE: u64 = 42;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// Engine
// =============================================================================

pub struct MockEngine {
    pub networks: HashMap<String, Network>,
    pub tokens: HashMap<String, TokenInfo>,
    pub accounts: HashMap<String, DbAccount>,
    pub gas_prices: Vec<String>,
    pub valid_addresses: HashSet<String>,
    pub fail_gas_price: bool,
    pub requests: Mutex<Vec<UnsignedTxRequest>>,
    pub verify_calls: AtomicUsize,
}

pub fn network(id: &str, symbol: &str, decimals: u32, fee_decimals: u32) -> Network {
    Network {
        id: id.into(),
        name: symbol.to_lowercase(),
        symbol: symbol.into(),
        decimals,
        fee_symbol: symbol.into(),
        fee_decimals,
    }
}

fn native_token(network: &Network) -> TokenInfo {
    TokenInfo {
        network_id: network.id.clone(),
        token_id_on_network: String::new(),
        symbol: network.symbol.clone(),
        name: network.name.clone(),
        decimals: network.decimals,
    }
}

pub fn account(id: &str, address: &str, path: &str) -> DbAccount {
    DbAccount {
        id: id.into(),
        name: "Account #1".into(),
        address: address.into(),
        pub_key: "0xpub".into(),
        path: path.into(),
    }
}

impl MockEngine {
    /// STC with 9 decimals plus ALGO with 6, one account per custody mode.
    pub fn new() -> Self {
        Self::with_stc_decimals(9)
    }

    pub fn with_stc_decimals(decimals: u32) -> Self {
        let stc = network(STC_NETWORK, "STC", decimals, 9);
        let algo = network(ALGO_NETWORK, "ALGO", 6, 6);

        let tokens = [&stc, &algo]
            .iter()
            .map(|n| (n.id.clone(), native_token(n)))
            .collect();
        let accounts = [
            account(HD_ACCOUNT, STC_ADDRESS, HD_PATH),
            account(HW_ACCOUNT, STC_ADDRESS, HD_PATH),
            account(IMPORTED_ACCOUNT, STC_ADDRESS, ""),
            account(WATCHING_ACCOUNT, STC_ADDRESS, ""),
            account("hd-2--m/44'/283'/0'/0'/0'", ALGO_ADDRESS, "m/44'/283'/0'/0'/0'"),
        ]
        .into_iter()
        .map(|a| (a.id.clone(), a))
        .collect();

        Self {
            networks: [stc, algo].into_iter().map(|n| (n.id.clone(), n)).collect(),
            tokens,
            accounts,
            gas_prices: vec!["0.000000001".into(), "0.000000002".into(), "0.000000005".into()],
            valid_addresses: [STC_ADDRESS, STC_PEER, ALGO_ADDRESS, ALGO_PEER]
                .iter()
                .map(|a| a.to_string())
                .collect(),
            fail_gas_price: false,
            requests: Mutex::new(Vec::new()),
            verify_calls: AtomicUsize::new(0),
        }
    }

    pub fn requests(&self) -> Vec<UnsignedTxRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn rejected(method: &str, id: &str) -> RpcError {
    RpcError::Engine {
        method: method.to_string(),
        code: -32602,
        message: format!("unknown id {}", id),
    }
}

#[async_trait]
impl Engine for MockEngine {
    async fn get_network(&self, network_id: &str) -> Result<Network, RpcError> {
        self.networks
            .get(network_id)
            .cloned()
            .ok_or_else(|| rejected("get_network", network_id))
    }

    async fn get_native_token_info(&self, network_id: &str) -> Result<TokenInfo, RpcError> {
        self.tokens
            .get(network_id)
            .cloned()
            .ok_or_else(|| rejected("get_native_token_info", network_id))
    }

    async fn get_db_account(&self, account_id: &str) -> Result<DbAccount, RpcError> {
        self.accounts
            .get(account_id)
            .cloned()
            .ok_or_else(|| rejected("get_db_account", account_id))
    }

    async fn get_gas_price(&self, network_id: &str) -> Result<Vec<String>, RpcError> {
        if self.fail_gas_price {
            return Err(RpcError::Engine {
                method: "get_gas_price".to_string(),
                code: -32000,
                message: format!("gas price oracle for {} is offline", network_id),
            });
        }
        Ok(self.gas_prices.clone())
    }

    async fn build_unsigned_tx(
        &self,
        _network_id: &str,
        request: UnsignedTxRequest,
    ) -> Result<UnsignedTx, RpcError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(UnsignedTx {
            inputs: request.inputs,
            outputs: request.outputs,
            fee_price_per_unit: request.fee_price_per_unit,
            fee_limit: request.fee_limit.or(Some(REPORTED_FEE_LIMIT)),
            nonce: request.nonce.or(Some(CHAIN_NONCE)),
            payload: request.payload,
        })
    }

    async fn verify_address(
        &self,
        _network_id: &str,
        address: &str,
    ) -> Result<AddressValidation, RpcError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        if self.valid_addresses.contains(address) {
            Ok(AddressValidation {
                is_valid: true,
                normalized_address: Some(address.to_string()),
            })
        } else {
            Ok(AddressValidation::invalid())
        }
    }
}

// =============================================================================
// Signer and credentials
// =============================================================================

/// Signer whose raw transaction is the hex of the key it was given.
pub struct KeyEchoSigner;

#[async_trait]
impl TxSigner for KeyEchoSigner {
    async fn sign(
        &self,
        unsigned: &UnsignedTx,
        private_key: &[u8],
    ) -> Result<SignedTx, WalletError> {
        Ok(SignedTx {
            txid: format!("tx-{}", unsigned.nonce.unwrap_or(0)),
            raw_tx: hex::encode(private_key),
        })
    }
}

pub fn cipher() -> Arc<PasswordCipher> {
    Arc::new(PasswordCipher::with_params(CipherParams {
        t_cost: 1,
        m_cost: 256,
        parallelism: 1,
    }))
}

pub async fn credentials(cipher: &PasswordCipher) -> MemoryCredentialStore {
    let store = MemoryCredentialStore::new();
    store
        .put("hd-1", Credential::Hd { seed: cipher.encrypt(PASSWORD, &SEED).unwrap() })
        .await
        .unwrap();
    store
        .put(
            IMPORTED_ACCOUNT,
            Credential::Imported { private_key: cipher.encrypt(PASSWORD, &IMPORTED_KEY).unwrap() },
        )
        .await
        .unwrap();
    store
}

pub async fn deps(engine: Arc<MockEngine>) -> VaultDeps {
    let cipher = cipher();
    VaultDeps {
        engine,
        credentials: Arc::new(credentials(&cipher).await),
        cipher,
        signer: Some(Arc::new(KeyEchoSigner)),
        hardware: None,
    }
}
