//! Vault construction by implementation family.

use super::algo::{AlgoVault, ALGO_KEYRINGS};
use super::settings::{VaultSettings, ALGO_SETTINGS, STC_SETTINGS};
use super::stc::{StcVault, STC_KEYRINGS};
use super::{Vault, VaultContext, VaultDeps};
use crate::error::WalletError;
use crate::keyring::KeyringMap;
use vaultkit_types::ImplFamily;

/// Registration of one chain archetype.
pub struct VaultFactory {
    pub family: ImplFamily,
    pub settings: &'static VaultSettings,
    pub keyrings: &'static KeyringMap,
    pub build: fn(VaultContext) -> Box<dyn Vault>,
}

fn build_stc(ctx: VaultContext) -> Box<dyn Vault> {
    Box::new(StcVault::new(ctx))
}

fn build_algo(ctx: VaultContext) -> Box<dyn Vault> {
    Box::new(AlgoVault::new(ctx))
}

pub static FACTORIES: [VaultFactory; 2] = [
    VaultFactory {
        family: ImplFamily::Stc,
        settings: &STC_SETTINGS,
        keyrings: &STC_KEYRINGS,
        build: build_stc,
    },
    VaultFactory {
        family: ImplFamily::Algo,
        settings: &ALGO_SETTINGS,
        keyrings: &ALGO_KEYRINGS,
        build: build_algo,
    },
];

pub fn factory_for(family: ImplFamily) -> Option<&'static VaultFactory> {
    FACTORIES.iter().find(|f| f.family == family)
}

/// Build the vault for `network_id`, bound to `account_id`.
pub fn create_vault(
    deps: &VaultDeps,
    network_id: &str,
    account_id: &str,
) -> Result<Box<dyn Vault>, WalletError> {
    let factory = ImplFamily::from_network_id(network_id)
        .and_then(factory_for)
        .ok_or_else(|| WalletError::UnsupportedNetwork(network_id.to_string()))?;
    let ctx = VaultContext::new(deps, network_id, account_id, factory.keyrings)?;
    Ok((factory.build)(ctx))
}
