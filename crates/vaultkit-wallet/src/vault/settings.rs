//! Static per-archetype settings.

/// Capabilities and conventions of one chain archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultSettings {
    pub imported_account_enabled: bool,
    pub watching_account_enabled: bool,
    pub hardware_account_enabled: bool,
    /// Fee price in chain units, attached when the caller supplies none.
    pub min_fee_price: &'static str,
}

pub const STC_SETTINGS: VaultSettings = VaultSettings {
    imported_account_enabled: true,
    watching_account_enabled: true,
    hardware_account_enabled: true,
    min_fee_price: "1",
};

/// Algorand charges at least 1000 microalgos per transaction.
pub const ALGO_SETTINGS: VaultSettings = VaultSettings {
    imported_account_enabled: true,
    watching_account_enabled: true,
    hardware_account_enabled: false,
    min_fee_price: "1000",
};
