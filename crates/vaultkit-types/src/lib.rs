//! Core types shared across the vaultkit crates.
//!
//! Network metadata, accounts and their custody modes, and exact decimal
//! amount handling. Amounts are always carried as decimal strings; no
//! floating point is involved anywhere in the pipeline.

pub mod account;
pub mod amount;
pub mod network;

pub use account::{CustodyMode, DbAccount};
pub use amount::AmountError;
pub use network::{ImplFamily, Network, TokenInfo};
