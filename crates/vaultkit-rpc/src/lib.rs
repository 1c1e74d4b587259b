//! Engine boundary for vaultkit.
//!
//! The vault consumes chain access through the [`Engine`] trait. This crate
//! defines that trait, its error type, and [`RpcEngine`], an implementation
//! that forwards every capability to a JSON-RPC 2.0 endpoint.
//!
//! # Example
//!
//! ```ignore
//! use vaultkit_rpc::{Engine, RpcEngine};
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = RpcEngine::new("http://localhost:8545").unwrap();
//!     let network = engine.get_network("stc--1").await.unwrap();
//!     println!("{} has {} decimals", network.symbol, network.decimals);
//! }
//! ```

pub mod client;
pub mod engine;
pub mod error;
pub mod rpc_engine;

pub use client::{RpcClient, RpcConfig};
pub use engine::{AddressValidation, Engine};
pub use error::RpcError;
pub use rpc_engine::RpcEngine;
