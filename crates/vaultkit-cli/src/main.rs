use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use vaultkit_rpc::{RpcConfig, RpcEngine};
use vaultkit_wallet::{Credential, MemoryCredentialStore, PasswordCipher, VaultDeps};

mod commands;

/// Vaultkit command-line interface.
#[derive(Parser)]
#[command(name = "vaultkit")]
#[command(about = "Build, price and decode transactions through a vaultkit engine")]
#[command(version)]
struct Cli {
    /// Engine JSON-RPC URL.
    #[arg(long, env = "VAULTKIT_ENGINE_URL", default_value = "http://localhost:8545")]
    engine_url: String,

    /// Network id, e.g. "stc--1" or "algo--4160".
    #[arg(long, default_value = "stc--1")]
    network: String,

    /// Active account id.
    #[arg(long)]
    account: String,

    /// JSON file mapping credential ids to encrypted credentials.
    #[arg(long)]
    credentials: Option<PathBuf>,

    /// Engine request timeout in seconds.
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Transport-level retries for engine calls.
    #[arg(long, default_value = "0")]
    retries: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an input as private key and/or address.
    Guess {
        input: String,
    },

    /// Build a priced transfer and print the unsigned transaction.
    Transfer {
        /// Destination address.
        #[arg(long)]
        to: String,

        /// Amount in display units (e.g. "1.5").
        #[arg(long)]
        amount: String,

        /// Fee price in display units; defaults to the oracle's default preset.
        #[arg(long)]
        price: Option<String>,

        /// Fee limit; defaults to the engine's estimate.
        #[arg(long)]
        limit: Option<String>,
    },

    /// Show fee candidates for a transfer.
    Fee {
        #[arg(long)]
        to: String,

        #[arg(long)]
        amount: String,
    },

    /// Decode an encoded transaction given as JSON.
    Decode {
        /// EncodedTx JSON, e.g. '{"family":"stc","from":"0x..","to":"0x..","value":"1"}'.
        tx: String,
    },

    /// Export the active account's private key.
    Export,
}

/// Application context shared across commands.
pub struct AppContext {
    pub network_id: String,
    pub account_id: String,
    pub deps: VaultDeps,
}

impl AppContext {
    fn from_cli(cli: &Cli) -> Result<Self, Box<dyn std::error::Error>> {
        let engine = RpcEngine::with_config(RpcConfig {
            url: cli.engine_url.clone(),
            timeout: Duration::from_secs(cli.timeout),
            retries: cli.retries,
            ..Default::default()
        })?;

        let credentials = match &cli.credentials {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
                let entries: HashMap<String, Credential> = serde_json::from_str(&raw)?;
                log::debug!("loaded {} credentials from {}", entries.len(), path.display());
                MemoryCredentialStore::with_entries(entries)
            }
            None => MemoryCredentialStore::new(),
        };

        Ok(Self {
            network_id: cli.network.clone(),
            account_id: cli.account.clone(),
            deps: VaultDeps {
                engine: Arc::new(engine),
                credentials: Arc::new(credentials),
                cipher: Arc::new(PasswordCipher::new()),
                signer: None,
                hardware: None,
            },
        })
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let ctx = match AppContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Guess { input } => commands::guess(&ctx, &input).await,
        Commands::Transfer {
            to,
            amount,
            price,
            limit,
        } => commands::transfer(&ctx, &to, &amount, price, limit).await,
        Commands::Fee { to, amount } => commands::fee(&ctx, &to, &amount).await,
        Commands::Decode { tx } => commands::decode(&ctx, &tx).await,
        Commands::Export => commands::export(&ctx).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
