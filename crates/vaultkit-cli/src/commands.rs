//! CLI command implementations.

use crate::AppContext;
use vaultkit_tx::{EncodedTx, FeeInfoUnit};
use vaultkit_wallet::{create_vault, AttachFeeInfoParams, TransferInfo, Vault};

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

// ─── Helpers ────────────────────────────────────────────────────────────────

fn prompt_password(prompt: &str) -> std::result::Result<String, Box<dyn std::error::Error>> {
    let pass = rpassword::prompt_password(prompt)?;
    if pass.is_empty() {
        return Err("password cannot be empty".into());
    }
    Ok(pass)
}

fn open_vault(ctx: &AppContext) -> std::result::Result<Box<dyn Vault>, Box<dyn std::error::Error>> {
    Ok(create_vault(&ctx.deps, &ctx.network_id, &ctx.account_id)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build an unpriced transfer from the active account to `to`.
async fn build_transfer(
    ctx: &AppContext,
    vault: &dyn Vault,
    to: &str,
    amount: &str,
) -> std::result::Result<EncodedTx, Box<dyn std::error::Error>> {
    let account = ctx.deps.engine.get_db_account(&ctx.account_id).await?;
    let transfer = TransferInfo::native(account.address, to, amount);
    Ok(vault.build_encoded_tx_from_transfer(transfer).await?)
}

// ─── Commands ───────────────────────────────────────────────────────────────

pub async fn guess(ctx: &AppContext, input: &str) -> Result {
    let vault = open_vault(ctx)?;
    let guesses = vault.guess_user_create_input(input).await?;
    if guesses.is_empty() {
        println!("Unrecognized input.");
    }
    for category in guesses {
        println!("{:?}", category);
    }
    Ok(())
}

pub async fn fee(ctx: &AppContext, to: &str, amount: &str) -> Result {
    let vault = open_vault(ctx)?;
    let encoded = build_transfer(ctx, vault.as_ref(), to, amount).await?;
    let info = vault.fetch_fee_info(&encoded).await?;
    print_json(&info)
}

pub async fn transfer(
    ctx: &AppContext,
    to: &str,
    amount: &str,
    price: Option<String>,
    limit: Option<String>,
) -> Result {
    let vault = open_vault(ctx)?;
    let encoded = build_transfer(ctx, vault.as_ref(), to, amount).await?;
    let info = vault.fetch_fee_info(&encoded).await?;

    let price = price.or_else(|| info.default_price().map(str::to_string));
    let limit = limit.unwrap_or_else(|| info.limit.clone());
    println!(
        "Fee: price {} {} x limit {}",
        price.as_deref().unwrap_or("(minimum)"),
        info.symbol,
        limit
    );

    let attached = vault
        .attach_fee_info_to_encoded_tx(AttachFeeInfoParams {
            encoded_tx: encoded,
            fee_info_value: FeeInfoUnit::new(price.as_deref(), &limit),
        })
        .await?;
    let unsigned = vault.build_unsigned_tx_from_encoded_tx(&attached).await?;

    println!("Encoded transaction:");
    print_json(&attached)?;
    println!("Unsigned transaction:");
    print_json(&unsigned)
}

pub async fn decode(ctx: &AppContext, tx: &str) -> Result {
    let vault = open_vault(ctx)?;
    let encoded: EncodedTx = serde_json::from_str(tx)?;
    let decoded = vault.decode_tx(&encoded).await?;
    print_json(&decoded)?;

    let legacy = vault.decoded_tx_to_legacy(&decoded).await?;
    println!(
        "{:?}: {} {} from {} to {}",
        legacy.tx_type, legacy.amount, legacy.symbol, legacy.from_address, legacy.to_address
    );
    Ok(())
}

pub async fn export(ctx: &AppContext) -> Result {
    let vault = open_vault(ctx)?;
    let password = prompt_password("Wallet password: ")?;
    let key = vault.get_exported_credential(&password).await?;
    println!("Private key: {}", key);
    println!();
    println!("WARNING: Never share your private key with anyone!");
    Ok(())
}
