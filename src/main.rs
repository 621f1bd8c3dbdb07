mod cli;

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use clap::Parser;

use nexus_inventory::asset::{AssetPatch, AssetStatus, Category, NewAsset};
use nexus_inventory::auth::AuthClient;
use nexus_inventory::config::{Config, CredentialStatus, RemoteConfig, SecureString};
use nexus_inventory::inventory::{filter_assets, CategoryFilter, FilterState, Inventory};
use nexus_inventory::service::AssetService;
use nexus_inventory::store::{LocalStore, RemoteStore, StoreBackend};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nexus_inventory::logging::init_tracing();

    let args = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    match args.command {
        Command::Login { email, password } => {
            let auth = auth_client(&config)?;
            let session = auth
                .sign_in(&email, &password)
                .await
                .context("Sign-in failed")?;
            println!("Signed in as {}", session.user.email);
        }
        Command::Signup { email, password } => {
            let auth = auth_client(&config)?;
            let session = auth
                .sign_up(&email, &password)
                .await
                .context("Sign-up failed")?;
            println!("Account created for {}", session.user.email);
        }
        Command::Logout => {
            let auth = auth_client(&config)?;
            auth.sign_out().await.context("Sign-out failed")?;
            println!("Signed out");
        }
        Command::Whoami => {
            let auth = auth_client(&config)?;
            match auth.session() {
                Some(session) => println!("{} ({})", session.user.email, session.user.id),
                None => println!("Not signed in"),
            }
        }
        command => run_inventory(&config, command).await?,
    }

    Ok(())
}

async fn run_inventory(config: &Config, command: Command) -> anyhow::Result<()> {
    let store = build_store(config)?;
    let inventory = Inventory::new(AssetService::new(store));

    inventory.refresh().await;
    if let Some(error) = inventory.state().error {
        bail!("{}", error);
    }

    match command {
        Command::List { search, category } => {
            let category: CategoryFilter = category
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let filters = FilterState { search, category };
            let shown = filter_assets(&inventory.state().assets, &filters);

            if shown.is_empty() {
                println!("No assets.");
            }
            for asset in shown {
                let serial = asset.serial_number.as_deref().unwrap_or("-");
                println!(
                    "{}  {:<30} {:<12} {:<12} {:>10.2}  {}  {}",
                    asset.id,
                    asset.name,
                    asset.category,
                    asset.status,
                    asset.value,
                    asset.purchase_date.format("%Y-%m-%d"),
                    serial,
                );
            }
        }

        Command::Add {
            name,
            category,
            value,
            serial,
            status,
            purchased,
        } => {
            let input = NewAsset {
                name,
                category: Some(parse_category(&category)?),
                value,
                serial_number: serial,
                status: status.as_deref().map(parse_status).transpose()?,
                purchase_date: purchased.as_deref().map(parse_datetime).transpose()?,
                ..NewAsset::default()
            };

            if !inventory.add_asset(input).await {
                bail_with_state_error(&inventory)?;
            }
            if let Some(asset) = inventory.state().assets.last() {
                println!("Added {} ({})", asset.name, asset.id);
            }
        }

        Command::Update {
            id,
            name,
            category,
            value,
            serial,
            status,
            purchased,
        } => {
            let patch = AssetPatch {
                name,
                category: category.as_deref().map(parse_category).transpose()?,
                value,
                serial_number: serial,
                status: status.as_deref().map(parse_status).transpose()?,
                purchase_date: purchased.as_deref().map(parse_datetime).transpose()?,
            };
            if patch.is_empty() {
                bail!("No fields to update; pass at least one field flag");
            }

            if !inventory.update_asset(id, patch).await {
                bail_with_state_error(&inventory)?;
            }
            println!("Updated {}", id);
        }

        Command::Delete { id } => {
            if !inventory.delete_asset(id).await {
                bail_with_state_error(&inventory)?;
            }
            println!("Deleted {}", id);
        }

        // Auth commands are dispatched before run_inventory.
        Command::Login { .. } | Command::Signup { .. } | Command::Logout | Command::Whoami => {}
    }

    Ok(())
}

/// Surface the controller's error line as the command failure.
fn bail_with_state_error(inventory: &Inventory<StoreBackend>) -> anyhow::Result<()> {
    match inventory.state().error {
        Some(error) => bail!("{}", error),
        None => bail!("Operation failed"),
    }
}

fn build_store(config: &Config) -> anyhow::Result<StoreBackend> {
    match config.storage.backend.as_str() {
        "remote" => {
            let remote = remote_config(config)?;
            let api_key = resolve_key(remote)?;
            let auth = AuthClient::new(remote.base_url.clone(), api_key.clone());

            let mut store = RemoteStore::new(remote.base_url.clone(), api_key);
            if let Some(session) = auth.session() {
                store = store.with_session(session.token(), session.user.id);
            }
            Ok(StoreBackend::Remote(store))
        }
        _ => {
            let path = config
                .storage
                .data_path
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(LocalStore::default_path);
            Ok(StoreBackend::Local(LocalStore::new(path)))
        }
    }
}

fn auth_client(config: &Config) -> anyhow::Result<AuthClient> {
    let remote = remote_config(config)?;
    let api_key = resolve_key(remote)?;
    Ok(AuthClient::new(remote.base_url.clone(), api_key))
}

fn remote_config(config: &Config) -> anyhow::Result<&RemoteConfig> {
    config.remote.as_ref().with_context(|| {
        format!(
            "This command needs the hosted backend; add a [remote] section to {}",
            Config::config_path().display()
        )
    })
}

fn resolve_key(remote: &RemoteConfig) -> anyhow::Result<SecureString> {
    match remote.resolve_api_key() {
        CredentialStatus::Configured(key) => Ok(key),
        CredentialStatus::Unconfigured { reason } => bail!("{}", reason),
    }
}

fn parse_category(s: &str) -> anyhow::Result<Category> {
    s.parse::<Category>().map_err(|e| anyhow::anyhow!(e))
}

fn parse_status(s: &str) -> anyhow::Result<AssetStatus> {
    s.parse::<AssetStatus>().map_err(|e| anyhow::anyhow!(e))
}

fn parse_datetime(s: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .with_context(|| format!("'{}' is not a valid RFC 3339 timestamp", s))
}
