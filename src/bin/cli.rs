//! Launchpad CLI
//!
//! Command-line interface for store operations:
//! - Seed the store with the default shortcuts
//! - List what a running server serves
//! - Add a shortcut through a running server
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use launchpad::api::dto::{ErrorEnvelope, ShortcutEnvelope, ShortcutListEnvelope};
use launchpad::config::{generate_default_config, Config};
use launchpad::store::{default_shortcuts, NewShortcut, ShortcutStore, StoreConfig};

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Launcher dashboard operations")]
#[command(
    long_about = "Manage the shortcut store behind the launcher dashboard.\nSeed the defaults, list what a running server serves, and add new shortcuts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8085", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reset the store to the four default shortcuts (destructive: custom
    /// shortcuts are removed)
    Seed {
        /// Store directory (default: the configured data dir)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// List active shortcuts from a running server
    List,

    /// Add a shortcut through a running server
    Add {
        /// Stable identifier, unique across shortcuts
        id: String,
        /// Display name
        name: String,
        /// One-line description
        description: String,
        /// Icon glyph (emoji)
        icon: String,
        /// Launch URI (custom scheme://token or https URL)
        uri: String,
        /// Tile color classes
        color: String,
        /// Sort key (listings sort ascending)
        #[arg(short, long, default_value = "0")]
        order: i64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Seed { data_dir } => seed(data_dir).await,
        Commands::List => list(&client, &cli.api_url, &cli.format).await,
        Commands::Add {
            id,
            name,
            description,
            icon,
            uri,
            color,
            order,
        } => {
            let shortcut =
                NewShortcut::new(id, name, description, icon, uri, color).sort_order(order);
            add(&client, &cli.api_url, shortcut).await
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

/// Clear the store and insert the fixed default list. Running it twice
/// yields the same four records.
async fn seed(data_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let data_dir =
        data_dir.unwrap_or_else(|| PathBuf::from(Config::load_default().store.data_dir));

    println!("Opening store at {:?}...", data_dir);
    let store = ShortcutStore::open(StoreConfig::new(&data_dir))
        .with_context(|| format!("failed to open store at {:?}", data_dir))?;

    println!("Clearing existing shortcuts...");
    let removed = store.delete_all().await?;
    if removed > 0 {
        println!("Removed {} existing shortcuts", removed);
    }

    println!("Inserting default shortcuts...");
    let seeded = store.insert_many(&default_shortcuts()).await?;

    println!("Successfully seeded {} shortcuts:", seeded.len());
    for shortcut in &seeded {
        println!("- {} ({})", shortcut.name, shortcut.id);
    }

    Ok(())
}

async fn list(client: &reqwest::Client, api_url: &str, format: &str) -> anyhow::Result<()> {
    let url = format!("{}/api/shortcuts", api_url.trim_end_matches('/'));
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;

    if !response.status().is_success() {
        let envelope: ErrorEnvelope = response
            .json()
            .await
            .context("server returned an unreadable error response")?;
        bail!("{}: {}", envelope.error, envelope.message);
    }

    let envelope: ShortcutListEnvelope = response
        .json()
        .await
        .context("server returned an unreadable response")?;
    if !envelope.success {
        bail!("server reported failure without an error envelope");
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&envelope.data)?),
        _ => {
            println!("{:<6} {:<14} {:<22} {}", "ORDER", "ID", "NAME", "URI");
            for shortcut in &envelope.data {
                println!(
                    "{:<6} {:<14} {:<22} {}",
                    shortcut.sort_order, shortcut.id, shortcut.name, shortcut.uri
                );
            }
        }
    }

    Ok(())
}

async fn add(
    client: &reqwest::Client,
    api_url: &str,
    shortcut: NewShortcut,
) -> anyhow::Result<()> {
    let url = format!("{}/api/shortcuts", api_url.trim_end_matches('/'));
    let response = client
        .post(&url)
        .json(&shortcut)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;

    if !response.status().is_success() {
        let envelope: ErrorEnvelope = response
            .json()
            .await
            .context("server returned an unreadable error response")?;
        bail!("{}: {}", envelope.error, envelope.message);
    }

    let envelope: ShortcutEnvelope = response
        .json()
        .await
        .context("server returned an unreadable response")?;
    println!(
        "Created {} ({}) at order {}",
        envelope.data.name, envelope.data.id, envelope.data.sort_order
    );

    Ok(())
}
