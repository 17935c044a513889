//! SvrDash CLI - command-line client for the server dashboard API
//!
//! Talks to the remote server collection through the gateway: list the
//! fleet, fetch or save a record, ping an address, delete a record, or
//! filter an already-fetched list by status locally.

use clap::{Parser, Subcommand};
use std::process;
use svrdash_core::{EnvelopeResponse, ServerRecord, Status};
use svrdash_gateway::{GatewayConfig, ServerGateway, DEFAULT_BASE_URL};
use svrdash_support::Toaster;
use tracing::error;

/// SvrDash CLI - server dashboard client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Server resource root to connect to
    #[arg(short, long, default_value = DEFAULT_BASE_URL, env = "SVRDASH_API_URL")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all servers
    List,

    /// Fetch one server by identifier
    Get {
        /// Server ID
        server_id: i64,
    },

    /// Create or update a server record
    Save {
        /// Record identifier; 0 creates a new record
        #[arg(long, default_value_t = 0)]
        id: i64,

        /// Server name
        #[arg(long)]
        name: String,

        /// IP address
        #[arg(long)]
        ip_address: String,

        /// Installed memory (e.g. "16 GB")
        #[arg(long, default_value = "")]
        memory: String,

        /// Server class (e.g. "Web server")
        #[arg(long = "type", default_value = "")]
        server_type: String,

        /// Image URL shown in the dashboard
        #[arg(long, default_value = "")]
        image_url: String,

        /// SERVER_UP or SERVER_DOWN
        #[arg(long, default_value = "SERVER_DOWN")]
        status: Status,
    },

    /// Ping a server by address
    Ping {
        /// IP address to probe
        ip_address: String,
    },

    /// Delete a server by identifier
    Delete {
        /// Server ID
        server_id: i64,
    },

    /// Fetch the list and filter it locally by status
    Filter {
        /// ALL, SERVER_UP or SERVER_DOWN
        status: Status,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let gateway = ServerGateway::new(&GatewayConfig::new(cli.url));

    if let Err(e) = run(&gateway, cli.command).await {
        error!("Command failed: {}", e);
        // Surface the failure the way a UI controller would
        let _ = Toaster::default()
            .display_error(&e.to_string(), None, false)
            .await;
        process::exit(1);
    }
}

async fn run(gateway: &ServerGateway, command: Commands) -> anyhow::Result<()> {
    let envelope = match command {
        Commands::List => gateway.list().await?,
        Commands::Get { server_id } => gateway.get(server_id).await?,
        Commands::Save {
            id,
            name,
            ip_address,
            memory,
            server_type,
            image_url,
            status,
        } => {
            let record = ServerRecord {
                id,
                ip_address,
                name,
                memory,
                server_type,
                image_url,
                status,
            };
            gateway.save(&record).await?
        }
        Commands::Ping { ip_address } => gateway.ping(&ip_address).await?,
        Commands::Delete { server_id } => gateway.delete(server_id).await?,
        Commands::Filter { status } => {
            let fetched = gateway.list().await?;
            gateway.filter(status, &fetched)
        }
    };

    print_envelope(&envelope)
}

fn print_envelope(envelope: &EnvelopeResponse) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(envelope)?);
    Ok(())
}
