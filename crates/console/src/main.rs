use std::{net::IpAddr, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use console::ConsoleConfig;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Remote debug console: receives log datagrams from a game client and
/// relays operator commands back.
#[derive(Parser)]
#[command(name = "spyglass", version = VERSION)]
struct Cli {
    /// Listen port for client log datagrams.
    #[arg(long)]
    port: Option<u16>,
    /// Destination port on the client for commands.
    #[arg(long)]
    game_port: Option<u16>,
    /// Address to bind the listening socket to.
    #[arg(long)]
    bind: Option<IpAddr>,
    /// Fixed client address (commands work before any announcement).
    #[arg(long)]
    peer: Option<IpAddr>,
    /// Path to a TOML config file.
    #[arg(long, default_value = "spyglass.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = color_eyre::install();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mut config = ConsoleConfig::load(&cli.config)?;
    if let Some(port) = cli.port {
        config.local_port = port;
    }
    if let Some(port) = cli.game_port {
        config.game_port = port;
    }
    if let Some(bind) = cli.bind {
        config.bind_ip = bind;
    }
    if let Some(peer) = cli.peer {
        config.peer_ip = Some(peer);
    }

    println!(
        "🔭 Spyglass listening on port {}, commands go to port {}.",
        config.local_port, config.game_port
    );
    println!("⏹️  Press Ctrl+C to stop.");

    console::run(config).await?;

    // The stdin task parks a blocking thread; returning normally would make
    // the runtime wait for one more input line before letting go.
    std::process::exit(0)
}
