use anyhow::Result;
use clap::{Parser, Subcommand};
use fiverings::cli::SendArgs;

/// fiverings - 5Rings multi-sport facility website
#[derive(Parser)]
#[command(name = "fiverings")]
#[command(about = "Website and contact form for the 5Rings multi-sport facility", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit one contact form without the website
    Send(SendArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = fiverings::config::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    fiverings::observability::init_observability(
        "fiverings",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => fiverings::cli::serve(config, host, port).await,
        Commands::Send(args) => fiverings::cli::send(config, args).await,
    }
}
