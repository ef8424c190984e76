mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slipway", about = "Build-and-publish pipeline for containerized services")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter slipway.toml
    Init,
    /// One-time provisioning: source bucket, image repository, initial upload
    Setup,
    /// Sync the source directory into the bucket under the watched prefix
    Upload,
    /// Watch store notifications on stdin and launch builds
    Watch,
    /// Run a single build job now
    Build,
    /// Force a new deployment of the running service
    Deploy,
    /// Show the running service status
    Status,
    /// Print the provisioned resource endpoints
    Outputs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init()?,
        Commands::Setup => commands::setup().await?,
        Commands::Upload => commands::upload().await?,
        Commands::Watch => commands::watch().await?,
        Commands::Build => commands::build().await?,
        Commands::Deploy => commands::deploy().await?,
        Commands::Status => commands::status().await?,
        Commands::Outputs => commands::outputs().await?,
    }

    Ok(())
}
