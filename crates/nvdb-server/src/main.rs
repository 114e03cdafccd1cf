//! News Vector Database Server

// Force-link nvdb-providers to ensure linkme registrations are included
extern crate nvdb_providers;

use clap::Parser;
use nvdb_server::run;

/// Command line interface for the news vector database
#[derive(Parser, Debug)]
#[command(name = "nvdb")]
#[command(about = "News vector database - embedding and similarity API")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is not an error
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
