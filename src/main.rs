use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod handlers;
mod helpers;
mod openapi_tests;
mod router;
mod schemas;
mod test_utils;
mod tests;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap so env-backed arguments see it
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
