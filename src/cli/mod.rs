use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{inspect, serve};

#[derive(Parser)]
#[command(name = "mspboard")]
#[command(about = "MSP analytics dashboard with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Path to the wide MSP CSV file
        #[arg(short, long, env = "MSP_DATA_PATH", default_value = "data/MSP_extracted.csv")]
        data_path: String,

        /// Address to bind, e.g. 0.0.0.0:3000
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Load the dataset and print a coverage summary
    Inspect {
        /// Path to the wide MSP CSV file
        #[arg(short, long, env = "MSP_DATA_PATH", default_value = "data/MSP_extracted.csv")]
        data_path: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                data_path,
                bind_address,
            } => {
                serve(&data_path, &bind_address).await?;
            }
            Commands::Inspect { data_path } => {
                inspect(&data_path)?;
            }
        }
        Ok(())
    }
}
