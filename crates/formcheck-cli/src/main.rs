//! Formcheck CLI — command-line client for the exercise analysis API.
//!
//! Set FORMCHECK_API_URL (or API_URL); defaults to the local development
//! server on 127.0.0.1:8000.

use anyhow::Context;
use clap::{Parser, Subcommand};
use formcheck_api_client::ApiClient;
use formcheck_cli::init_tracing;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "formcheck", about = "Formcheck exercise analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a workout video for exercise analysis
    Analyze {
        /// Path to the encoded video file
        file: std::path::PathBuf,
    },
    /// Check that the API is reachable
    Ping,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let client = ApiClient::from_env()
        .context("Failed to create API client. Set FORMCHECK_API_URL (or API_URL)")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file } => {
            let response = client.submit_video_file(&file.to_string_lossy()).await?;
            print_json(&response)?;
        }
        Commands::Ping => {
            let response = client.ping().await?;
            print_json(&response)?;
        }
    }

    Ok(())
}
