//! weather-gateway - batched OpenWeatherMap collection service

#![allow(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use weather_batch::{VERSION, build_info, server};

/// Batched concurrent weather collection service
#[derive(Debug, Parser)]
#[command(name = "weather-gateway", version = VERSION)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "WEATHER_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Print build information and exit
    #[arg(long)]
    build_info: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional; real environment variables win
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    if args.build_info {
        let info = build_info();
        println!(
            "{} (git {}, built {})",
            info.version, info.git_hash, info.build_time
        );
        return ExitCode::SUCCESS;
    }

    match server::builder::run_server(&args.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
