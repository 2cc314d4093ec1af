use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use teacher_pay::api::{AppState, CalculationRequest, calculate_response, create_router};
use teacher_pay::config::{ConfigLoader, PayConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "teacher-pay", version, about = "Monthly pay calculator for tutoring teachers")]
struct Cli {
    /// Log filter, e.g. `info` or `teacher_pay=debug`.
    #[arg(long, global = true, default_value = "info")]
    log: String,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API.
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: SocketAddr,
        /// Directory holding rules.yaml and optional rate tables.
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
    /// Calculate pay for a request JSON file and print the response.
    Calculate {
        file: PathBuf,
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
}

fn load_config(dir: Option<&Path>) -> Result<PayConfig, Box<dyn std::error::Error>> {
    match dir {
        Some(dir) => Ok(ConfigLoader::load(dir)?.into_config()),
        None => Ok(PayConfig::standard()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log)?)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Serve { listen, config_dir } => {
            let config = load_config(config_dir.as_deref())?;
            let app = create_router(AppState::new(config));
            let listener = tokio::net::TcpListener::bind(listen).await?;
            tracing::info!(addr = %listener.local_addr()?, "Listening");
            axum::serve(listener, app).await?;
        }
        Command::Calculate { file, config_dir } => {
            let config = load_config(config_dir.as_deref())?;
            let bytes = fs::read(&file)?;
            let request: CalculationRequest = serde_json::from_slice(&bytes)?;
            let response = calculate_response(request, &config);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}
