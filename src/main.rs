//! HTTP server for the weekly paycheck engine.

use std::path::PathBuf;

use ca_paycheck::api::{create_router, AppState};
use ca_paycheck::config::ConfigLoader;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ca-paycheck", version, about)]
struct Args {
    /// Directory holding payroll.yaml and brackets.yaml.
    #[arg(long, env = "PAYCHECK_CONFIG_DIR", default_value = "./config/ca_2025")]
    config_dir: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "PAYCHECK_BIND", default_value = "0.0.0.0:3000")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = ConfigLoader::load(&args.config_dir)?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(args.bind.as_str()).await?;
    info!(bind = %args.bind, config_dir = %args.config_dir.display(), "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
