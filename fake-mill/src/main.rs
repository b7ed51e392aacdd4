#![forbid(unsafe_code)]

use clap::Parser;
use fake_mill_lib::config::{load_from_path, validate_config, Config};
use fake_mill_lib::telemetry::init_tracing;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Synthetic Brazilian document and record generator API")]
struct Cli {
    /// Path to configuration TOML file; built-in defaults are used when omitted
    #[arg(short, long, value_name = "FILE", env = "FAKE_MILL_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cfg = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = init_tracing(&cfg.logging) {
        eprintln!("failed to initialize tracing: {err}");
        std::process::exit(1);
    }

    info!(
        ?cfg.listen,
        app_name = %cfg.app_name,
        environment = %cfg.environment,
        "configuration loaded"
    );

    if let Err(err) = fake_mill_lib::run(Arc::new(cfg), CancellationToken::new()).await {
        error!(%err, "server exited with error");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> fake_mill_lib::Result<Config> {
    match &cli.config {
        Some(path) => load_from_path(path),
        None => {
            let cfg = Config::default();
            validate_config(&cfg)?;
            Ok(cfg)
        }
    }
}
