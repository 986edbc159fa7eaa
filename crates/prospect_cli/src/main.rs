//! CLI entry point for prospect.

mod cli;
mod commands;
mod output;

use clap::Parser;
use prospect_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Load configuration env files: `~/.prospect/env` first, then the nearest
/// project `.env` walking up from the working directory. Process env wins
/// over both.
fn load_env_files() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(".prospect").join("env");
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    load_env_files();
    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::from_env();
    observability.service_name = "prospect-cli".to_string();
    if cli.verbose {
        observability.log_level = Some("debug".to_string());
    }
    if let Err(e) = prospect_observability::init(observability) {
        eprintln!("warning: {e}");
    }

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
