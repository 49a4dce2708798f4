use std::path::PathBuf;

use clap::Parser;
use envcheck::{load_and_validate_config, load_env_file, Manifest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fail fast when required environment variables are missing or empty.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Required variable names, checked after those listed in the manifest
    keys: Vec<String>,

    /// Manifest listing required variables [default: ~/.config/envcheck/config.toml]
    #[arg(short, long, env = "ENVCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Env file to load; overrides the manifest's env_file [default: search for .env]
    #[arg(short, long, env = "ENVCHECK_ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Do not load any env file, even if --env-file or the manifest names one
    #[arg(long)]
    no_env_file: bool,

    /// Print KEY=value instead of key names only
    #[arg(long)]
    show_values: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let manifest = Manifest::load(cli.config.as_deref())?.unwrap_or_default();

    if !cli.no_env_file {
        let env_file = cli.env_file.clone().or_else(|| manifest.env_file_path());
        load_env_file(env_file.as_deref())?;
    }

    let mut required = manifest.required;
    required.extend(cli.keys);

    let config = load_and_validate_config(&required)?;

    let mut entries: Vec<(&str, &str)> = config.iter().collect();
    entries.sort_unstable();
    for (key, value) in entries {
        if cli.show_values {
            println!("{}={}", key, value);
        } else {
            println!("{}", key);
        }
    }

    Ok(())
}
