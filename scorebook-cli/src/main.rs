use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scorebook_cli::{Console, config::Config};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so they never mix with console output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Starting scorebook: {} vs {}, exports to {}",
        config.home_team,
        config.away_team,
        config.export_dir.display()
    );

    let mut console = Console::new(&config);
    let stdin = io::stdin();
    console.run(stdin.lock(), io::stdout())?;

    info!("Scorebook closed.");
    Ok(())
}
