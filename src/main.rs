use anyhow::Context;
use clap::Parser;
use click_counter::cli::Cli;
use click_counter::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .load_config()
        .with_context(|| format!("loading config from {}", cli.config_path().display()))?;

    if let Some(path) = logging::init_tracing(&config.logging) {
        tracing::info!(path = %path.display(), version = env!("CARGO_PKG_VERSION"), "Logging started");
    }

    ui::runtime::run(&config).context("running terminal UI")?;
    tracing::info!("Exited cleanly");
    Ok(())
}
