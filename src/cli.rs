use crate::config::{Config, ConfigError};
use clap::Parser;
use std::path::PathBuf;

/// Click counter and message mirror in your terminal
#[derive(Debug, Parser)]
#[command(name = "click-counter")]
#[command(version)]
#[command(about = "Click counter and message mirror in your terminal", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/click-counter/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write diagnostic logs to this file (a timestamp and pid are appended)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level when RUST_LOG is unset: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Input poll interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_rate_ms: Option<u64>,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Flags override values from the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(tick) = self.tick_rate_ms {
            config.ui.tick_rate_ms = tick;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
    }

    /// Load the config file, apply flag overrides and validate the result.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load_from(&self.config_path())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }
}
