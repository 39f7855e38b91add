use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal login screen backed by a mock authentication service.
#[derive(Debug, Parser)]
#[command(name = "elogin", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/elogin/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override simulated network latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Override delay before transient messages are cleared, in milliseconds
    #[arg(long, value_name = "MS")]
    pub clear_delay_ms: Option<u64>,

    /// Override log filter (e.g. "debug", "elogin=trace")
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Override log file location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.latency_ms {
            config.timing.latency_ms = ms;
        }
        if let Some(ms) = self.clear_delay_ms {
            config.timing.message_clear_ms = ms;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
