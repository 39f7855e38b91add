use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Delays used by the login state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Simulated network latency before the gateway is called (default: 900).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Delay before an acknowledged message is cleared (default: 900).
    #[serde(default = "default_message_clear_ms")]
    pub message_clear_ms: u64,
}

impl TimingConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn message_clear(&self) -> Duration {
        Duration::from_millis(self.message_clear_ms)
    }
}

/// Terminal presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw and spinner tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a notification banner stays on screen (default: 3000).
    #[serde(default = "default_banner_ms")]
    pub banner_ms: u64,
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive. `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. The terminal belongs to the UI, so logs never go to stdout.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_latency_ms() -> u64 {
    900
}

fn default_message_clear_ms() -> u64 {
    900
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_banner_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            message_clear_ms: default_message_clear_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            banner_ms: default_banner_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
