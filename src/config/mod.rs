use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Decision engine configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "fraudr")]
#[command(about = "Rule-based fraud decision engine")]
pub struct Config {
    /// HTTP server listen address
    #[arg(long, default_value = "0.0.0.0:8080", env = "FRAUDR_LISTEN_ADDR")]
    pub listen_addr: String,

    /// Path to policy YAML file
    #[arg(long, default_value = "policy.yaml", env = "FRAUDR_POLICY_PATH")]
    pub policy_path: PathBuf,

    /// Policy reload check interval in seconds
    #[arg(long, default_value = "30", env = "FRAUDR_POLICY_RELOAD_SECS")]
    pub policy_reload_secs: u64,

    /// Latency budget in milliseconds for the authorize endpoint
    #[arg(long, default_value = "100", env = "FRAUDR_LATENCY_BUDGET_MS")]
    pub latency_budget_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Enable graceful shutdown
    #[arg(long, default_value = "true", env = "FRAUDR_GRACEFUL_SHUTDOWN")]
    pub graceful_shutdown: bool,

    /// Graceful shutdown timeout in seconds
    #[arg(long, default_value = "30", env = "FRAUDR_SHUTDOWN_TIMEOUT_SECS")]
    pub shutdown_timeout_secs: u64,
}

impl Config {
    /// Get policy reload interval as Duration.
    pub fn policy_reload_interval(&self) -> Duration {
        Duration::from_secs(self.policy_reload_secs)
    }

    /// Get shutdown timeout as Duration.
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: "0.0.0.0:8080".to_string(),
            policy_path: PathBuf::from("policy.yaml"),
            policy_reload_secs: 30,
            latency_budget_ms: 100,
            log_level: "info".to_string(),
            graceful_shutdown: true,
            shutdown_timeout_secs: 30,
        }
    }
}
