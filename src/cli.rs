use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::engine::{FailurePolicy, SyncConfig, DEFAULT_ERRORS_PATH, DEFAULT_OUTPUT_PATH};

/// Synchronize account balances from a CSV file with the update authority
#[derive(Parser, Debug)]
#[command(name = "account-sync-processor")]
#[command(about = "Synchronize account balances from a CSV file with the update authority", long_about = None)]
pub struct CliArgs {
    /// Input CSV file with the header `agencia,conta,saldo`
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Destination of the successfully processed accounts
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    /// Destination of the rejected rows
    #[arg(long = "errors", value_name = "PATH", default_value = DEFAULT_ERRORS_PATH)]
    pub errors_path: PathBuf,

    /// Log level: error, warn, info, debug or trace
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Record failed authority calls in the errors file instead of stopping the run
    #[arg(long = "isolate-failures")]
    pub isolate_failures: bool,

    /// Delay applied to every call of the simulated authority, in milliseconds
    #[arg(long = "latency-ms", value_name = "MILLIS", default_value_t = 0)]
    pub latency_ms: u64
}

impl CliArgs {
    pub fn to_sync_config(&self) -> SyncConfig {
        let failure_policy = if self.isolate_failures {
            FailurePolicy::Isolate
        } else {
            FailurePolicy::Abort
        };

        SyncConfig {
            output_path: self.output_path.clone(),
            errors_path: self.errors_path.clone(),
            failure_policy
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn level_filter(&self) -> LevelFilter {
        parse_log_level(&self.log_level)
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}
