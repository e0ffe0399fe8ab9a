use std::io::stderr;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use account_sync_processor::authority::SimulatedAuthority;
use account_sync_processor::cli::CliArgs;
use account_sync_processor::engine::SyncEngine;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    setup_logging(args.level_filter());

    let authority = SimulatedAuthority::new(args.latency());
    let engine = SyncEngine::new(authority, args.to_sync_config());

    let timer = Instant::now();
    let result = engine.run(&args.input_file);
    let duration = timer.elapsed();

    match result {
        Ok(summary) => {
            info!(
                "Synchronized accounts in: {duration:?} | updated [{}] rejected [{}] update failures [{}]",
                summary.updated, summary.rejected, summary.update_failures
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
