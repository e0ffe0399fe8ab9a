mod config;
mod csv_output;
mod errors;
mod sync_engine;

pub use config::{FailurePolicy, SyncConfig, DEFAULT_ERRORS_PATH, DEFAULT_OUTPUT_PATH};
pub use csv_output::{write_rejected_accounts, write_updated_accounts, REJECTED_ACCOUNTS_HEADER, UPDATED_ACCOUNTS_HEADER};
pub use errors::EngineError;
pub use sync_engine::{SyncEngine, SyncSummary};
