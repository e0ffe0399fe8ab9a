use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "OUTPUT.csv";
pub const DEFAULT_ERRORS_PATH: &str = "ERROS.csv";

/// What the engine does when a call to the update authority fails.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum FailurePolicy {
    /// Stop the run and surface the error. No output files are written.
    #[default]
    Abort,
    /// Route the row to the failure output and keep going.
    Isolate
}

/// Where the engine writes its results and how it treats authority failures.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SyncConfig {
    /// Destination of the successfully processed accounts.
    pub output_path: PathBuf,
    /// Destination of the rejected rows.
    pub errors_path: PathBuf,
    pub failure_policy: FailurePolicy
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            errors_path: PathBuf::from(DEFAULT_ERRORS_PATH),
            failure_policy: FailurePolicy::default()
        }
    }
}
