use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::{debug, warn};

use crate::authority::UpdateAuthority;
use crate::engine::csv_output::{write_rejected_accounts, write_updated_accounts};
use crate::engine::{EngineError, FailurePolicy, SyncConfig};
use crate::models::{AccountRecord, RejectedAccount, RejectionReason, UpdatedAccountRecord};

/// Counts reported once a run has written both output files.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SyncSummary {
    /// Rows written to the success output.
    pub updated: usize,
    /// Rows written to the failure output.
    pub rejected: usize,
    /// Rejected rows caused by an isolated authority failure.
    pub update_failures: usize
}

#[derive(Default)]
struct SyncBatch {
    updated: Vec<UpdatedAccountRecord>,
    rejected: Vec<RejectedAccount>,
    update_failures: usize
}

impl SyncBatch {
    fn summary(&self) -> SyncSummary {
        SyncSummary {
            updated: self.updated.len(),
            rejected: self.rejected.len(),
            update_failures: self.update_failures
        }
    }
}

/// Single threaded account synchronization pipeline.
pub struct SyncEngine<A: UpdateAuthority> {
    authority: A,
    config: SyncConfig
}

impl<A: UpdateAuthority> SyncEngine<A> {
    /// Creates a new engine that reports updates to `authority`.
    pub fn new(authority: A, config: SyncConfig) -> Self {
        Self { authority, config }
    }

    /// Runs the whole pipeline for the CSV file at `input_path`.
    ///
    /// The input is read completely before anything is written, the first line is
    /// discarded as a header, and every other line ends up in exactly one of the two
    /// outputs, in input order. Both output files are recreated on every run.
    ///
    /// # Errors
    /// - `InputAccess` if the input cannot be read. No output is written.
    /// - `Authority` if an update call fails under `FailurePolicy::Abort`. No output is written.
    /// - `OutputAccess` if either output cannot be written. A success file written
    ///   before the failure is left in place.
    pub fn run(&self, input_path: &Path) -> Result<SyncSummary, EngineError> {
        let bytes = fs::read(input_path).map_err(|error| EngineError::input_access(input_path, error))?;
        let contents = String::from_utf8_lossy(&bytes);

        let mut batch = SyncBatch::default();

        for (index, line) in contents.lines().enumerate().skip(1) {
            self.process_line(line, index + 1, &mut batch)?;
        }

        self.export(&batch)?;

        Ok(batch.summary())
    }

    fn process_line(&self, line: &str, line_number: usize, batch: &mut SyncBatch) -> Result<(), EngineError> {
        let record = AccountRecord::from_line(line);

        let balance = match record.validate() {
            Ok(balance) => balance,
            Err(reasons) => {
                debug!("Line [{line_number}] rejected: {reasons:?}");
                batch.rejected.push(RejectedAccount::new(record, reasons));
                return Ok(());
            }
        };

        match self.authority.attempt_update(&record) {
            Ok(status) => {
                debug!("Line [{line_number}] account [{}]:[{}] updated with status [{status}]", record.branch, record.account);
                batch.updated.push(UpdatedAccountRecord::new(record, balance, status));
            }
            Err(error) => match self.config.failure_policy {
                FailurePolicy::Abort => return Err(EngineError::authority(line_number, error)),
                FailurePolicy::Isolate => {
                    warn!("Line [{line_number}] {error}");
                    batch.update_failures += 1;
                    batch.rejected.push(RejectedAccount::new(record, vec![RejectionReason::UpdateFailed]));
                }
            }
        }

        Ok(())
    }

    fn export(&self, batch: &SyncBatch) -> Result<(), EngineError> {
        let output_path = &self.config.output_path;
        let output = File::create(output_path).map_err(|error| EngineError::output_access(output_path, error))?;

        write_updated_accounts(BufWriter::new(output), &batch.updated)
            .map_err(|error| EngineError::output_access(output_path, error))?;

        let errors_path = &self.config.errors_path;
        let errors = File::create(errors_path).map_err(|error| EngineError::output_access(errors_path, error))?;

        write_rejected_accounts(BufWriter::new(errors), &batch.rejected)
            .map_err(|error| EngineError::output_access(errors_path, error))?;

        Ok(())
    }
}
