use std::thread::sleep;
use std::time::Duration;

use tracing::debug;

use crate::authority::{AuthorityError, UpdateAuthority};
use crate::models::AccountRecord;

/// Stand-in for the remote authority used by the command line binary.
///
/// Blocks for the configured latency on every call and accepts every update.
pub struct SimulatedAuthority {
    latency: Duration
}

impl SimulatedAuthority {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedAuthority {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl UpdateAuthority for SimulatedAuthority {
    fn attempt_update(&self, record: &AccountRecord) -> Result<bool, AuthorityError> {
        if !self.latency.is_zero() {
            sleep(self.latency);
        }

        debug!("Authority accepted update for account [{}]:[{}]", record.branch, record.account);

        Ok(true)
    }
}
