use serde::Serialize;

use crate::models::AccountRecord;
use crate::types::{AccountId, Balance, BranchId};

/// A validated record paired with the outcome reported by the update authority.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct UpdatedAccountRecord {
    #[serde(rename = "agencia")]
    pub branch: BranchId,
    #[serde(rename = "conta")]
    pub account: AccountId,
    #[serde(rename = "saldo")]
    pub balance: Balance,
    /// Whether the authority accepted the update, recorded verbatim.
    pub status: bool
}

impl UpdatedAccountRecord {
    pub fn new(record: AccountRecord, balance: Balance, status: bool) -> Self {
        Self {
            branch: record.branch,
            account: record.account,
            balance,
            status
        }
    }
}
