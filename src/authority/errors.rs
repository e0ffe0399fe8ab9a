use thiserror::Error;

use crate::models::AccountRecord;
use crate::types::{AccountId, BranchId};

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum AuthorityError {
    #[error("Update authority unavailable for account [{branch}]:[{account}]: {message}")]
    Unavailable {
        branch: BranchId,
        account: AccountId,
        message: String
    }
}

impl AuthorityError {
    pub fn unavailable(record: &AccountRecord, message: impl Into<String>) -> Self {
        Self::Unavailable {
            branch: record.branch.clone(),
            account: record.account.clone(),
            message: message.into()
        }
    }
}
