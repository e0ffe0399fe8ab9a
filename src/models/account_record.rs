use crate::models::errors::RejectionReason;
use crate::types::{AccountId, Balance, BranchId};

/// Represents a single data line from the input CSV file.
///
/// The record is built leniently: missing fields become empty text and a balance
/// that is absent or not a number becomes `None`. Deciding whether the row can be
/// synchronized is left to [`AccountRecord::validate`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AccountRecord {
    /// The branch (agencia) the account belongs to.
    pub branch: BranchId,
    /// The account (conta) identifier within the branch.
    pub account: AccountId,
    /// The balance to synchronize, if one could be parsed.
    pub balance: Option<Balance>
}

impl AccountRecord {
    pub fn new(branch: impl Into<BranchId>, account: impl Into<AccountId>, balance: Option<Balance>) -> Self {
        Self {
            branch: branch.into(),
            account: account.into(),
            balance
        }
    }

    /// Parses one raw line of the form `branch,account,balance`.
    ///
    /// Never fails. Fields beyond the third are ignored.
    pub fn from_line(line: &str) -> Self {
        let mut fields = line.split(',');

        let branch = fields.next().unwrap_or_default();
        let account = fields.next().unwrap_or_default();
        let balance = fields.next().and_then(|text| text.parse::<Balance>().ok());

        Self::new(branch, account, balance)
    }

    /// Classifies the record.
    ///
    /// Returns the balance when the record can be sent to the update authority,
    /// otherwise every applicable reason in branch, account, balance order.
    pub fn validate(&self) -> Result<Balance, Vec<RejectionReason>> {
        let mut reasons = Vec::new();

        if self.branch.trim().is_empty() {
            reasons.push(RejectionReason::EmptyBranch);
        }

        if self.account.trim().is_empty() {
            reasons.push(RejectionReason::EmptyAccount);
        }

        match &self.balance {
            Some(balance) if reasons.is_empty() => Ok(balance.clone()),
            Some(_) => Err(reasons),
            None => {
                reasons.push(RejectionReason::EmptyBalance);
                Err(reasons)
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn rejection_reasons(&self) -> Vec<RejectionReason> {
        self.validate().err().unwrap_or_default()
    }
}
