use serde::Serialize;

use crate::models::{AccountRecord, RejectionReason};
use crate::types::Balance;

/// A record that could not be synchronized, with every reason found for it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RejectedAccount {
    pub record: AccountRecord,
    pub reasons: Vec<RejectionReason>
}

/// Row shape of the failure output: `agencia,conta,saldo,erro(s)`.
#[derive(Debug, Serialize)]
pub struct RejectedAccountRow<'a> {
    pub branch: &'a str,
    pub account: &'a str,
    pub balance: Option<&'a Balance>,
    pub reasons: String
}

impl RejectedAccount {
    pub fn new(record: AccountRecord, reasons: Vec<RejectionReason>) -> Self {
        Self { record, reasons }
    }

    /// Renders the reasons as a bracketed list with every entry terminated by `;`,
    /// e.g. `[Agencia vazia;Saldo vazio;]`.
    pub fn reasons_label(&self) -> String {
        let mut label = String::from("[");

        for reason in &self.reasons {
            label.push_str(&reason.to_string());
            label.push(';');
        }

        label.push(']');
        label
    }

    pub fn to_row(&self) -> RejectedAccountRow<'_> {
        RejectedAccountRow {
            branch: &self.record.branch,
            account: &self.record.account,
            balance: self.record.balance.as_ref(),
            reasons: self.reasons_label()
        }
    }
}
