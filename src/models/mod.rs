mod account_record;
mod errors;
mod rejected_account;
mod updated_account;

pub use account_record::AccountRecord;
pub use errors::RejectionReason;
pub use rejected_account::{RejectedAccount, RejectedAccountRow};
pub use updated_account::UpdatedAccountRecord;
