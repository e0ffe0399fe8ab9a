mod balance;
mod errors;

pub use balance::Balance;
pub use errors::BalanceError;

pub type BranchId = String;
pub type AccountId = String;
