//! Account synchronization pipeline.
//!
//! Reads a CSV file of `agencia,conta,saldo` rows, sends every valid row to an
//! [`authority::UpdateAuthority`] and writes two CSV files: the updated accounts
//! with the authority's status, and the rejected rows with the reasons they were
//! rejected.

pub mod authority;
pub mod cli;
pub mod engine;
pub mod models;
pub mod types;
