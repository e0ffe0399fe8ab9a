use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::models::{RejectedAccount, UpdatedAccountRecord};

pub const UPDATED_ACCOUNTS_HEADER: [&str; 4] = ["agencia", "conta", "saldo", "status"];
pub const REJECTED_ACCOUNTS_HEADER: [&str; 4] = ["agencia", "conta", "saldo", "erro(s)"];

// Fields are echoed exactly as read from the input, quotes included.

/// Writes the success output. The header is written even when `accounts` is empty.
pub fn write_updated_accounts<W: Write>(output: W, accounts: &[UpdatedAccountRecord]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    writer.write_record(UPDATED_ACCOUNTS_HEADER)?;

    for account in accounts {
        writer.serialize(account)?;
    }

    writer.flush()?;

    Ok(())
}

/// Writes the failure output. The header is written even when `accounts` is empty.
pub fn write_rejected_accounts<W: Write>(output: W, accounts: &[RejectedAccount]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    writer.write_record(REJECTED_ACCOUNTS_HEADER)?;

    for account in accounts {
        writer.serialize(account.to_row())?;
    }

    writer.flush()?;

    Ok(())
}
