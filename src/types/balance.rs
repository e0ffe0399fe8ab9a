use crate::types::errors::BalanceError;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Account balance as read from the input file.
///
/// The validated text is kept and rendered back unchanged, so `90.0` stays `90.0`
/// and values beyond `Decimal` range or precision still round-trip exactly.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Balance {
    text: String,
    value: Option<Decimal>
}

impl Balance {
    /// The numeric value, when it fits in a `Decimal` without overflow.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for Balance {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

impl Serialize for Balance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl FromStr for Balance {
    type Err = BalanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(BalanceError::Empty);
        }

        if !is_decimal_literal(value) {
            return Err(BalanceError::InvalidFormat(format!("Value is not a decimal number: '{value}'")));
        }

        let decimal = if value.contains(['e', 'E']) {
            Decimal::from_scientific(value).ok()
        } else {
            Decimal::from_str(value).ok()
        };

        Ok(Balance {
            text: value.to_string(),
            value: decimal
        })
    }
}

/// `[+-]digits[.digits][(e|E)[+-]digits]`, with at least one mantissa digit on
/// either side of the point.
fn is_decimal_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None)
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());

    if integer.is_empty() && fraction.is_empty() {
        return false;
    }

    if !all_digits(integer) || !all_digits(fraction) {
        return false;
    }

    match exponent {
        Some(exponent) => {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !digits.is_empty() && all_digits(digits)
        }
        None => true
    }
}
