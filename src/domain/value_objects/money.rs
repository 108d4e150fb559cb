//! Monetary amounts and employee ids as typed by a user or read from disk
//!
//! Amounts are `rust_decimal::Decimal` so the salary formula is exact.
//! Parsing is culture-invariant: `.` is the only decimal separator.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Largest accepted basic pay or allowance (one trillion)
///
/// Keeps every salary and any realistic payroll total far inside `Decimal`'s
/// range, so the arithmetic never overflows.
pub fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000, 0)
}

/// Share of basic pay withheld as deductions (10%)
pub fn deduction_rate() -> Decimal {
    Decimal::new(10, 2)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("'{value}' is not a number")]
    Invalid { value: String },

    #[error("'{value}' is negative")]
    Negative { value: String },

    #[error("'{value}' is larger than {}", max_amount())]
    TooLarge { value: String },
}

/// Parse a non-negative amount no larger than `max_amount()`.
/// Surrounding whitespace is ignored.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountError> {
    let value = raw.trim();
    let amount = Decimal::from_str(value).map_err(|_| AmountError::Invalid {
        value: value.to_string(),
    })?;
    if amount.is_zero() {
        // "-0" and "-0.00" keep their scale but lose the sign
        return Ok(amount.abs());
    }
    if amount.is_sign_negative() {
        return Err(AmountError::Negative {
            value: value.to_string(),
        });
    }
    if amount > max_amount() {
        return Err(AmountError::TooLarge {
            value: value.to_string(),
        });
    }
    Ok(amount)
}

/// Parse a base-10 employee id. Surrounding whitespace is ignored.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
