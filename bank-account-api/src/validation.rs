//! Input checks shared by the account and the loan calculator.
//!
//! Each helper returns the value it checked so callers can validate and bind
//! in one step.

use rust_decimal::Decimal;

use crate::error::{AccountError, AccountResult};

/// Rejects negative whole-unit amounts (deposits and withdrawals).
pub fn non_negative_amount(argument: &str, amount: i64) -> AccountResult<i64> {
    if amount < 0 {
        return Err(AccountError::invalid_argument(
            argument,
            format!("must not be negative (got {amount})"),
        ));
    }
    Ok(amount)
}

/// Rejects negative decimal amounts (loan principals).
pub fn non_negative_decimal(argument: &str, amount: Decimal) -> AccountResult<Decimal> {
    if amount < Decimal::ZERO {
        return Err(AccountError::invalid_argument(
            argument,
            format!("must not be negative (got {amount})"),
        ));
    }
    Ok(amount)
}

/// Accepts a periodic rate in the inclusive range `[0, 1]`.
pub fn rate(argument: &str, interest: Decimal) -> AccountResult<Decimal> {
    if interest < Decimal::ZERO || interest > Decimal::ONE {
        return Err(AccountError::invalid_argument(
            argument,
            format!("must be between 0 and 1 inclusive (got {interest})"),
        ));
    }
    Ok(interest)
}

/// Accepts a strictly positive number of payments.
///
/// Zero is refused: with a non-zero rate the annuity denominator
/// `(1 + i)^0 - 1` vanishes, and with a zero rate there is nothing to divide
/// the principal by.
pub fn payment_count(argument: &str, n_payments: i32) -> AccountResult<u32> {
    u32::try_from(n_payments)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            AccountError::invalid_argument(
                argument,
                format!("must be a positive number of payments (got {n_payments})"),
            )
        })
}

/// Accepts a month index in `[0, n_payments]`.
pub fn month(argument: &str, month: i32, n_payments: u32) -> AccountResult<u32> {
    match u32::try_from(month) {
        Ok(m) if m <= n_payments => Ok(m),
        _ => Err(AccountError::invalid_argument(
            argument,
            format!("must be between 0 and {n_payments} (got {month})"),
        )),
    }
}
