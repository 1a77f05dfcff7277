use bank_account_api::AccountError;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency value to two decimal places, midpoints away from zero.
///
/// Loan calculations return full precision; this is for callers that display
/// or book the figures.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Error for an intermediate result that does not fit in a `Decimal`.
pub(crate) fn overflow(operation: &str) -> AccountError {
    AccountError::invalid_argument(operation, "overflows the representable decimal range")
}
