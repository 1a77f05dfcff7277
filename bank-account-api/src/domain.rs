use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AccountError, AccountResult};
use crate::validation;

/// Validated parameters of an amortizing loan.
///
/// Loan terms are never stored on an account; they are built per calculation
/// and discarded afterwards. Fields are private and deserialization goes
/// through [`LoanTerms::new`], so every value satisfies the bounds below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLoanTerms")]
pub struct LoanTerms {
    principal: Decimal,
    interest: Decimal,
    n_payments: u32,
}

/// Unchecked wire form of [`LoanTerms`].
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawLoanTerms {
    principal: Decimal,
    interest: Decimal,
    n_payments: i32,
}

impl TryFrom<RawLoanTerms> for LoanTerms {
    type Error = AccountError;

    fn try_from(raw: RawLoanTerms) -> Result<Self, Self::Error> {
        LoanTerms::new(raw.principal, raw.interest, raw.n_payments)
    }
}

impl LoanTerms {
    /// Validate raw loan inputs.
    ///
    /// # Arguments
    /// * `principal` - Amount borrowed
    /// * `interest` - Monthly rate, e.g. `0.01` for 1%
    /// * `n_payments` - Number of monthly payments
    ///
    /// # Returns
    /// * `Err(AccountError::InvalidArgument)` - If the principal is negative, the
    ///   rate lies outside `[0, 1]`, or the payment count is not positive
    pub fn new(principal: Decimal, interest: Decimal, n_payments: i32) -> AccountResult<Self> {
        Ok(Self {
            principal: validation::non_negative_decimal("total_amount", principal)?,
            interest: validation::rate("interest", interest)?,
            n_payments: validation::payment_count("n_payments", n_payments)?,
        })
    }

    /// Principal borrowed, never negative.
    pub fn principal(&self) -> Decimal {
        self.principal
    }

    /// Periodic (monthly) rate as a fraction, within `[0, 1]`.
    pub fn interest(&self) -> Decimal {
        self.interest
    }

    /// Number of equal payments, at least one.
    pub fn n_payments(&self) -> u32 {
        self.n_payments
    }

    pub fn is_interest_free(&self) -> bool {
        self.interest.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_terms() {
        let terms = LoanTerms::new(dec!(10000), dec!(0.01), 12).unwrap();
        assert_eq!(terms.principal(), dec!(10000));
        assert_eq!(terms.interest(), dec!(0.01));
        assert_eq!(terms.n_payments(), 12);
        assert!(!terms.is_interest_free());
    }

    #[test]
    fn test_invalid_terms() {
        assert!(LoanTerms::new(dec!(-10000), dec!(0.01), 12).is_err());
        assert!(LoanTerms::new(dec!(10000), dec!(-0.01), 12).is_err());
        assert!(LoanTerms::new(dec!(10000), dec!(1.01), 12).is_err());
        assert!(LoanTerms::new(dec!(10000), dec!(0.01), -12).is_err());
        assert!(LoanTerms::new(dec!(10000), dec!(0.01), 0).is_err());
    }

    #[test]
    fn test_terms_serialize_decimals_as_strings() {
        let terms = LoanTerms::new(dec!(10000), dec!(0.01), 12).unwrap();
        let json = serde_json::to_string(&terms).unwrap();
        assert_eq!(
            json,
            r#"{"principal":"10000","interest":"0.01","n_payments":12}"#
        );

        let back: LoanTerms = serde_json::from_str(&json).unwrap();
        assert_eq!(back, terms);
    }

    #[test]
    fn test_deserializing_invalid_terms_fails() {
        let zero_payments = r#"{"principal":"100","interest":"0","n_payments":0}"#;
        let err = serde_json::from_str::<LoanTerms>(zero_payments).unwrap_err();
        assert!(err.to_string().contains("n_payments"));

        let negative_principal = r#"{"principal":"-1","interest":"0.01","n_payments":12}"#;
        assert!(serde_json::from_str::<LoanTerms>(negative_principal).is_err());

        let rate_above_one = r#"{"principal":"100","interest":"1.5","n_payments":12}"#;
        assert!(serde_json::from_str::<LoanTerms>(rate_above_one).is_err());
    }
}
