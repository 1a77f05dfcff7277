use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of a repayment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Installment {
    /// 1-based payment number.
    pub month: u32,
    pub payment: Decimal,
    /// Interest accrued on the opening balance of the month.
    pub interest: Decimal,
    /// Part of the payment that reduces the principal.
    pub principal: Decimal,
    /// Principal still owed after this payment.
    pub remaining: Decimal,
}

/// Full repayment table of a fixed-payment loan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AmortizationSchedule {
    pub payment: Decimal,
    pub installments: Vec<Installment>,
    pub total_paid: Decimal,
    pub total_interest: Decimal,
}

impl AmortizationSchedule {
    /// Installment for a 1-based month, if the loan runs that long.
    pub fn installment(&self, month: u32) -> Option<&Installment> {
        month
            .checked_sub(1)
            .and_then(|idx| self.installments.get(idx as usize))
    }

    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }
}
