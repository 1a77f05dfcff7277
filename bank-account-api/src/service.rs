use rust_decimal::Decimal;

use crate::error::AccountResult;

/// Operations offered by a single bank account.
///
/// Deposits and withdrawals mutate the balance in place; the loan
/// calculations are pure and never read or change it. Implementations are
/// single-owner and synchronous: sharing one across threads requires
/// external locking.
pub trait AccountService {
    /// Current balance in whole currency units.
    fn balance(&self) -> i64;

    /// Add `amount` to the balance and return the new balance.
    ///
    /// # Returns
    /// * `Err(AccountError::InvalidArgument)` - If `amount` is negative
    fn deposit(&mut self, amount: i64) -> AccountResult<i64>;

    /// Take `amount` from the balance if it is covered.
    ///
    /// # Returns
    /// * `Ok(true)` - The balance was reduced by `amount`
    /// * `Ok(false)` - Insufficient funds; the balance is unchanged
    /// * `Err(AccountError::InvalidArgument)` - If `amount` is negative
    fn withdraw(&mut self, amount: i64) -> AccountResult<bool>;

    /// Fixed periodic payment that fully amortizes `total_amount` over
    /// `n_payments` periods at `interest` per period.
    fn payment(
        &self,
        total_amount: Decimal,
        interest: Decimal,
        n_payments: i32,
    ) -> AccountResult<Decimal>;

    /// Principal still owed after `month` payments.
    fn pending(
        &self,
        amount: Decimal,
        interest: Decimal,
        n_payments: i32,
        month: i32,
    ) -> AccountResult<Decimal>;
}
