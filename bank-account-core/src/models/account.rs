use bank_account_api::{validation, AccountError, AccountResult, AccountService};
use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::loan;

/// A single bank account holding a whole-unit balance.
///
/// The initial balance is taken as given, negative values included. After
/// construction only `deposit` and `withdraw` change it, and `withdraw` never
/// takes it below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Account {
    balance: i64,
}

impl Account {
    pub fn new(initial_balance: i64) -> Self {
        Self {
            balance: initial_balance,
        }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Add a non-negative amount and return the new balance.
    ///
    /// # Returns
    /// * `Ok(balance)` - The balance after the deposit
    /// * `Err(AccountError::InvalidArgument)` - If `amount` is negative or the
    ///   resulting balance does not fit in an `i64`; the balance is unchanged
    pub fn deposit(&mut self, amount: i64) -> AccountResult<i64> {
        let amount = validation::non_negative_amount("amount", amount)
            .inspect_err(|err| warn!(%err, "deposit rejected"))?;
        let balance = self.balance.checked_add(amount).ok_or_else(|| {
            let err = AccountError::invalid_argument(
                "amount",
                format!("overflows the current balance of {}", self.balance),
            );
            warn!(%err, "deposit rejected");
            err
        })?;

        self.balance = balance;
        debug!(amount, balance, "deposit applied");
        Ok(balance)
    }

    /// Take a non-negative amount if the balance covers it.
    ///
    /// Insufficient funds is a normal outcome reported as `Ok(false)`, not an
    /// error.
    pub fn withdraw(&mut self, amount: i64) -> AccountResult<bool> {
        let amount = validation::non_negative_amount("amount", amount)
            .inspect_err(|err| warn!(%err, "withdraw rejected"))?;

        if amount > self.balance {
            debug!(amount, balance = self.balance, "withdraw refused: insufficient funds");
            return Ok(false);
        }

        self.balance -= amount;
        debug!(amount, balance = self.balance, "withdraw applied");
        Ok(true)
    }

    /// See [`loan::payment`]. Does not touch the balance.
    pub fn payment(
        &self,
        total_amount: Decimal,
        interest: Decimal,
        n_payments: i32,
    ) -> AccountResult<Decimal> {
        loan::payment(total_amount, interest, n_payments)
    }

    /// See [`loan::pending`]. Does not touch the balance.
    pub fn pending(
        &self,
        amount: Decimal,
        interest: Decimal,
        n_payments: i32,
        month: i32,
    ) -> AccountResult<Decimal> {
        loan::pending(amount, interest, n_payments, month)
    }
}

impl AccountService for Account {
    fn balance(&self) -> i64 {
        Account::balance(self)
    }

    fn deposit(&mut self, amount: i64) -> AccountResult<i64> {
        Account::deposit(self, amount)
    }

    fn withdraw(&mut self, amount: i64) -> AccountResult<bool> {
        Account::withdraw(self, amount)
    }

    fn payment(
        &self,
        total_amount: Decimal,
        interest: Decimal,
        n_payments: i32,
    ) -> AccountResult<Decimal> {
        Account::payment(self, total_amount, interest, n_payments)
    }

    fn pending(
        &self,
        amount: Decimal,
        interest: Decimal,
        n_payments: i32,
        month: i32,
    ) -> AccountResult<Decimal> {
        Account::pending(self, amount, interest, n_payments, month)
    }
}
