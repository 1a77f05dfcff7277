//! Single bank account with whole-unit deposits and withdrawals, plus
//! fixed-payment loan calculations.
//!
//! ```
//! use bank_account_core::Account;
//! use rust_decimal::Decimal;
//!
//! let mut account = Account::new(100);
//! assert_eq!(account.withdraw(50), Ok(true));
//! assert_eq!(account.withdraw(200), Ok(false));
//! assert_eq!(account.deposit(25), Ok(75));
//!
//! let payment = account
//!     .payment(Decimal::from(1200), Decimal::ZERO, 12)
//!     .unwrap();
//! assert_eq!(payment, Decimal::from(100));
//! ```

pub mod loan;
pub mod models;
pub mod utils;

pub use bank_account_api::{AccountError, AccountResult, AccountService, LoanTerms};
pub use models::*;
