//! Fixed-payment (annuity) loan calculations.
//!
//! All functions are pure. Inputs are validated through [`LoanTerms`] before
//! any arithmetic runs. Powers are taken of the discount factor
//! `v = 1 / (1 + i)`, which lies in `[0.5, 1]` and only shrinks, so long
//! terms at high rates stay within `Decimal` range.

use bank_account_api::{validation, AccountResult, LoanTerms};
use rust_decimal::{Decimal, MathematicalOps};
use tracing::{debug, warn};

use crate::models::{AmortizationSchedule, Installment};
use crate::utils::overflow;

/// Periodic payment for raw loan inputs.
///
/// `payment = P * i / (1 - (1 + i)^-n)`, or `P / n` when `i == 0`.
pub fn payment(total_amount: Decimal, interest: Decimal, n_payments: i32) -> AccountResult<Decimal> {
    let terms = LoanTerms::new(total_amount, interest, n_payments)
        .inspect_err(|err| warn!(%err, "payment rejected"))?;
    let payment = payment_for(&terms)?;
    debug!(%total_amount, %interest, n_payments, %payment, "computed loan payment");
    Ok(payment)
}

/// Principal still owed after `month` payments for raw loan inputs.
///
/// `month == 0` returns `amount` unchanged.
pub fn pending(
    amount: Decimal,
    interest: Decimal,
    n_payments: i32,
    month: i32,
) -> AccountResult<Decimal> {
    let terms = LoanTerms::new(amount, interest, n_payments)
        .inspect_err(|err| warn!(%err, "pending rejected"))?;
    let month = validation::month("month", month, terms.n_payments())
        .inspect_err(|err| warn!(%err, "pending rejected"))?;
    let pending = pending_for(&terms, month)?;
    debug!(%amount, %interest, n_payments, month, %pending, "computed pending principal");
    Ok(pending)
}

/// Periodic payment for already validated terms.
pub fn payment_for(terms: &LoanTerms) -> AccountResult<Decimal> {
    let annuity = annuity_factor(terms, terms.n_payments())?;
    if annuity.is_zero() {
        return Ok(terms.principal() / Decimal::from(terms.n_payments()));
    }

    terms
        .principal()
        .checked_mul(terms.interest())
        .and_then(|v| v.checked_div(annuity))
        .ok_or_else(|| overflow("payment"))
}

/// Principal still owed after `month` payments, `month` in `0..=n_payments`.
///
/// `B_k = P * (1 - v^(n - k)) / (1 - v^n)`, the present value of the
/// payments still due.
pub fn pending_for(terms: &LoanTerms, month: u32) -> AccountResult<Decimal> {
    let n_payments = terms.n_payments();
    if month == 0 {
        return Ok(terms.principal());
    }
    if month >= n_payments {
        return Ok(Decimal::ZERO);
    }

    let total = annuity_factor(terms, n_payments)?;
    if total.is_zero() {
        let remaining = Decimal::from(n_payments - month);
        return terms
            .principal()
            .checked_mul(remaining)
            .map(|v| v / Decimal::from(n_payments))
            .ok_or_else(|| overflow("pending"));
    }

    let outstanding = annuity_factor(terms, n_payments - month)?;
    terms
        .principal()
        .checked_mul(outstanding)
        .and_then(|v| v.checked_div(total))
        .ok_or_else(|| overflow("pending"))
}

/// Month-by-month repayment table for validated terms.
///
/// The last installment pays off whatever is still owed, so the principal
/// column sums to the loan principal and the final payment absorbs the
/// fixed-point residue of the preceding rows. One row is built per payment;
/// the table for a very long loan is correspondingly large.
pub fn schedule(terms: &LoanTerms) -> AccountResult<AmortizationSchedule> {
    let payment = payment_for(terms)?;
    let n_payments = terms.n_payments();
    let mut balance = terms.principal();
    let mut total_paid = Decimal::ZERO;
    let mut installments = Vec::new();

    for month in 1..=n_payments {
        let interest = balance
            .checked_mul(terms.interest())
            .ok_or_else(|| overflow("schedule"))?;
        let (principal, amount) = if month == n_payments {
            let amount = balance
                .checked_add(interest)
                .ok_or_else(|| overflow("schedule"))?;
            (balance, amount)
        } else {
            (payment - interest, payment)
        };
        balance -= principal;
        total_paid = total_paid
            .checked_add(amount)
            .ok_or_else(|| overflow("schedule"))?;

        installments.push(Installment {
            month,
            payment: amount,
            interest,
            principal,
            remaining: balance,
        });
    }

    debug!(n_payments, %payment, %total_paid, "built amortization schedule");

    Ok(AmortizationSchedule {
        payment,
        installments,
        total_paid,
        total_interest: total_paid - terms.principal(),
    })
}

/// `1 - v^periods` with `v = 1 / (1 + interest)`; zero for interest-free terms
/// or a rate too small to register at `Decimal` precision.
fn annuity_factor(terms: &LoanTerms, periods: u32) -> AccountResult<Decimal> {
    let discount = Decimal::ONE / (Decimal::ONE + terms.interest());
    discount
        .checked_powu(u64::from(periods))
        .map(|v| Decimal::ONE - v)
        .ok_or_else(|| overflow("discount factor"))
}
