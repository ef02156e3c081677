//! Client-side business rules for transactions, installment plans, cards and
//! invoices.
//!
//! Every validator is a pure function: it takes a plain input record (plus
//! the current day where dates matter) and returns the full list of
//! [`ValidationError`]s. An empty list means the input is valid. Validators
//! never stop at the first violation and never fail.
//!
//! [`Validator`] wraps the same functions behind a [`Clock`] so call sites
//! don't have to fetch "today" themselves.
//!
//! These rules mirror a subset of the backend checks; the backend stays the
//! authority.

use chrono::NaiveDate;

pub use cards::{CardInput, CardType, validate_card, validate_credit_card};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{EngineError, ValidationError};
pub use installments::{InstallmentInput, validate_installment};
pub use invoices::{InvoiceInput, validate_invoice};
pub use lookup::{
    all_validation_errors, dedup_by_field, field_error, first_validation_error, has_field_error,
};
pub use money::MoneyCents;
pub use transactions::{TransactionInput, TransactionKind, TransactionStatus, validate_transaction};
pub use util::last_day_of_month;

pub mod cards;
mod clock;
mod error;
pub mod installments;
pub mod invoices;
mod lookup;
mod money;
pub mod transactions;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

/// Field names reported in [`ValidationError::field`]. They match the keys of
/// the UI payloads.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const AMOUNT: &str = "amount";
    pub const DESCRIPTION: &str = "description";
    pub const DESTINATION: &str = "destination";
    pub const STATUS: &str = "status";
    pub const TOTAL_INSTALLMENTS: &str = "totalInstallments";
    pub const TOTAL_AMOUNT: &str = "totalAmount";
    pub const FIRST_PAYMENT_DATE: &str = "firstPaymentDate";
    pub const NAME: &str = "name";
    pub const LIMIT: &str = "limit";
    pub const CLOSE_DAY: &str = "closeDay";
    pub const DUE_DAY: &str = "dueDay";
    pub const MONTH: &str = "month";
    pub const YEAR: &str = "year";
    pub const LIMIT_TOTAL: &str = "limitTotal";
    pub const AMOUNT_PAID: &str = "amountPaid";
}

/// Parse a calendar day typed by the user, either ISO (`2025-06-15`) or the
/// Brazilian display format (`15/06/2025`).
pub fn parse_date(value: &str) -> ResultEngine<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .map_err(|_| EngineError::InvalidDate(trimmed.to_string()))
}

/// Runs the validators against the day reported by its [`Clock`]. The clock
/// is read once per call.
#[derive(Debug, Clone)]
pub struct Validator<C = SystemClock> {
    clock: C,
}

impl Validator {
    /// Return a builder for `Validator`. Help to build the struct.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }
}

impl<C: Clock> Validator<C> {
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn transaction(&self, input: &TransactionInput) -> Vec<ValidationError> {
        let today = self.today();
        let errors = validate_transaction(input, today);
        tracing::debug!(%today, violations = errors.len(), "validated transaction");
        errors
    }

    pub fn installment(&self, input: &InstallmentInput) -> Vec<ValidationError> {
        let today = self.today();
        let errors = validate_installment(input, today);
        tracing::debug!(%today, violations = errors.len(), "validated installment");
        errors
    }

    pub fn card(&self, input: &CardInput) -> Vec<ValidationError> {
        let errors = validate_card(input);
        tracing::debug!(violations = errors.len(), "validated card");
        errors
    }

    pub fn credit_card(
        &self,
        limit: MoneyCents,
        close_day: i64,
        due_day: i64,
    ) -> Vec<ValidationError> {
        let errors = validate_credit_card(limit, close_day, due_day);
        tracing::debug!(violations = errors.len(), "validated credit card terms");
        errors
    }

    pub fn invoice(&self, input: &InvoiceInput) -> Vec<ValidationError> {
        let today = self.today();
        let errors = validate_invoice(input, today);
        tracing::debug!(%today, violations = errors.len(), "validated invoice");
        errors
    }
}

/// The builder for `Validator`
#[derive(Debug, Default)]
pub struct ValidatorBuilder<C = SystemClock> {
    clock: C,
}

impl<C: Clock> ValidatorBuilder<C> {
    /// Replace the clock, e.g. with a [`FixedClock`] in tests.
    pub fn clock<D: Clock>(self, clock: D) -> ValidatorBuilder<D> {
        ValidatorBuilder { clock }
    }

    /// Construct `Validator`
    pub fn build(self) -> Validator<C> {
        Validator { clock: self.clock }
    }
}
