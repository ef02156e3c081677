//! Invoice rules.
//!
//! Close and due days are bounded by the length of the month *today* falls
//! in, not by the invoice's own `month`/`year`. That is how the invoice form
//! behaves today; switching to the invoice month means passing the invoice
//! date to [`last_day_of_month`](crate::last_day_of_month) instead of `today`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    MoneyCents, ValidationError, fields,
    util::{day_in_range, last_day_of_month},
};

pub const MIN_INVOICE_YEAR: i64 = 2024;
/// How far ahead of the current year an invoice may be issued.
pub const MAX_YEARS_AHEAD: i64 = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInput {
    pub month: i64,
    pub year: i64,
    pub close_day: i64,
    pub due_day: i64,
    #[serde(default)]
    pub limit_total: Option<MoneyCents>,
    #[serde(default)]
    pub amount_paid: Option<MoneyCents>,
}

pub fn validate_invoice(input: &InvoiceInput, today: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !(1..=12).contains(&input.month) {
        errors.push(ValidationError::new(
            fields::MONTH,
            "O mês deve estar entre 1 e 12",
        ));
    }

    let max_year = i64::from(today.year()) + MAX_YEARS_AHEAD;
    if !(MIN_INVOICE_YEAR..=max_year).contains(&input.year) {
        errors.push(ValidationError::new(
            fields::YEAR,
            format!("O ano deve estar entre {MIN_INVOICE_YEAR} e {max_year}"),
        ));
    }

    let last_day = last_day_of_month(today);
    if !day_in_range(input.close_day, last_day) {
        errors.push(ValidationError::new(
            fields::CLOSE_DAY,
            format!("O dia de fechamento deve estar entre 1 e {last_day}"),
        ));
    }
    if !day_in_range(input.due_day, last_day) {
        errors.push(ValidationError::new(
            fields::DUE_DAY,
            format!("O dia de vencimento deve estar entre 1 e {last_day}"),
        ));
    }
    if input.close_day >= input.due_day {
        errors.push(ValidationError::new(
            fields::CLOSE_DAY,
            "O dia de fechamento deve ser anterior ao dia de vencimento",
        ));
    }

    if let Some(limit_total) = input.limit_total
        && limit_total.is_negative()
    {
        errors.push(ValidationError::new(
            fields::LIMIT_TOTAL,
            "O limite total não pode ser negativo",
        ));
    }
    if let Some(amount_paid) = input.amount_paid
        && amount_paid.is_negative()
    {
        errors.push(ValidationError::new(
            fields::AMOUNT_PAID,
            "O valor pago não pode ser negativo",
        ));
    }
    if let (Some(limit_total), Some(amount_paid)) = (input.limit_total, input.amount_paid)
        && limit_total < amount_paid
    {
        errors.push(ValidationError::new(
            fields::LIMIT_TOTAL,
            "O limite total não pode ser menor que o valor pago",
        ));
    }

    errors
}
