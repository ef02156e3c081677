//! Installment plan rules.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{MoneyCents, ValidationError, fields};

pub const MIN_INSTALLMENTS: i64 = 2;
pub const MAX_INSTALLMENTS: i64 = 480;
/// Oldest accepted first payment, in years before today.
pub const MAX_YEARS_IN_PAST: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentInput {
    pub total_installments: i64,
    pub total_amount: MoneyCents,
    pub first_payment_date: NaiveDate,
}

/// Check an installment plan. Future first payments are always accepted; the
/// date rule only catches obviously malformed values.
pub fn validate_installment(input: &InstallmentInput, today: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if input.total_installments < MIN_INSTALLMENTS {
        errors.push(ValidationError::new(
            fields::TOTAL_INSTALLMENTS,
            format!("O número mínimo de parcelas é {MIN_INSTALLMENTS}"),
        ));
    }
    if input.total_installments > MAX_INSTALLMENTS {
        errors.push(ValidationError::new(
            fields::TOTAL_INSTALLMENTS,
            format!("O número máximo de parcelas é {MAX_INSTALLMENTS}"),
        ));
    }

    if !input.total_amount.is_positive() {
        errors.push(ValidationError::new(
            fields::TOTAL_AMOUNT,
            "O valor total deve ser maior que zero",
        ));
    }

    let oldest = today.checked_sub_months(Months::new(MAX_YEARS_IN_PAST * 12));
    if oldest.is_some_and(|oldest| input.first_payment_date < oldest) {
        errors.push(ValidationError::new(
            fields::FIRST_PAYMENT_DATE,
            "A data do primeiro pagamento é inválida",
        ));
    }

    errors
}
