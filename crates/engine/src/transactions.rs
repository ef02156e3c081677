//! Transaction rules.
//!
//! Statuses and kinds are closed enums inside the engine. The Portuguese
//! labels the UI shows (`Pendente`, `Pago`, ...) and the integer codes the
//! backend sends only exist at the serde / `TryFrom` boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, ValidationError, fields, util::trimmed_len};

pub const TITLE_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 300;
pub const DESTINATION_MAX_LEN: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Pago")]
    Paid,
    #[serde(rename = "Atrasado")]
    Overdue,
}

impl TransactionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Paid => "Pago",
            Self::Overdue => "Atrasado",
        }
    }
}

impl TryFrom<&str> for TransactionStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Pendente" => Ok(Self::Pending),
            "Pago" => Ok(Self::Paid),
            "Atrasado" => Ok(Self::Overdue),
            other => Err(EngineError::InvalidStatus(other.to_string())),
        }
    }
}

/// Backend status codes.
impl TryFrom<i64> for TransactionStatus {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Paid),
            2 => Ok(Self::Overdue),
            other => Err(EngineError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "Receita")]
    Income,
    #[serde(rename = "Despesa")]
    Expense,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Receita",
            Self::Expense => "Despesa",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Receita" => Ok(Self::Income),
            "Despesa" => Ok(Self::Expense),
            other => Err(EngineError::InvalidKind(other.to_string())),
        }
    }
}

impl TryFrom<i64> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Income),
            1 => Ok(Self::Expense),
            other => Err(EngineError::InvalidKind(other.to_string())),
        }
    }
}

/// Fields of the transaction form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub title: String,
    pub amount: MoneyCents,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub status: TransactionStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

/// Check a transaction against every rule and return all violations.
///
/// The date/status rules only run when a date is given and compare calendar
/// days: anything after `today` is future, anything before it is past, and
/// `today` itself is neither.
pub fn validate_transaction(input: &TransactionInput, today: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let title_len = trimmed_len(&input.title);
    if title_len == 0 {
        errors.push(ValidationError::new(fields::TITLE, "O título é obrigatório"));
    } else if title_len > TITLE_MAX_LEN {
        errors.push(ValidationError::new(
            fields::TITLE,
            format!("O título deve ter no máximo {TITLE_MAX_LEN} caracteres"),
        ));
    }

    if !input.amount.is_positive() {
        errors.push(ValidationError::new(
            fields::AMOUNT,
            "O valor deve ser maior que zero",
        ));
    }

    if let Some(description) = &input.description
        && trimmed_len(description) > DESCRIPTION_MAX_LEN
    {
        errors.push(ValidationError::new(
            fields::DESCRIPTION,
            format!("A descrição deve ter no máximo {DESCRIPTION_MAX_LEN} caracteres"),
        ));
    }

    if let Some(destination) = &input.destination
        && trimmed_len(destination) > DESTINATION_MAX_LEN
    {
        errors.push(ValidationError::new(
            fields::DESTINATION,
            format!("O destino deve ter no máximo {DESTINATION_MAX_LEN} caracteres"),
        ));
    }

    if let Some(date) = input.date {
        let status = input.status;
        if date > today && matches!(status, TransactionStatus::Paid | TransactionStatus::Overdue)
        {
            errors.push(ValidationError::new(
                fields::STATUS,
                format!(
                    "Uma transação futura não pode ter o status \"{}\"",
                    status.label()
                ),
            ));
        }
        if date < today && status == TransactionStatus::Pending {
            errors.push(ValidationError::new(
                fields::STATUS,
                "Uma transação passada não pode ter o status \"Pendente\"",
            ));
        }
    }

    errors
}
