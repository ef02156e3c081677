//! Card rules.
//!
//! `validate_card` and `validate_credit_card` are both called by the card
//! form, so they share the credit terms checks below and report identical
//! errors for the same value. Use [`dedup_by_field`](crate::dedup_by_field)
//! when composing them.

use serde::{Deserialize, Serialize};

use crate::{
    EngineError, MoneyCents, ValidationError, fields,
    util::{day_in_range, trimmed_len},
};

pub const NAME_MAX_LEN: usize = 50;
/// Credit card close/due days are plain day-of-month numbers.
pub const MAX_BILLING_DAY: u32 = 31;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum CardType {
    DebitCard = 0,
    CreditCard = 1,
}

impl CardType {
    pub fn label(self) -> &'static str {
        match self {
            Self::DebitCard => "Débito",
            Self::CreditCard => "Crédito",
        }
    }
}

impl TryFrom<i64> for CardType {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::DebitCard),
            1 => Ok(Self::CreditCard),
            other => Err(EngineError::InvalidCardType(other.to_string())),
        }
    }
}

impl From<CardType> for i64 {
    fn from(value: CardType) -> Self {
        value as i64
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInput {
    pub name: String,
    pub card_type: CardType,
    #[serde(default)]
    pub limit: Option<MoneyCents>,
    #[serde(default)]
    pub close_day: Option<i64>,
    #[serde(default)]
    pub due_day: Option<i64>,
}

/// Check the credit terms of a card. Close and due days are not compared to
/// each other here, only `validate_invoice` orders them.
pub fn validate_credit_card(limit: MoneyCents, close_day: i64, due_day: i64) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check_credit_terms(Some(limit), Some(close_day), Some(due_day), &mut errors);
    errors
}

/// Check a card. Credit terms are only looked at for credit cards, and only
/// the ones that are present.
pub fn validate_card(input: &CardInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let name_len = trimmed_len(&input.name);
    if name_len == 0 {
        errors.push(ValidationError::new(
            fields::NAME,
            "O nome do cartão é obrigatório",
        ));
    } else if name_len > NAME_MAX_LEN {
        errors.push(ValidationError::new(
            fields::NAME,
            format!("O nome do cartão deve ter no máximo {NAME_MAX_LEN} caracteres"),
        ));
    }

    if input.card_type == CardType::CreditCard {
        check_credit_terms(input.limit, input.close_day, input.due_day, &mut errors);
    }

    errors
}

fn check_credit_terms(
    limit: Option<MoneyCents>,
    close_day: Option<i64>,
    due_day: Option<i64>,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(limit) = limit
        && !limit.is_positive()
    {
        errors.push(ValidationError::new(
            fields::LIMIT,
            "O limite deve ser maior que zero",
        ));
    }
    if let Some(day) = close_day
        && !day_in_range(day, MAX_BILLING_DAY)
    {
        errors.push(ValidationError::new(
            fields::CLOSE_DAY,
            format!("O dia de fechamento deve estar entre 1 e {MAX_BILLING_DAY}"),
        ));
    }
    if let Some(day) = due_day
        && !day_in_range(day, MAX_BILLING_DAY)
    {
        errors.push(ValidationError::new(
            fields::DUE_DAY,
            format!("O dia de vencimento deve estar entre 1 e {MAX_BILLING_DAY}"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credit(limit: Option<i64>, close_day: Option<i64>, due_day: Option<i64>) -> CardInput {
        CardInput {
            name: "Nubank".to_string(),
            card_type: CardType::CreditCard,
            limit: limit.map(MoneyCents::new),
            close_day,
            due_day,
        }
    }

    #[test]
    fn credit_terms_are_checked_independently() {
        let errors = validate_credit_card(MoneyCents::new(-5), 0, 32);
        let got: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(got, vec![fields::LIMIT, fields::CLOSE_DAY, fields::DUE_DAY]);
    }

    #[test]
    fn close_after_due_is_fine_for_cards() {
        assert!(validate_credit_card(MoneyCents::new(1000), 28, 5).is_empty());
    }

    #[test]
    fn debit_card_ignores_credit_terms() {
        let card = CardInput {
            card_type: CardType::DebitCard,
            ..credit(Some(0), Some(99), Some(-1))
        };
        assert!(validate_card(&card).is_empty());
    }

    #[test]
    fn credit_card_checks_only_present_terms() {
        assert!(validate_card(&credit(None, None, None)).is_empty());

        let errors = validate_card(&credit(Some(0), None, Some(40)));
        let got: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(got, vec![fields::LIMIT, fields::DUE_DAY]);
    }

    #[test]
    fn card_matches_credit_card_for_same_terms() {
        let card = validate_card(&credit(Some(0), Some(35), Some(20)));
        let terms = validate_credit_card(MoneyCents::ZERO, 35, 20);
        assert_eq!(card, terms);
    }

    #[test]
    fn name_is_required_and_bounded() {
        let blank = CardInput {
            name: " ".to_string(),
            ..credit(None, None, None)
        };
        assert_eq!(validate_card(&blank)[0].field, fields::NAME);

        let long = CardInput {
            name: "n".repeat(51),
            ..credit(None, None, None)
        };
        assert_eq!(validate_card(&long).len(), 1);
    }

    #[test]
    fn card_type_decodes_from_backend_code() {
        let card: CardInput =
            serde_json::from_str(r#"{"name":"Inter","cardType":1,"limit":500000,"closeDay":3,"dueDay":10}"#)
                .unwrap();
        assert_eq!(card.card_type, CardType::CreditCard);
        assert_eq!(card.card_type.label(), "Crédito");
        assert!(serde_json::from_str::<CardInput>(r#"{"name":"x","cardType":2}"#).is_err());
        assert_eq!(serde_json::to_value(CardType::DebitCard).unwrap(), 0);
    }
}
