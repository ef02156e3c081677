use chrono::NaiveDate;

use engine::{
    CardInput, CardType, FixedClock, InstallmentInput, InvoiceInput, MoneyCents,
    TransactionInput, TransactionStatus, ValidationError, Validator, dedup_by_field, field_error,
    fields, first_validation_error, has_field_error, validate_card, validate_credit_card,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn validator() -> Validator<FixedClock> {
    Validator::builder()
        .clock(FixedClock(day(2025, 6, 15)))
        .build()
}

fn transaction(date: &str, status: &str) -> TransactionInput {
    TransactionInput {
        title: "Conta de luz".to_string(),
        amount: MoneyCents::new(18_750),
        date: Some(engine::parse_date(date).unwrap()),
        status: TransactionStatus::try_from(status).unwrap(),
        description: Some("Referente a maio".to_string()),
        destination: Some("Enel".to_string()),
    }
}

fn fields_of(errors: &[ValidationError]) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}

#[test]
fn same_input_same_day_same_errors() {
    let validator = validator();
    let input = TransactionInput {
        title: String::new(),
        ..transaction("2025-06-20", "Pago")
    };
    let first = validator.transaction(&input);
    assert_eq!(first, validator.transaction(&input));
    assert_eq!(first.len(), 2);
}

#[test]
fn violations_in_one_field_do_not_hide_others() {
    let input = TransactionInput {
        title: " ".to_string(),
        amount: MoneyCents::new(-100),
        ..transaction("2025-06-01", "Pendente")
    };
    let errors = validator().transaction(&input);
    assert_eq!(
        fields_of(&errors),
        vec![fields::TITLE, fields::AMOUNT, fields::STATUS]
    );
}

#[test]
fn future_paid_transaction_is_rejected() {
    let errors = validator().transaction(&transaction("2025-06-20", "Pago"));
    assert_eq!(fields_of(&errors), vec![fields::STATUS]);
    assert!(errors[0].message.contains("Pago"));
}

#[test]
fn future_pending_transaction_is_accepted() {
    assert!(
        validator()
            .transaction(&transaction("2025-06-20", "Pendente"))
            .is_empty()
    );
}

#[test]
fn past_pending_transaction_is_rejected() {
    let errors = validator().transaction(&transaction("01/06/2025", "Pendente"));
    assert_eq!(fields_of(&errors), vec![fields::STATUS]);
}

#[test]
fn paid_today_is_accepted() {
    assert!(
        validator()
            .transaction(&transaction("2025-06-15", "Pago"))
            .is_empty()
    );
}

#[test]
fn installment_boundaries() {
    let validator = validator();
    let plan = |total_installments| InstallmentInput {
        total_installments,
        total_amount: MoneyCents::new(99_900),
        first_payment_date: day(2025, 7, 5),
    };
    assert!(has_field_error(
        &validator.installment(&plan(1)),
        fields::TOTAL_INSTALLMENTS
    ));
    assert!(validator.installment(&plan(2)).is_empty());
    assert!(validator.installment(&plan(480)).is_empty());
    assert!(has_field_error(
        &validator.installment(&plan(481)),
        fields::TOTAL_INSTALLMENTS
    ));
}

#[test]
fn credit_card_terms() {
    assert!(validate_credit_card(MoneyCents::new(1000), 10, 20).is_empty());

    let errors = validate_credit_card(MoneyCents::ZERO, 10, 20);
    assert_eq!(fields_of(&errors), vec![fields::LIMIT]);

    let errors = validate_credit_card(MoneyCents::new(1000), 35, 20);
    assert_eq!(fields_of(&errors), vec![fields::CLOSE_DAY]);
}

#[test]
fn card_form_composition_can_be_deduplicated() {
    let card = CardInput {
        name: "Itaú Platinum".to_string(),
        card_type: CardType::CreditCard,
        limit: Some(MoneyCents::ZERO),
        close_day: Some(35),
        due_day: Some(20),
    };
    let mut errors = validate_card(&card);
    errors.extend(validate_credit_card(MoneyCents::ZERO, 35, 20));
    assert_eq!(errors.len(), 4);

    let errors = dedup_by_field(errors);
    assert_eq!(fields_of(&errors), vec![fields::LIMIT, fields::CLOSE_DAY]);
}

#[test]
fn invoice_close_day_must_precede_due_day() {
    let validator = validator();
    let invoice = |close_day, due_day| InvoiceInput {
        month: 1,
        year: 2025,
        close_day,
        due_day,
        limit_total: Some(MoneyCents::new(500_000)),
        amount_paid: Some(MoneyCents::new(120_000)),
    };
    assert!(has_field_error(
        &validator.invoice(&invoice(20, 10)),
        fields::CLOSE_DAY
    ));
    assert!(!has_field_error(
        &validator.invoice(&invoice(5, 15)),
        fields::CLOSE_DAY
    ));
}

#[test]
fn lookups_agree_with_filtering() {
    let input = TransactionInput {
        title: "x".repeat(60),
        amount: MoneyCents::ZERO,
        ..transaction("2025-06-20", "Atrasado")
    };
    let errors = validator().transaction(&input);

    for field in [fields::TITLE, fields::AMOUNT, fields::STATUS, fields::DESTINATION] {
        let filtered: Vec<_> = errors.iter().filter(|e| e.field == field).collect();
        assert_eq!(has_field_error(&errors, field), !filtered.is_empty());
        assert_eq!(
            field_error(&errors, field),
            filtered.first().map(|e| e.message.as_str())
        );
    }
    assert_eq!(first_validation_error(&errors), Some(errors[0].message.as_str()));
}

#[test]
fn decodes_and_validates_ui_payloads() {
    let card: CardInput =
        serde_json::from_str(r#"{"name":"","cardType":0,"limit":-1}"#).unwrap();
    assert_eq!(fields_of(&validator().card(&card)), vec![fields::NAME]);

    let invoice: InvoiceInput = serde_json::from_str(
        r#"{"month":0,"year":2025,"closeDay":31,"dueDay":5,"limitTotal":100,"amountPaid":300}"#,
    )
    .unwrap();
    assert_eq!(
        fields_of(&validator().invoice(&invoice)),
        vec![fields::MONTH, fields::CLOSE_DAY, fields::CLOSE_DAY, fields::LIMIT_TOTAL]
    );
}
