use std::{io::Read, process::ExitCode};

use chrono::NaiveDate;
use clap::Parser;
use engine::{
    CardInput, CardType, Clock, FixedClock, InstallmentInput, InvoiceInput, SystemClock,
    TransactionInput, ValidationError, Validator,
};
use settings::{Args, Command, Input, Settings};

mod error;
mod report;
mod settings;

use crate::{error::Result, report::Report};

fn main() -> ExitCode {
    let args = Args::parse();
    let settings = match Settings::load(&args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("failed to load settings: {err}");
            return ExitCode::from(2);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!(
            "saldo={level},engine={level}",
            level = settings.level
        ))
        .init();

    let report = match run(&args.command, &settings) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("{} validation failed: {err}", args.command.name());
            return ExitCode::from(2);
        }
    };

    match report.render(settings.format) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::error!("failed to render report: {err}");
            return ExitCode::from(2);
        }
    }

    if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn run(command: &Command, settings: &Settings) -> Result<Report> {
    // The wall clock is read here and nowhere else.
    let today = settings.today.unwrap_or_else(|| SystemClock.today());
    tracing::info!(command = command.name(), %today, "validating payload");

    let payload = read_payload(command.input())?;
    let errors = validate(command, &payload, today, settings.dedup)?;
    if !errors.is_empty() {
        tracing::info!(violations = errors.len(), "payload rejected");
    }
    Ok(Report::new(errors))
}

fn read_payload(input: &Input) -> Result<String> {
    match &input.file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn validate(
    command: &Command,
    payload: &str,
    today: NaiveDate,
    dedup: bool,
) -> Result<Vec<ValidationError>> {
    let validator = Validator::builder().clock(FixedClock(today)).build();

    let errors = match command {
        Command::Transaction(_) => {
            validator.transaction(&serde_json::from_str::<TransactionInput>(payload)?)
        }
        Command::Installment(_) => {
            validator.installment(&serde_json::from_str::<InstallmentInput>(payload)?)
        }
        Command::Invoice(_) => validator.invoice(&serde_json::from_str::<InvoiceInput>(payload)?),
        Command::Card(_) => {
            // Same composition as the card form: card rules, then the full
            // credit terms check once every term is filled in.
            let card: CardInput = serde_json::from_str(payload)?;
            let mut errors = validator.card(&card);
            if card.card_type == CardType::CreditCard
                && let (Some(limit), Some(close_day), Some(due_day)) =
                    (card.limit, card.close_day, card.due_day)
            {
                errors.extend(validator.credit_card(limit, close_day, due_day));
            }
            errors
        }
    };

    Ok(if dedup {
        engine::dedup_by_field(errors)
    } else {
        errors
    })
}
