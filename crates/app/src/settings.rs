//! Handles settings for the application. Values are read, in order of
//! precedence, from command line flags, `SALDO_*` environment variables and
//! the TOML file (`config/saldo.toml` unless `--config` says otherwise).
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/saldo.toml";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log level for the `saldo` and `engine` targets.
    pub level: String,
    pub format: Format,
    /// Collapse errors to the first one per field.
    pub dedup: bool,
    /// Validate as if this were the current day.
    pub today: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Text,
            dedup: false,
            today: None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "saldo")]
#[command(about = "Check transaction, installment, card and invoice forms before they are sent")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Override the current day (YYYY-MM-DD or DD/MM/YYYY).
    #[arg(long, value_parser = engine::parse_date)]
    pub today: Option<NaiveDate>,
    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<Format>,
    /// Report only the first error of every field.
    #[arg(long)]
    pub dedup: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Transaction(Input),
    Installment(Input),
    Card(Input),
    Invoice(Input),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transaction(_) => "transaction",
            Self::Installment(_) => "installment",
            Self::Card(_) => "card",
            Self::Invoice(_) => "invoice",
        }
    }

    pub fn input(&self) -> &Input {
        match self {
            Self::Transaction(input)
            | Self::Installment(input)
            | Self::Card(input)
            | Self::Invoice(input) => input,
        }
    }
}

#[derive(Debug, ClapArgs)]
pub struct Input {
    /// JSON payload; read from stdin when omitted.
    pub file: Option<PathBuf>,
}

impl Settings {
    pub fn load(args: &Args) -> Result<Self> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let settings: Settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SALDO"))
            .build()?
            .try_deserialize()?;

        Ok(settings.with_overrides(args))
    }

    fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(today) = args.today {
            self.today = Some(today);
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        if args.dedup {
            self.dedup = true;
        }
        self
    }
}
