//! The module contains the errors the engine can produce.
//!
//! There are two different kinds of error:
//!
//! - [`ValidationError`] is a rule violation. It is plain data: validators
//!   collect them into a `Vec` and return it, they never fail.
//! - [`EngineError`] is raised while decoding values at the boundary (status
//!   labels, backend codes, amounts, dates) before any rule runs.
//!
//!  [`ValidationError`]: ValidationError
//!  [`EngineError`]: EngineError
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boundary decoding errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
    #[error("Invalid transaction kind: {0}")]
    InvalidKind(String),
    #[error("Invalid card type: {0}")]
    InvalidCardType(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// A violated rule, bound to the form field the UI highlights.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
