//! Helpers for turning an error list into UI feedback: one toast message plus
//! an inline message per highlighted field.

use std::collections::HashSet;

use crate::ValidationError;

/// Message of the first error, if any.
pub fn first_validation_error(errors: &[ValidationError]) -> Option<&str> {
    errors.first().map(|e| e.message.as_str())
}

/// All messages joined by a single space.
pub fn all_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn has_field_error(errors: &[ValidationError], field: &str) -> bool {
    errors.iter().any(|e| e.field == field)
}

/// Message of the first error reported for `field`.
pub fn field_error<'a>(errors: &'a [ValidationError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Keep only the first error of every field, in input order.
pub fn dedup_by_field(errors: Vec<ValidationError>) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    errors
        .into_iter()
        .filter(|e| seen.insert(e.field.clone()))
        .collect()
}
