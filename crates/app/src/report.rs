use engine::ValidationError;
use serde::Serialize;

use crate::{error::Result, settings::Format};

#[derive(Debug, Serialize)]
pub struct Report {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl Report {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Json => Ok(serde_json::to_string_pretty(self)?),
            Format::Text if self.valid => Ok("ok".to_string()),
            Format::Text => Ok(self
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}
