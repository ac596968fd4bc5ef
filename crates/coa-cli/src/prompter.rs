//! Terminal prompter backed by `dialoguer`.
//!
//! Maps an interrupted prompt (Ctrl-C / Esc) to `Cancelled` so the flow can
//! end with a clean "cancelled" exit instead of an error.

use coa_core::{
    application::{ApplicationError, ports::Prompter},
    error::ScaffoldResult,
};
use dialoguer::{Input, Select, theme::ColorfulTheme};

pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn map_dialoguer_error(e: dialoguer::Error) -> coa_core::error::ScaffoldError {
    match e {
        dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted => {
            ApplicationError::Cancelled.into()
        }
        other => ApplicationError::PromptFailed {
            reason: other.to_string(),
        }
        .into(),
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, message: &str, default: Option<&str>) -> ScaffoldResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        input = match default {
            Some(value) => input.default(value.to_string()),
            // Empty answers are re-asked by the flow where they matter.
            None => input.allow_empty(true),
        };
        input.interact_text().map_err(map_dialoguer_error)
    }

    fn select(&mut self, message: &str, choices: &[&str], default: usize) -> ScaffoldResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .default(default)
            .interact()
            .map_err(map_dialoguer_error)
    }
}
