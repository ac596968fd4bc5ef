//! Scripted prompter for testing the flow without a terminal.

use std::collections::VecDeque;

use coa_core::{
    application::{ApplicationError, ports::Prompter},
    error::ScaffoldResult,
};

/// Prompter fed from a fixed script of answers.
///
/// Text answers and select answers are consumed from separate queues in
/// call order. A select call with an exhausted queue takes the offered
/// default (mirroring a user pressing Enter); an exhausted text queue
/// reports cancellation, which doubles as a guard against tests asking
/// more questions than they scripted.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    texts: VecDeque<String>,
    selects: VecDeque<usize>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a free-text answer.
    pub fn answer_text(mut self, answer: impl Into<String>) -> Self {
        self.texts.push_back(answer.into());
        self
    }

    /// Queue a single-select answer (index into the offered choices).
    pub fn answer_select(mut self, index: usize) -> Self {
        self.selects.push_back(index);
        self
    }

    /// Messages asked so far, in order (assertion helper).
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str, default: Option<&str>) -> ScaffoldResult<String> {
        self.asked.push(message.to_string());
        match self.texts.pop_front() {
            Some(answer) if answer.is_empty() => {
                Ok(default.map(str::to_string).unwrap_or_default())
            }
            Some(answer) => Ok(answer),
            None => Err(ApplicationError::Cancelled.into()),
        }
    }

    fn select(&mut self, message: &str, choices: &[&str], default: usize) -> ScaffoldResult<usize> {
        self.asked.push(message.to_string());
        let index = self.selects.pop_front().unwrap_or(default);
        if index >= choices.len() {
            return Err(ApplicationError::PromptFailed {
                reason: format!("scripted index {index} out of range ({})", choices.len()),
            }
            .into());
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_answer_takes_the_default() {
        let mut prompter = ScriptedPrompter::new().answer_text("");
        let answer = prompter.text("Name:", Some("onchain-agent")).unwrap();
        assert_eq!(answer, "onchain-agent");
    }

    #[test]
    fn exhausted_text_queue_cancels() {
        let mut prompter = ScriptedPrompter::new();
        assert!(prompter.text("Name:", None).is_err());
    }

    #[test]
    fn exhausted_select_queue_takes_default() {
        let mut prompter = ScriptedPrompter::new();
        let index = prompter.select("Pick:", &["a", "b", "c"], 2).unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn asked_records_messages_in_order() {
        let mut prompter = ScriptedPrompter::new().answer_text("x").answer_select(0);
        prompter.text("first", None).unwrap();
        prompter.select("second", &["a"], 0).unwrap();
        assert_eq!(prompter.asked(), &["first".to_string(), "second".to_string()]);
    }
}
