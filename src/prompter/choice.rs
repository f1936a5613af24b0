use crate::ui::chrome::UiChrome;
use std::io::{self, Write};

/// A validated question: prompt text, the accepted answers and an optional
/// default picked by an empty answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    prompt: String,
    options: Vec<String>,
    default: Option<String>,
}

impl Choice {
    pub fn new<I, S>(prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prompt: prompt.into(),
            options: options
                .into_iter()
                .map(|o| o.as_ref().to_lowercase())
                .collect(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        let default = default.into();
        self.default = if default.is_empty() {
            None
        } else {
            Some(default)
        };
        self
    }

    /// Plain yes/no question answered "no" on empty input.
    pub fn yes_no(prompt: impl Into<String>) -> Self {
        Self::new(prompt, ["yes", "no"]).with_default("no")
    }

    /// `"{prompt} (a, b, default=x): "`.
    pub fn display(&self) -> String {
        let mut line = format!("{} ({}", self.prompt, self.options.join(", "));
        match &self.default {
            Some(default) => line.push_str(&format!(", default={default}): ")),
            None => line.push_str("): "),
        }
        line
    }

    /// Case-insensitive match of a raw answer. Empty input selects the
    /// default when there is one; anything else unlisted is rejected.
    pub fn resolve(&self, raw: &str) -> Option<String> {
        let answer = raw.trim().to_lowercase();
        if answer.is_empty() {
            return self.default.clone();
        }
        self.options.iter().find(|o| **o == answer).cloned()
    }
}

/// Asking side of a [`Choice`]: writes the question, preceded by
/// "Invalid input." after a rejected answer, and resolves the next line.
#[derive(Debug, Default, Clone)]
pub struct ChoicePrompt {
    chrome: UiChrome,
    invalid_input: bool,
}

impl ChoicePrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<W: Write + ?Sized>(&self, choice: &Choice, out: &mut W) -> io::Result<()> {
        if self.invalid_input {
            writeln!(out, "Invalid input.")?;
        }
        self.chrome.render_prompt(&choice.display(), out)
    }

    /// Resolved answer, or `None` after which the next render re-asks.
    pub fn answer(&mut self, choice: &Choice, raw: &str) -> Option<String> {
        let answer = choice.resolve(raw);
        self.invalid_input = answer.is_none();
        answer
    }
}
