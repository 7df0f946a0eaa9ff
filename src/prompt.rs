//! Operator input: list choices and free text.

use crate::error::TrackerError;
use dialoguer::{Input, Select, theme::ColorfulTheme};

#[cfg(feature = "testing")]
mod scripted;

#[cfg(feature = "testing")]
pub use scripted::{Answer, ScriptedPrompter};

/// Source of operator answers.
pub trait Prompter {
    /// Ask the operator to pick one of `items`; returns the chosen index.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, TrackerError>;

    /// Ask for a line of free text.
    fn input(&mut self, prompt: &str) -> Result<String, TrackerError>;
}

/// A labelled value offered in a selection prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Present `choices` through `prompter` and return the picked one.
pub fn choose<'a, T, P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    choices: &'a [Choice<T>],
) -> Result<&'a Choice<T>, TrackerError> {
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let index = prompter.select(prompt, &labels)?;
    choices.get(index).ok_or_else(|| TrackerError::UnknownChoice {
        prompt: prompt.to_string(),
        answer: index.to_string(),
    })
}

/// Terminal prompts rendered by `dialoguer`.
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

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, TrackerError> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn input(&mut self, prompt: &str) -> Result<String, TrackerError> {
        // empty answers go through so the database decides what is valid
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, TrackerError> {
        (**self).select(prompt, items)
    }

    fn input(&mut self, prompt: &str) -> Result<String, TrackerError> {
        (**self).input(prompt)
    }
}

