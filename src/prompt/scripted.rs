//! Answers replayed from a list, for driving the menu without a terminal.

use super::Prompter;
use crate::error::TrackerError;
use std::collections::VecDeque;

/// One queued answer for a `ScriptedPrompter`.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Pick the item with this label.
    Pick(String),
    /// Type this text.
    Text(String),
}

impl Answer {
    pub fn pick(label: impl Into<String>) -> Self {
        Answer::Pick(label.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Answer::Text(text.into())
    }
}

/// Replays a fixed list of answers and records every prompt it was shown.
/// Running out of answers is reported as a fatal prompt failure, the same
/// way a closed terminal would be.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer, TrackerError> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| TrackerError::ScriptExhausted(prompt.to_string()))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, TrackerError> {
        match self.next(prompt)? {
            Answer::Pick(label) => items.iter().position(|item| *item == label).ok_or(
                TrackerError::UnknownChoice {
                    prompt: prompt.to_string(),
                    answer: label,
                },
            ),
            Answer::Text(text) => Err(TrackerError::UnknownChoice {
                prompt: prompt.to_string(),
                answer: text,
            }),
        }
    }

    fn input(&mut self, prompt: &str) -> Result<String, TrackerError> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text),
            Answer::Pick(label) => Err(TrackerError::UnknownChoice {
                prompt: prompt.to_string(),
                answer: label,
            }),
        }
    }
}
