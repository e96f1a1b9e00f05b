use std::collections::VecDeque;

use super::{LineSource, ReadOutcome};
use crate::error::ShellError;

/// Replays a fixed sequence of input events, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<ReadOutcome>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            events: lines.into_iter().map(|l| ReadOutcome::Line(l.into())).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn then(mut self, event: ReadOutcome) -> Self {
        self.events.push_back(event);
        self
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        self.prompts.push(prompt.to_string());
        Ok(self.events.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}
