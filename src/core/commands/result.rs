//! What a single invocation reports back to the session loop.

use super::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    InvalidInput,
    OperationFailure,
}

/// Outcome of one invocation.
///
/// `body` carries listing or file text printed ahead of the status line;
/// `message` is the status line itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub outcome: Outcome,
    pub message: String,
    pub body: Vec<String>,
}

impl OperationResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Success,
            message: message.into(),
            body: Vec::new(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::InvalidInput,
            message: message.into(),
            body: Vec::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::OperationFailure,
            message: message.into(),
            body: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: Vec<String>) -> Self {
        self.body = body;
        self
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

impl From<CommandError> for OperationResult {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidInput(msg) => OperationResult::invalid_input(msg),
            CommandError::OperationFailed(msg) => OperationResult::failure(msg),
        }
    }
}
