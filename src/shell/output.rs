use std::io::Write;
use std::path::Path;

use crate::core::commands::{OperationResult, Outcome};
use crate::highlight::SyntaxHighlighter;

/// Renders session output. Write failures are logged, never raised: a
/// broken terminal must not take the session down with it.
pub struct Reporter<W: Write> {
    out: W,
    highlighter: SyntaxHighlighter,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, highlighter: SyntaxHighlighter) -> Self {
        Self { out, highlighter }
    }

    pub fn set_highlighter(&mut self, highlighter: SyntaxHighlighter) {
        self.highlighter = highlighter;
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn report(&mut self, result: &OperationResult) {
        for line in &result.body {
            self.emit(line);
        }

        let status = match result.outcome {
            Outcome::Success if result.message.is_empty() => None,
            Outcome::Success => Some(self.highlighter.highlight_success(&result.message)),
            Outcome::InvalidInput => Some(
                self.highlighter
                    .highlight_error(&format!("Invalid input: {}", result.message)),
            ),
            Outcome::OperationFailure => Some(
                self.highlighter
                    .highlight_error(&format!("Operation failed: {}", result.message)),
            ),
        };
        if let Some(status) = status {
            self.emit(&status);
        }
        self.flush();
    }

    pub fn greeting(&mut self, text: &str) {
        let line = self.highlighter.highlight_success(text);
        self.emit(&line);
        self.flush();
    }

    pub fn farewell(&mut self, text: &str) {
        let line = self.highlighter.highlight_info(text);
        self.emit(&line);
        self.flush();
    }

    pub fn location(&mut self, cwd: &Path) {
        let line = self
            .highlighter
            .highlight_hint(&format!("You are currently in {}", cwd.display()));
        self.emit(&line);
        self.flush();
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!(error = %e, "could not write output");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "could not flush output");
        }
    }
}
