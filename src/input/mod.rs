//! Where command lines come from.
//!
//! The session loop only sees [`LineSource`]; the interactive binary plugs
//! in the rustyline-backed [`LineEditor`], tests plug in [`ScriptedInput`].

mod completer;
mod editor;
mod scripted;

pub use completer::FileManagerHelper;
pub use editor::LineEditor;
pub use scripted::ScriptedInput;

use std::path::Path;

use crate::error::ShellError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}

pub trait LineSource {
    /// Blocks until a full line, an interrupt, or end of input.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;

    /// Keeps path completion in step with the session's working directory.
    fn set_working_dir(&mut self, _dir: &Path) {}

    fn save_history(&mut self) -> Result<(), ShellError> {
        Ok(())
    }
}
