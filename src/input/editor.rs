use std::path::{Path, PathBuf};

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use super::{FileManagerHelper, LineSource, ReadOutcome};
use crate::error::ShellError;

pub struct LineEditor {
    editor: Editor<FileManagerHelper, FileHistory>,
    history_path: Option<PathBuf>,
}

impl LineEditor {
    pub fn new(
        helper: FileManagerHelper,
        history_path: Option<PathBuf>,
        history_size: usize,
    ) -> Result<Self, ShellError> {
        let mut editor = Editor::<FileManagerHelper, FileHistory>::new()?;
        editor.set_max_history_size(history_size)?;
        editor.set_auto_add_history(true);
        editor.set_helper(Some(helper));

        if let Some(path) = history_path.as_deref().filter(|p| p.exists()) {
            if let Err(e) = editor.load_history(path) {
                tracing::warn!(path = %path.display(), error = %e, "could not load history");
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineSource for LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn set_working_dir(&mut self, dir: &Path) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_working_dir(dir);
        }
    }

    fn save_history(&mut self) -> Result<(), ShellError> {
        if let Some(path) = &self.history_path {
            self.editor.save_history(path)?;
        }
        Ok(())
    }
}
