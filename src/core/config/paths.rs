use std::path::{Path, PathBuf};

const RC_FILE: &str = ".filemanrc";
const HISTORY_FILE: &str = ".fileman_history";

/// Where configuration and history live. Both are optional: without a
/// home directory the manager runs unconfigured and keeps history in memory.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
}

impl ConfigPaths {
    pub fn discover() -> Self {
        match dirs::home_dir() {
            Some(home) => Self::from_home(&home),
            None => Self::default(),
        }
    }

    pub fn from_home(home: &Path) -> Self {
        Self {
            rc_path: Some(home.join(RC_FILE)),
            history_path: Some(home.join(HISTORY_FILE)),
        }
    }

    pub fn with_rc_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rc_path = Some(path.into());
        self
    }
}
