use std::path::{Path, PathBuf};

/// Turns a command argument into a concrete path.
///
/// `~` and `~/...` expand to the home directory, absolute paths pass
/// through, and anything else is joined onto the caller's base directory.
#[derive(Debug, Clone)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn expand(&self, raw: &str) -> PathBuf {
        match (raw.strip_prefix('~'), self.home.as_ref()) {
            (Some(""), Some(home)) => home.clone(),
            (Some(rest), Some(home)) if rest.starts_with('/') || rest.starts_with('\\') => {
                let mut path = home.clone();
                for part in rest.split(['/', '\\']).filter(|p| !p.is_empty()) {
                    path.push(part);
                }
                path
            }
            // "~user/..." and a missing home directory are taken literally
            _ => PathBuf::from(raw),
        }
    }

    pub fn resolve(&self, base: &Path, raw: &str) -> PathBuf {
        let expanded = self.expand(raw);
        if expanded.is_absolute() {
            expanded
        } else {
            base.join(expanded)
        }
    }
}
