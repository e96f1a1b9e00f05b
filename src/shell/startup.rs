use std::io;
use std::path::PathBuf;

use super::{Shell, GUEST};
use crate::core::config::{Config, ConfigPaths, Settings};
use crate::core::{Router, Session};
use crate::error::ShellError;
use crate::flags::Flags;
use crate::fs::LocalFs;
use crate::highlight::SyntaxHighlighter;
use crate::input::{FileManagerHelper, LineEditor};
use crate::path::PathExpander;

/// Picks the initial working directory: the configured `start_dir`, else
/// the home directory, else wherever the process was started.
pub fn resolve_start_dir(settings: &Settings, expander: &PathExpander) -> Result<PathBuf, ShellError> {
    if let Some(raw) = &settings.start_dir {
        let path = expander.expand(raw);
        return match std::fs::canonicalize(&path) {
            Ok(dir) if dir.is_dir() => Ok(dir),
            _ => Err(ShellError::InvalidStartDirectory(path)),
        };
    }

    expander
        .home_dir()
        .and_then(|home| std::fs::canonicalize(home).ok())
        .filter(|home| home.is_dir())
        .or_else(|| std::env::current_dir().ok())
        .ok_or(ShellError::NoStartDirectory)
}

impl Shell<LineEditor, io::Stdout> {
    /// Builds the interactive shell. Every error here is fatal.
    pub fn from_flags(flags: &Flags) -> Result<Self, ShellError> {
        let mut paths = ConfigPaths::discover();
        if let Some(rc) = flags.get_value("config") {
            paths = paths.with_rc_path(rc);
        }

        let mut config = Config::new(paths);
        config.load()?;
        let settings = config.settings();

        let expander = PathExpander::new();
        let cwd = resolve_start_dir(settings, &expander)?;
        tracing::debug!(cwd = %cwd.display(), "starting session");

        let username = flags
            .get_value("username")
            .cloned()
            .or_else(|| settings.username.clone())
            .unwrap_or_else(|| GUEST.to_string());

        let highlighter = SyntaxHighlighter::new(settings.color);
        let helper = FileManagerHelper::new(&cwd, config.aliases(), highlighter);
        let editor = LineEditor::new(
            helper,
            config.paths().history_path.clone(),
            settings.history_size,
        )?;

        let gateway = LocalFs::new().with_compression_level(settings.compression_level);
        let router = Router::new(gateway).with_expander(expander);

        Ok(Shell::new(editor, io::stdout(), Session::new(cwd), router)
            .with_username(username)
            .with_aliases(config.aliases().clone())
            .with_highlighter(highlighter)
            .quiet(flags.is_set("quiet")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_dir_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            start_dir: Some(dir.path().display().to_string()),
            ..Settings::default()
        };
        let resolved = resolve_start_dir(&settings, &PathExpander::with_home("/nonexistent")).unwrap();
        assert_eq!(resolved, std::fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_start_dir_tilde_expands() {
        let home = tempfile::tempdir().unwrap();
        std::fs::create_dir(home.path().join("work")).unwrap();
        let settings = Settings {
            start_dir: Some("~/work".to_string()),
            ..Settings::default()
        };
        let resolved = resolve_start_dir(&settings, &PathExpander::with_home(home.path())).unwrap();
        assert!(resolved.ends_with("work"));
    }

    #[test]
    fn test_bad_start_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        std::fs::write(&file, "").unwrap();

        for start in [file.display().to_string(), dir.path().join("missing").display().to_string()] {
            let settings = Settings {
                start_dir: Some(start),
                ..Settings::default()
            };
            assert!(matches!(
                resolve_start_dir(&settings, &PathExpander::new()),
                Err(ShellError::InvalidStartDirectory(_))
            ));
        }
    }

    #[test]
    fn test_defaults_to_home() {
        let home = tempfile::tempdir().unwrap();
        let resolved = resolve_start_dir(&Settings::default(), &PathExpander::with_home(home.path())).unwrap();
        assert_eq!(resolved, std::fs::canonicalize(home.path()).unwrap());
    }
}
