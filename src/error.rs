use std::path::PathBuf;

use crate::core::config::ConfigError;

/// Errors that end the program. Only startup and the input device can
/// produce these; command failures never become a `ShellError`.
#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    NoStartDirectory,
    InvalidStartDirectory(PathBuf),
    ConfigError(ConfigError),
    FlagError(String),
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::ConfigError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::NoStartDirectory => write!(f, "Could not determine a starting directory"),
            ShellError::InvalidStartDirectory(path) => {
                write!(f, "Start directory is not a directory: {}", path.display())
            }
            ShellError::ConfigError(e) => write!(f, "Config error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
