use std::{fmt, path::PathBuf};

mod aliases;
mod loader;
mod paths;

pub use aliases::AliasManager;
pub use paths::ConfigPaths;

use loader::ConfigLoader;

use crate::fs::DEFAULT_COMPRESSION_LEVEL;

pub const DEFAULT_HISTORY_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Never,
}

/// Values settable from the rc file with `set <key>=<value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub start_dir: Option<String>,
    pub history_size: usize,
    pub color: ColorMode,
    pub compression_level: u32,
    pub username: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_dir: None,
            history_size: DEFAULT_HISTORY_SIZE,
            color: ColorMode::Auto,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            username: None,
        }
    }
}

pub struct Config {
    paths: ConfigPaths,
    aliases: AliasManager,
    settings: Settings,
}

impl Config {
    pub fn new(paths: ConfigPaths) -> Self {
        Config {
            paths,
            aliases: AliasManager::new(),
            settings: Settings::default(),
        }
    }

    /// Reads the rc file if there is one. A missing file leaves defaults.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let Some(rc_path) = self.paths.rc_path.clone() else {
            return Ok(());
        };
        ConfigLoader::new(&rc_path).load_into(self)
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn aliases(&self) -> &AliasManager {
        &self.aliases
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(PathBuf, std::io::Error),
    InvalidValue {
        line: usize,
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(path, e) => write!(f, "cannot read {}: {}", path.display(), e),
            ConfigError::InvalidValue {
                line,
                key,
                value,
                expected,
            } => write!(
                f,
                "line {}: invalid value '{}' for '{}' (expected {})",
                line, value, key, expected
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
