use std::{fs, io, path::Path};

use super::{ColorMode, Config, ConfigError};

pub struct ConfigLoader<'a> {
    path: &'a Path,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    pub fn load_into(&self, config: &mut Config) -> Result<(), ConfigError> {
        let content = match fs::read_to_string(self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no rc file");
                return Ok(());
            }
            Err(e) => return Err(ConfigError::IoError(self.path.to_path_buf(), e)),
        };

        for (index, line) in content.lines().enumerate() {
            self.process_line(index + 1, line, config)?;
        }
        Ok(())
    }

    fn process_line(&self, number: usize, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        match line {
            s if s.starts_with("alias ") => {
                self.process_alias(&s["alias ".len()..], config);
                Ok(())
            }
            s if s.starts_with("set ") => self.process_setting(number, &s["set ".len()..], config),
            _ => {
                tracing::warn!(line = number, content = line, "ignoring unrecognised rc line");
                Ok(())
            }
        }
    }

    fn process_alias(&self, definition: &str, config: &mut Config) {
        if let Some((name, command)) = definition.split_once('=') {
            let name = name.trim();
            let command = strip_quotes(command.trim());
            if !name.is_empty() && !command.is_empty() {
                config.aliases.add(name, command);
            }
        }
    }

    fn process_setting(&self, number: usize, assignment: &str, config: &mut Config) -> Result<(), ConfigError> {
        let Some((key, value)) = assignment.split_once('=') else {
            tracing::warn!(line = number, "setting without '=' ignored");
            return Ok(());
        };
        let key = key.trim();
        let value = strip_quotes(value.trim());

        let invalid = |expected: &'static str| ConfigError::InvalidValue {
            line: number,
            key: key.to_string(),
            value: value.to_string(),
            expected,
        };

        let settings = &mut config.settings;
        match key {
            "start_dir" => settings.start_dir = Some(value.to_string()),
            "username" => settings.username = Some(value.to_string()),
            "history_size" => {
                settings.history_size = value.parse().map_err(|_| invalid("a non-negative integer"))?;
            }
            "color" => {
                settings.color = match value {
                    "auto" => ColorMode::Auto,
                    "never" => ColorMode::Never,
                    _ => return Err(invalid("auto or never")),
                };
            }
            "compression_level" => {
                settings.compression_level = value
                    .parse()
                    .ok()
                    .filter(|level| *level <= 11)
                    .ok_or_else(|| invalid("an integer from 0 to 11"))?;
            }
            _ => tracing::warn!(line = number, key, "unknown setting ignored"),
        }
        Ok(())
    }
}

fn strip_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::super::{ConfigPaths, Settings};
    use super::*;

    fn load(content: &str) -> (tempfile::TempDir, Result<Config, ConfigError>) {
        let dir = tempfile::tempdir().unwrap();
        let rc = dir.path().join("rc");
        fs::write(&rc, content).unwrap();
        let mut config = Config::new(ConfigPaths::default().with_rc_path(rc));
        let result = config.load().map(|_| config);
        (dir, result)
    }

    #[test]
    fn test_missing_rc_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new(ConfigPaths::default().with_rc_path(dir.path().join("nope")));
        config.load().unwrap();
        assert_eq!(config.settings(), &Settings::default());
    }

    #[test]
    fn test_aliases_and_settings() {
        let (_dir, config) = load(
            "# comment\n\nalias dir='ls'\nset start_dir = \"~/work\"\nset history_size=50\nset color=never\nset compression_level=4\nset username=ada\n",
        );
        let config = config.unwrap();

        assert_eq!(config.aliases().get("dir").unwrap(), "ls");
        let settings = config.settings();
        assert_eq!(settings.start_dir.as_deref(), Some("~/work"));
        assert_eq!(settings.history_size, 50);
        assert_eq!(settings.color, ColorMode::Never);
        assert_eq!(settings.compression_level, 4);
        assert_eq!(settings.username.as_deref(), Some("ada"));
    }

    #[test]
    fn test_bad_value_reports_line() {
        let (_dir, result) = load("set color=never\nset compression_level=12\n");
        match result {
            Err(ConfigError::InvalidValue { line, key, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(key, "compression_level");
            }
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unknown_lines_are_ignored() {
        let (_dir, config) = load("export PATH=/bin\nset shiny=yes\n");
        assert_eq!(config.unwrap().settings(), &Settings::default());
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"a b\""), "a b");
        assert_eq!(strip_quotes("'x'"), "x");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("plain"), "plain");
    }
}
