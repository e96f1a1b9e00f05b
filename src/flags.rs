use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<&'static str, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: Option<&'static str>,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();
        let mut add = |name: &'static str,
                       short: Option<&'static str>,
                       long: &'static str,
                       description: &'static str,
                       takes_value: bool| {
            flags.insert(
                name,
                Flag {
                    short,
                    long,
                    description,
                    takes_value,
                    value: None,
                },
            );
        };

        add("help", Some("-h"), "--help", "Print this help message", false);
        add("version", Some("-v"), "--version", "Show version information", false);
        add("username", None, "--username", "Name shown in the greeting (--username=<name>)", true);
        add("config", Some("-c"), "--config", "Use a custom rc file", true);
        add("quiet", Some("-q"), "--quiet", "Skip the greeting and farewell banners", false);
        add("debug", Some("-d"), "--debug", "Enable debug logging on stderr", false);

        Flags { flags }
    }

    /// Accepts `--name value`, `--name=value` and `-n value` for flags that
    /// take a value. Unknown arguments are ignored.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let (arg, inline) = match args[i].split_once('=') {
                Some((name, value)) if name.starts_with("--") => (name, Some(value.to_string())),
                _ => (args[i].as_str(), None),
            };

            let flag = self
                .flags
                .values_mut()
                .find(|flag| flag.long == arg || flag.short == Some(arg));

            match flag {
                Some(flag) if flag.takes_value => {
                    let value = match inline {
                        Some(value) => value,
                        None if i + 1 < args.len() => {
                            i += 1;
                            args[i].clone()
                        }
                        None => {
                            return Err(ShellError::FlagError(format!(
                                "Flag {} requires a value",
                                arg
                            )))
                        }
                    };
                    if value.is_empty() {
                        return Err(ShellError::FlagError(format!("Flag {} requires a value", arg)));
                    }
                    flag.value = Some(value);
                }
                Some(flag) => flag.value = Some("true".to_string()),
                None => tracing::debug!(argument = %args[i], "ignoring unknown argument"),
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: fileman [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            let short = flag.short.map(|s| format!("{},", s)).unwrap_or_default();
            println!("  {:<4}{:<15} {}", short, flag.long, flag.description);
        }
    }
}
