use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct AliasManager {
    aliases: HashMap<Box<str>, Box<str>>,
}

impl AliasManager {
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    pub fn add(&mut self, name: &str, command: &str) {
        self.aliases.insert(name.into(), command.into());
    }

    pub fn get<'a>(&'a self, cmd: &str) -> Option<Cow<'a, str>> {
        self.aliases.get(cmd).map(|s| Cow::Borrowed(&**s))
    }

    /// Replaces the first word of `line` when it names an alias. Single
    /// pass: an alias expanding to another alias is not expanded again.
    pub fn expand_command<'a>(&'a self, line: &'a str) -> Cow<'a, str> {
        let mut parts: Vec<&str> = line.split_whitespace().collect();
        if let Some(first_word) = parts.first() {
            if let Some(alias_value) = self.get(first_word) {
                parts[0] = &alias_value;
                return Cow::Owned(parts.join(" "));
            }
        }
        Cow::Borrowed(line)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(|k| &**k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_alias() {
        let mut manager = AliasManager::new();
        manager.add("dir", "ls");
        assert_eq!(manager.get("dir").unwrap(), "ls");
    }

    #[test]
    fn test_expand_command_keeps_arguments() {
        let mut manager = AliasManager::new();
        manager.add("copy", "cp");

        let expanded = manager.expand_command("copy a.txt  b.txt");
        assert_eq!(expanded, "cp a.txt b.txt");
    }

    #[test]
    fn test_no_expansion_needed() {
        let manager = AliasManager::new();
        let line = "cat notes.txt";
        let expanded = manager.expand_command(line);
        assert!(matches!(expanded, Cow::Borrowed(_)));
        assert_eq!(expanded, line);
    }

    #[test]
    fn test_expansion_is_single_pass() {
        let mut manager = AliasManager::new();
        manager.add("a", "b");
        manager.add("b", "ls");
        assert_eq!(manager.expand_command("a"), "b");
    }
}
