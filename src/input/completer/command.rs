use std::{borrow::Cow, collections::BTreeSet};

use rustyline::completion::Pair;

use crate::core::commands::CommandKind;
use crate::core::config::AliasManager;

const EXIT_TOKEN: &str = ".exit";

#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<Cow<'static, str>>,
    aliases: BTreeSet<Cow<'static, str>>,
}

impl CommandCompleter {
    pub fn new(aliases: &AliasManager) -> Self {
        let mut commands: BTreeSet<Cow<'static, str>> = CommandKind::ALL
            .iter()
            .map(|kind| Cow::Borrowed(kind.name()))
            .collect();
        commands.insert(Cow::Borrowed(EXIT_TOKEN));

        Self {
            commands,
            aliases: aliases.names().map(|a| Cow::Owned(a.to_string())).collect(),
        }
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.commands.contains(word) || self.aliases.contains(word)
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        let input = input.trim().to_lowercase();
        let mut matches = Vec::new();

        for cmd in self.commands.iter().filter(|c| c.starts_with(&input)) {
            matches.push(Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            });
        }
        for alias in self.aliases.iter().filter(|a| a.starts_with(&input)) {
            matches.push(Pair {
                display: format!("{} (alias)", alias),
                replacement: alias.to_string(),
            });
        }

        matches
    }
}
