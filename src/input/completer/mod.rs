mod command;
mod path;

use std::{borrow::Cow, path::Path};

use command::CommandCompleter;
use path::PathCompleter;

use crate::core::config::AliasManager;
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// rustyline helper: completion of command names and paths, plus coloring
/// of the line being typed.
#[derive(Clone)]
pub struct FileManagerHelper {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl FileManagerHelper {
    pub fn new(cwd: &Path, aliases: &AliasManager, highlighter: SyntaxHighlighter) -> Self {
        FileManagerHelper {
            command_completer: CommandCompleter::new(aliases),
            path_completer: PathCompleter::new(cwd),
            highlighter,
        }
    }

    pub fn set_working_dir(&mut self, dir: &Path) {
        self.path_completer.set_base(dir);
    }
}

impl Helper for FileManagerHelper {}

impl Highlighter for FileManagerHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let known = |word: &str| self.command_completer.is_known(word);
        Cow::Owned(self.highlighter.highlight_command(line, &known))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for FileManagerHelper {
    type Hint = String;
}

impl Validator for FileManagerHelper {}

impl Completer for FileManagerHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_line(&self.command_completer, &self.path_completer, line, pos))
    }
}

fn complete_line(
    commands: &CommandCompleter,
    paths: &PathCompleter,
    line: &str,
    pos: usize,
) -> (usize, Vec<Pair>) {
    let line_up_to_cursor = &line[..pos];
    let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();

    if line_up_to_cursor.is_empty() || line_up_to_cursor.ends_with(char::is_whitespace) {
        words.push("");
    }

    let last_word = words.last().copied().unwrap_or("");
    let start = pos - last_word.len();

    if words.len() <= 1 {
        (start, commands.complete_command(last_word))
    } else {
        (start, paths.complete_path(last_word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn completers(dir: &Path) -> (CommandCompleter, PathCompleter) {
        let mut aliases = AliasManager::new();
        aliases.add("dir", "ls");
        (CommandCompleter::new(&aliases), PathCompleter::new(dir))
    }

    #[test]
    fn test_first_word_completes_commands() {
        let dir = tempfile::tempdir().unwrap();
        let (commands, paths) = completers(dir.path());

        let (start, matches) = complete_line(&commands, &paths, "dec", 3);
        assert_eq!(start, 0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].replacement, "decompress");
    }

    #[test]
    fn test_later_words_complete_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        let (commands, paths) = completers(dir.path());

        let line = "cat no";
        let (start, matches) = complete_line(&commands, &paths, line, line.len());
        assert_eq!(start, 4);
        assert_eq!(matches[0].replacement, "notes.txt ");
    }
}
