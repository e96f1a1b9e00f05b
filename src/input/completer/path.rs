use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

use crate::path::PathExpander;

/// Completes the word under the cursor against the filesystem, relative to
/// the session's working directory rather than the process one.
#[derive(Clone)]
pub struct PathCompleter {
    base: PathBuf,
    expander: PathExpander,
}

impl PathCompleter {
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
            expander: PathExpander::new(),
        }
    }

    pub fn set_base(&mut self, base: &Path) {
        self.base = base.to_path_buf();
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (typed_dir, file_prefix) = match incomplete.rfind('/') {
            Some(i) => (&incomplete[..=i], &incomplete[i + 1..]),
            None => ("", incomplete),
        };

        let dir_to_search = if typed_dir.is_empty() {
            self.base.clone()
        } else {
            self.expander.resolve(&self.base, typed_dir)
        };

        let mut matches = Vec::new();
        if let Ok(entries) = fs::read_dir(&dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                let Some(name) = entry.file_name().to_str().map(String::from) else {
                    continue;
                };
                if name.starts_with(file_prefix) {
                    matches.push(create_completion_pair(typed_dir, &name, entry.path().is_dir()));
                }
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

fn create_completion_pair(typed_dir: &str, name: &str, is_dir: bool) -> Pair {
    if is_dir {
        Pair {
            display: format!("{}/", name),
            replacement: format!("{}{}/", typed_dir, name),
        }
    } else {
        Pair {
            display: name.to_string(),
            replacement: format!("{}{} ", typed_dir, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_relative_to_base() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/draft.md"), "").unwrap();
        fs::write(dir.path().join("data.bin"), "").unwrap();

        let completer = PathCompleter::new(dir.path());
        let pairs = completer.complete_path("d");
        let replacements: Vec<&str> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(replacements, vec!["data.bin ", "docs/"]);

        let nested = completer.complete_path("docs/dr");
        assert_eq!(nested[0].replacement, "docs/draft.md ");
    }

    #[test]
    fn test_follows_new_base() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join("only-here"), "").unwrap();

        let mut completer = PathCompleter::new(first.path());
        assert!(completer.complete_path("only").is_empty());
        completer.set_base(second.path());
        assert_eq!(completer.complete_path("only").len(), 1);
    }
}
