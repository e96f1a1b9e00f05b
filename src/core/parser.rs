/// One parsed input line: a command token and its positional arguments.
///
/// Splitting is on whitespace only, so arguments containing spaces cannot
/// be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let command = tokens.next().map(str::to_lowercase).unwrap_or_default();
        let args = tokens.map(String::from).collect();
        Self { command, args }
    }

    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}
