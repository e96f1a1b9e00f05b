use super::CommandError;
use crate::core::parser::Invocation;

/// Every command the router knows, with its declared arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Up,
    Cd,
    Ls,
    Nwd,
    Os,
    Cat,
    Add,
    Rn,
    Cp,
    Mv,
    Rm,
    Hash,
    Compress,
    Decompress,
    Help,
}

impl CommandKind {
    pub const ALL: [CommandKind; 15] = [
        CommandKind::Up,
        CommandKind::Cd,
        CommandKind::Ls,
        CommandKind::Nwd,
        CommandKind::Os,
        CommandKind::Cat,
        CommandKind::Add,
        CommandKind::Rn,
        CommandKind::Cp,
        CommandKind::Mv,
        CommandKind::Rm,
        CommandKind::Hash,
        CommandKind::Compress,
        CommandKind::Decompress,
        CommandKind::Help,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Up => "up",
            CommandKind::Cd => "cd",
            CommandKind::Ls => "ls",
            CommandKind::Nwd => "nwd",
            CommandKind::Os => "os",
            CommandKind::Cat => "cat",
            CommandKind::Add => "add",
            CommandKind::Rn => "rn",
            CommandKind::Cp => "cp",
            CommandKind::Mv => "mv",
            CommandKind::Rm => "rm",
            CommandKind::Hash => "hash",
            CommandKind::Compress => "compress",
            CommandKind::Decompress => "decompress",
            CommandKind::Help => "help",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            CommandKind::Up | CommandKind::Ls | CommandKind::Nwd | CommandKind::Help => 0,
            CommandKind::Cd
            | CommandKind::Os
            | CommandKind::Cat
            | CommandKind::Add
            | CommandKind::Rm
            | CommandKind::Hash => 1,
            CommandKind::Rn
            | CommandKind::Cp
            | CommandKind::Mv
            | CommandKind::Compress
            | CommandKind::Decompress => 2,
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Up => "up",
            CommandKind::Cd => "cd <path>",
            CommandKind::Ls => "ls",
            CommandKind::Nwd => "nwd",
            CommandKind::Os => "os --eol|--cpus|--homedir|--username|--architecture",
            CommandKind::Cat => "cat <path>",
            CommandKind::Add => "add <path>",
            CommandKind::Rn => "rn <path> <new_name>",
            CommandKind::Cp => "cp <src> <dst>",
            CommandKind::Mv => "mv <src> <dst>",
            CommandKind::Rm => "rm <path>",
            CommandKind::Hash => "hash <path>",
            CommandKind::Compress => "compress <src> <dst>",
            CommandKind::Decompress => "decompress <src> <dst>",
            CommandKind::Help => "help",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            CommandKind::Up => "go to the parent directory",
            CommandKind::Cd => "change the working directory",
            CommandKind::Ls => "list the working directory",
            CommandKind::Nwd => "print the working directory",
            CommandKind::Os => "show operating system information",
            CommandKind::Cat => "print a file",
            CommandKind::Add => "create an empty file",
            CommandKind::Rn => "rename a file in place",
            CommandKind::Cp => "copy a file",
            CommandKind::Mv => "move a file",
            CommandKind::Rm => "delete a file",
            CommandKind::Hash => "print the SHA-256 of a file",
            CommandKind::Compress => "brotli-compress a file",
            CommandKind::Decompress => "brotli-decompress a file",
            CommandKind::Help => "show this list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsQuery {
    Eol,
    Cpus,
    HomeDir,
    Username,
    Architecture,
}

impl OsQuery {
    pub fn from_flag(flag: &str) -> Result<Self, CommandError> {
        let query = match flag.to_ascii_lowercase().as_str() {
            "--eol" => OsQuery::Eol,
            "--cpus" => OsQuery::Cpus,
            "--homedir" => OsQuery::HomeDir,
            "--username" => OsQuery::Username,
            "--architecture" => OsQuery::Architecture,
            _ => {
                return Err(CommandError::InvalidInput(format!(
                    "unknown os flag '{}'",
                    flag
                )))
            }
        };
        Ok(query)
    }
}

/// A validated command with its arguments bound to names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Up,
    Cd { target: String },
    Ls,
    Nwd,
    Os(OsQuery),
    Cat { path: String },
    Add { path: String },
    Rn { path: String, new_name: String },
    Cp { src: String, dst: String },
    Mv { src: String, dst: String },
    Rm { path: String },
    Hash { path: String },
    Compress { src: String, dst: String },
    Decompress { src: String, dst: String },
    Help,
}

impl TryFrom<&Invocation> for Command {
    type Error = CommandError;

    fn try_from(invocation: &Invocation) -> Result<Self, Self::Error> {
        if invocation.is_empty() {
            return Err(CommandError::InvalidInput("empty command".to_string()));
        }

        let kind = CommandKind::from_name(&invocation.command).ok_or_else(|| {
            CommandError::InvalidInput(format!("unknown command '{}'", invocation.command))
        })?;

        if invocation.args.len() != kind.arity() {
            return Err(CommandError::InvalidInput(format!("usage: {}", kind.usage())));
        }

        let mut args = invocation.args.iter().cloned();
        let mut next = || args.next().unwrap_or_default();

        let command = match kind {
            CommandKind::Up => Command::Up,
            CommandKind::Cd => Command::Cd { target: next() },
            CommandKind::Ls => Command::Ls,
            CommandKind::Nwd => Command::Nwd,
            CommandKind::Os => Command::Os(OsQuery::from_flag(&next())?),
            CommandKind::Cat => Command::Cat { path: next() },
            CommandKind::Add => Command::Add { path: next() },
            CommandKind::Rn => {
                let path = next();
                Command::Rn {
                    path,
                    new_name: next(),
                }
            }
            CommandKind::Cp => {
                let src = next();
                Command::Cp { src, dst: next() }
            }
            CommandKind::Mv => {
                let src = next();
                Command::Mv { src, dst: next() }
            }
            CommandKind::Rm => Command::Rm { path: next() },
            CommandKind::Hash => Command::Hash { path: next() },
            CommandKind::Compress => {
                let src = next();
                Command::Compress { src, dst: next() }
            }
            CommandKind::Decompress => {
                let src = next();
                Command::Decompress { src, dst: next() }
            }
            CommandKind::Help => Command::Help,
        };
        Ok(command)
    }
}

pub fn help_lines() -> Vec<String> {
    CommandKind::ALL
        .iter()
        .map(|kind| format!("{:<56} {}", kind.usage(), kind.summary()))
        .chain(std::iter::once(format!("{:<56} {}", ".exit", "leave the file manager")))
        .collect()
}
