//! Command router.
//!
//! An [`Invocation`] is validated into a typed [`Command`] against the
//! command table, then handed to the matching handler. [`Router::execute`]
//! is the only place a [`CommandError`] becomes an [`OperationResult`], so
//! handlers just propagate with `?`.

mod archive;
mod files;
mod nav;
mod os;
mod result;
mod table;

pub use result::{OperationResult, Outcome};
pub use table::{help_lines, Command, CommandKind, OsQuery};

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::parser::Invocation;
use crate::core::session::Session;
use crate::fs::{FsError, Gateway, LocalFs};
use crate::path::PathExpander;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed or incomplete command, rejected before touching the filesystem.
    InvalidInput(String),
    OperationFailed(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CommandError::OperationFailed(msg) => write!(f, "operation failed: {}", msg),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<FsError> for CommandError {
    fn from(err: FsError) -> Self {
        CommandError::OperationFailed(err.to_string())
    }
}

pub struct Router<G = LocalFs> {
    gateway: G,
    expander: PathExpander,
}

impl<G: Gateway> Router<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            expander: PathExpander::new(),
        }
    }

    pub fn with_expander(mut self, expander: PathExpander) -> Self {
        self.expander = expander;
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Runs one invocation against `session`. Never fails: every error is
    /// folded into the returned result.
    pub fn execute(&self, session: &mut Session, invocation: &Invocation) -> OperationResult {
        session.begin_dispatch();
        let result = Command::try_from(invocation).and_then(|command| {
            tracing::debug!(?command, cwd = %session.cwd().display(), "dispatching");
            self.run(session, command)
        });
        session.finish_dispatch();

        match result {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(command = %invocation.command, error = %err, "invocation failed");
                err.into()
            }
        }
    }

    fn run(&self, session: &mut Session, command: Command) -> Result<OperationResult, CommandError> {
        match command {
            Command::Up => self.up(session),
            Command::Cd { target } => self.cd(session, &target),
            Command::Ls => self.ls(session),
            Command::Nwd => Ok(self.nwd(session)),
            Command::Os(query) => self.os(query),
            Command::Cat { path } => self.cat(session, &path),
            Command::Add { path } => self.add(session, &path),
            Command::Rn { path, new_name } => self.rn(session, &path, &new_name),
            Command::Cp { src, dst } => self.cp(session, &src, &dst),
            Command::Mv { src, dst } => self.mv(session, &src, &dst),
            Command::Rm { path } => self.rm(session, &path),
            Command::Hash { path } => self.hash(session, &path),
            Command::Compress { src, dst } => self.compress(session, &src, &dst),
            Command::Decompress { src, dst } => self.decompress(session, &src, &dst),
            Command::Help => Ok(OperationResult::success("Type .exit to leave the file manager")
                .with_body(help_lines())),
        }
    }

    fn resolve(&self, session: &Session, raw: &str) -> PathBuf {
        self.expander.resolve(session.cwd(), raw)
    }

    /// Resolves `raw` and insists it names an existing regular file.
    fn existing_file(&self, session: &Session, raw: &str) -> Result<PathBuf, CommandError> {
        let path = self.resolve(session, raw);
        let stat = self.gateway.stat(&path)?;
        if !stat.exists {
            return Err(CommandError::OperationFailed(format!(
                "'{}' does not exist",
                path.display()
            )));
        }
        if stat.is_dir {
            return Err(CommandError::OperationFailed(format!(
                "'{}' is a directory",
                path.display()
            )));
        }
        Ok(path)
    }

    /// Picks the output path for a stream command. An existing directory
    /// receives `default_name` inside it; an existing file is refused.
    fn destination(&self, session: &Session, raw: &str, default_name: &OsStr) -> Result<PathBuf, CommandError> {
        let mut target = self.resolve(session, raw);
        if self.gateway.stat(&target)?.is_dir {
            target.push(default_name);
        }
        ensure_vacant(&self.gateway, &target)?;
        Ok(target)
    }
}

fn ensure_vacant<G: Gateway>(gateway: &G, path: &Path) -> Result<(), CommandError> {
    if gateway.stat(path)?.exists {
        return Err(CommandError::OperationFailed(format!(
            "'{}' already exists",
            path.display()
        )));
    }
    Ok(())
}

fn file_name_of(path: &Path) -> Result<&OsStr, CommandError> {
    path.file_name().ok_or_else(|| {
        CommandError::InvalidInput(format!("'{}' does not name a file", path.display()))
    })
}
