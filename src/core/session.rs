use std::path::{Path, PathBuf};

/// Where a session is in its lifecycle.
///
/// `Idle -> Dispatching -> Idle` for every invocation; `Terminating` is
/// terminal and is reached from `Idle` on `.exit`, interrupt or end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Dispatching,
    Terminating,
}

/// A single interactive session: the working directory and the state machine.
///
/// The working directory belongs to the session, not to the process, so
/// several sessions can live side by side in one process.
#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
    state: SessionState,
}

impl Session {
    /// `cwd` must be an existing, canonical directory.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            state: SessionState::Idle,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != SessionState::Terminating
    }

    /// Adopts an already validated directory.
    pub(crate) fn change_dir(&mut self, dir: PathBuf) {
        tracing::debug!(from = %self.cwd.display(), to = %dir.display(), "working directory changed");
        self.cwd = dir;
    }

    pub(crate) fn begin_dispatch(&mut self) {
        if self.state == SessionState::Idle {
            self.state = SessionState::Dispatching;
        }
    }

    pub(crate) fn finish_dispatch(&mut self) {
        if self.state == SessionState::Dispatching {
            self.state = SessionState::Idle;
        }
    }

    pub fn terminate(&mut self) {
        self.state = SessionState::Terminating;
    }
}
