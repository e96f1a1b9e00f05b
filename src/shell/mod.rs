//! The session loop.
//!
//! Reads one line at a time, hands it to the router and reports the
//! outcome. Nothing a command does can end the loop; only `.exit`, an
//! interrupt at the prompt, or the end of input can.

mod output;
mod startup;

pub use output::Reporter;
pub use startup::resolve_start_dir;

use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use crate::core::commands::OperationResult;
use crate::core::config::AliasManager;
use crate::core::parser::Invocation;
use crate::core::session::Session;
use crate::core::Router;
use crate::fs::{Gateway, LocalFs};
use crate::highlight::SyntaxHighlighter;
use crate::input::{LineSource, ReadOutcome};

pub const EXIT_TOKEN: &str = ".exit";
pub const GUEST: &str = "Guest";
const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell<S: LineSource, W: Write, G: Gateway = LocalFs> {
    source: S,
    reporter: Reporter<W>,
    session: Session,
    router: Router<G>,
    aliases: AliasManager,
    username: String,
    quiet: bool,
}

impl<S: LineSource, W: Write, G: Gateway> Shell<S, W, G> {
    pub fn new(source: S, out: W, session: Session, router: Router<G>) -> Self {
        Shell {
            source,
            reporter: Reporter::new(out, SyntaxHighlighter::plain()),
            session,
            router,
            aliases: AliasManager::new(),
            username: GUEST.to_string(),
            quiet: false,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_aliases(mut self, aliases: AliasManager) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_highlighter(mut self, highlighter: SyntaxHighlighter) -> Self {
        self.reporter.set_highlighter(highlighter);
        self
    }

    /// Suppresses the greeting and farewell banners.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn output(&self) -> &W {
        self.reporter.get_ref()
    }

    pub fn welcome_message(&self) -> String {
        format!("Welcome to the File Manager, {}!", self.username)
    }

    pub fn farewell_message(&self) -> String {
        format!("Thank you for using File Manager, {}, goodbye!", self.username)
    }

    pub fn run(&mut self) {
        if !self.quiet {
            let welcome = self.welcome_message();
            self.reporter.greeting(&welcome);
        }
        self.reporter.location(self.session.cwd());

        while self.session.is_active() {
            let event = match self.source.read_line(PROMPT) {
                Ok(event) => event,
                Err(e) => {
                    tracing::error!(error = %e, "input failed, ending session");
                    ReadOutcome::Eof
                }
            };

            let flow = match event {
                ReadOutcome::Line(line) => self.handle_line(&line),
                ReadOutcome::Interrupted | ReadOutcome::Eof => Flow::Exit,
            };
            if flow == Flow::Exit {
                self.session.terminate();
            }
        }

        if !self.quiet {
            let farewell = self.farewell_message();
            self.reporter.farewell(&farewell);
        }
        if let Err(e) = self.source.save_history() {
            tracing::warn!(error = %e, "could not save history");
        }
    }

    /// Handles one input line and says whether the loop should go on.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        if line.trim().eq_ignore_ascii_case(EXIT_TOKEN) {
            return Flow::Exit;
        }

        let expanded = self.aliases.expand_command(line);
        let invocation = Invocation::parse(&expanded);
        let result = self.dispatch(&invocation);

        self.reporter.report(&result);
        self.source.set_working_dir(self.session.cwd());
        self.reporter.location(self.session.cwd());
        Flow::Continue
    }

    fn dispatch(&mut self, invocation: &Invocation) -> OperationResult {
        let router = &self.router;
        let session = &mut self.session;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| router.execute(session, invocation)));

        match outcome {
            Ok(result) => result,
            Err(payload) => {
                let reason = panic_reason(payload.as_ref());
                tracing::error!(command = %invocation.command, reason, "command panicked");
                self.session.finish_dispatch();
                OperationResult::failure(format!(
                    "internal error while running '{}': {}",
                    invocation.command, reason
                ))
            }
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
