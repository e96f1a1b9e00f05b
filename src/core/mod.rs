pub mod commands;
pub mod config;
pub mod parser;
pub mod session;

pub use commands::{CommandError, OperationResult, Outcome, Router};
pub use parser::Invocation;
pub use session::{Session, SessionState};
