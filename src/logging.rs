use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FILEMAN_LOG";

/// Diagnostics go to stderr so they never interleave with command output
/// on stdout. `FILEMAN_LOG` wins over `--debug`.
pub fn init(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: logging already initialised: {}", e);
    }
}
