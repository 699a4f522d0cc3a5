use std::io::IsTerminal;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes a process-wide `tracing` subscriber. Verbosity is `info` by
/// default, `debug` with `--verbose`, and always overridable with
/// `RUST_LOG`. Color is disabled automatically when stdout isn't a
/// terminal (redirected to a file, piped into `jq`, running in CI).
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = fmt::layer()
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}
