use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "sentiment_prep.log";
const DEFAULT_FILTER: &str = "sentiment_prep=info,warn";

/// Console logging on stderr plus a daily-rolled JSON file under `logs/`.
///
/// `RUST_LOG` overrides the default filter. Stdout is left to the
/// `validate` and `info` commands.
pub fn init_logging() {
    if let Err(e) = fs::create_dir_all(LOG_DIR) {
        eprintln!("could not create {}/: {}", LOG_DIR, e);
    }

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(LOG_DIR, LOG_FILE));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    // the writer thread flushes until the guard drops; the process owns it
    std::mem::forget(guard);
}
