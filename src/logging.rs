//! Simple tracing subscriber setup used by the application.

use std::env;

use tracing_subscriber::{EnvFilter, fmt};

/// Logs go to stderr, stdout is kept for the prompt and the final confirmation.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.with_ansi(true).init(),
    }

    tracing::debug!("logger initialized");
}
