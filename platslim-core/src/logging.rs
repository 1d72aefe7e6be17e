//! Structured logging using **tracing**.
//!
//! Events go to stderr as JSON so stdout carries only the pasteable
//! output of the tool.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("platslim_core=debug,platslim=debug,info")
    } else {
        EnvFilter::new("warn")
    }
}

/// Initializes the global tracing subscriber.
///
/// Call once at startup. `RUST_LOG` takes precedence over `verbose`.
pub fn init_structured_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let installed = tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
