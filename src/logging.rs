//! Logging setup for the command-line binary.
//!
//! The library only emits `tracing` events; the binary decides where they
//! go. The web UI leaves them unsubscribed.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the crate logs at `info`, or at
/// `debug` with `verbose`.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "playground_rs=debug,info"
    } else {
        "playground_rs=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
