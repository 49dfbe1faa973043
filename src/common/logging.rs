//! Logging and tracing configuration
//!
//! Structured diagnostics go through `tracing`; the per-job status lines
//! and the final summary are printed directly by the result recorder.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing for the harness (stdout logging)
///
/// Logs are controlled by the `RUST_LOG` environment variable; `verbose`
/// raises the default level for this crate from INFO to DEBUG.
pub fn init(verbose: bool) {
    let default_directives = if verbose {
        "export_harness=debug,warn"
    } else {
        "export_harness=info,warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
