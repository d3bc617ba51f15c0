//! Driver for the radix literal scanner.
//!
//! Parses command-line arguments into a [`DriverConfig`], gathers input
//! lines, and reports one token (or every token) per line.

pub mod config;
mod error;
pub mod report;

use std::sync::Once;

pub use config::{parse_args, Command, DriverConfig, InputSource, Mode};
pub use error::DriverError;
pub use report::{run, Outcome};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debugging.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=radix_lexer_core=trace` or `RUST_LOG=radixc=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
