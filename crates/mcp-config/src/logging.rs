//! Tracing setup for binaries built on this crate.
//!
//! The store and gitignore guard emit their diagnostics (lenient-read
//! warnings, write confirmations) through `tracing`; nothing is printed
//! unless the hosting binary installs a subscriber. [`init`] is that
//! one-call default.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the default subscriber: compact format on stderr, filtered by
/// `RUST_LOG` (falling back to `info`).
///
/// Stderr keeps command output on stdout machine-readable, JSON listings in
/// particular. Errors if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
