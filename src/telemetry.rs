//! Tracing subscriber set-up.

use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Filter directive used when the configured one cannot be parsed.
pub const FALLBACK_DIRECTIVE: &str = "info";

/// Installs the global `fmt` subscriber filtered by `directive`.
///
/// An unparsable directive falls back to [`FALLBACK_DIRECTIVE`] and is
/// reported once the subscriber is active. ANSI colours are disabled when
/// `ansi` is false, as CloudWatch shows escape codes verbatim.
///
/// Returns `false` when a global subscriber was already installed.
#[must_use]
pub fn init(directive: &str, ansi: bool) -> bool {
    let (filter, rejected) = EnvFilter::try_new(directive).map_or_else(
        |err| (EnvFilter::new(FALLBACK_DIRECTIVE), Some(err)),
        |parsed| (parsed, None),
    );

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .try_init()
        .is_ok();

    if let Some(err) = rejected {
        warn!(%directive, error = %err, "invalid log level, using {FALLBACK_DIRECTIVE}");
    }
    installed
}
