//! Tracing initialization and subscriber setup.
//!
//! Builds a registry with an [`EnvFilter`] and a formatting layer that
//! writes to stderr, leaving stdout to the host's own output.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "warn";

/// Initializes the global tracing subscriber.
///
/// # Parameters
///
/// * `config` - Selector configuration containing the `trace_level` option
///
/// # Filter Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set and valid
/// 3. Default: `"warn"`
///
/// An invalid directive falls through to the next source.
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber, later calls (or a
/// subscriber installed by the embedding application) are left in place.
///
/// # Example
///
/// ```rust
/// use multiselect::observability::init_tracing;
/// use multiselect::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = resolve_filter(config.trace_level.as_deref());

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    let _ = subscriber.try_init();
}

fn resolve_filter(trace_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| {
            trace_level.map_or_else(
                || EnvFilter::try_new(DEFAULT_LEVEL),
                EnvFilter::try_new,
            )
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_directive_falls_back_to_default() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(resolve_filter(Some("multiselect=loud")).to_string(), DEFAULT_LEVEL);
        assert_eq!(resolve_filter(None).to_string(), DEFAULT_LEVEL);
        assert_eq!(resolve_filter(Some("debug")).to_string(), "debug");
    }
}
