//! Logging setup.
//!
//! The subscriber is installed before settings are resolved so that
//! configuration problems are logged. Once settings are known, the filter is
//! narrowed to `LOG_LEVEL`. When `RUST_LOG` is set it wins and stays in
//! effect for the life of the process.

use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

use crate::config::LogLevel;

/// Filter used until settings have been resolved.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl LogHandle {
    /// Switches the active filter to `level` unless `RUST_LOG` pinned it.
    pub fn apply(&self, level: LogLevel) -> Result<(), reload::Error> {
        if self.pinned {
            tracing::debug!(%level, "RUST_LOG is set, ignoring LOG_LEVEL");
            return Ok(());
        }

        self.filter.reload(EnvFilter::new(level.directive()))
    }
}

/// Installs the global subscriber. Must be called once, before any logging.
pub fn init() -> LogHandle {
    let from_env = std::env::var("RUST_LOG")
        .ok()
        .filter(|directives| !directives.trim().is_empty());
    let pinned = from_env.is_some();
    let initial = from_env.unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());

    let (filter, handle) = reload::Layer::new(EnvFilter::new(initial));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    LogHandle {
        filter: handle,
        pinned,
    }
}
