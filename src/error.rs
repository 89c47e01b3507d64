use std::io;

use crate::config::ConfigError;

/// Failures that stop the service from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to apply log level: {0}")]
    Logging(#[from] tracing_subscriber::reload::Error),

    #[error("Server error: {0}")]
    Io(#[from] io::Error),
}
