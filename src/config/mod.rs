//! Service configuration.
//!
//! [`Settings`] is resolved once at startup from layered sources, highest
//! priority first:
//!
//! 1. the process environment
//! 2. a base `.env` file
//! 3. the environment-specific `.env.<ENVIRONMENT>` file
//! 4. the defaults below
//!
//! `ENVIRONMENT` itself comes from the process environment or `.env` and
//! defaults to `development`. Unrecognized variables are ignored. The only
//! failure is a value that cannot be coerced to its field's type.

mod level;
pub mod sources;

use std::ffi::OsString;
use std::num::ParseIntError;
use std::path::Path;

pub use level::{LogLevel, ParseLogLevelError};
use sources::{Hit, Layer, LayeredSource, PROCESS_ENV_LAYER};

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_SERVICE_NAME: &str = "Service Name";
pub const DEFAULT_SERVICE_VERSION: &str = "v0.0.1";
pub const DEFAULT_SERVICE_DESCRIPTION: &str = "Service Description";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8020;

/// Env file read beneath the process environment for every deployment.
pub const BASE_ENV_FILE: &str = ".env";

const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
const SERVICE_NAME_VAR: &str = "SERVICE_NAME";
const SERVICE_VERSION_VAR: &str = "SERVICE_VERSION";
const SERVICE_DESCRIPTION_VAR: &str = "SERVICE_DESCRIPTION";
const HOST_VAR: &str = "HOST";
const PORT_VAR: &str = "PORT";
const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Name of the env file selected by a deployment environment label.
pub fn environment_file_name(environment: &str) -> String {
    format!("{BASE_ENV_FILE}.{environment}")
}

/// Immutable service settings, shared with handlers through `web::Data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Deployment label that selected the environment-specific file.
    pub environment: String,
    pub service_name: String,
    pub service_version: String,
    pub service_description: String,
    pub host: String,
    pub port: u16,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_version: DEFAULT_SERVICE_VERSION.to_string(),
            service_description: DEFAULT_SERVICE_DESCRIPTION.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// Resolves settings from the process environment and env files in the
    /// working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(lossy_vars(std::env::vars_os()), Path::new("."))
    }

    /// Resolves settings from explicit variables and the env files in `dir`.
    pub fn resolve<I, K, V>(vars: I, dir: &Path) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let process = Layer::new(PROCESS_ENV_LAYER, vars);
        let base = Layer::from_env_file(&dir.join(BASE_ENV_FILE));

        let environment = process
            .get(ENVIRONMENT_VAR)
            .or_else(|| base.as_ref().and_then(|layer| layer.get(ENVIRONMENT_VAR)))
            .unwrap_or(DEFAULT_ENVIRONMENT)
            .to_string();

        let mut source = LayeredSource::default();
        source.push(process);
        if let Some(base) = base {
            source.push(base);
        }
        let specific_file = dir.join(environment_file_name(&environment));
        if let Some(specific) = Layer::from_env_file(&specific_file) {
            source.push(specific);
        }

        tracing::debug!(
            environment = %environment,
            layers = ?source.layer_names().collect::<Vec<_>>(),
            "Resolving settings"
        );

        Self::from_source(environment, &source)
    }

    /// Builds settings from an already assembled source, falling back to the
    /// defaults for every field the source does not define.
    pub fn from_source(environment: String, source: &LayeredSource) -> Result<Self, ConfigError> {
        let text = |key: &str, default: &str| {
            source
                .lookup(key)
                .map_or_else(|| default.to_string(), |hit| hit.value.to_string())
        };

        let port = match source.lookup(PORT_VAR) {
            Some(hit) => parse_port(hit)?,
            None => DEFAULT_PORT,
        };

        let log_level = match source.lookup(LOG_LEVEL_VAR) {
            Some(hit) => parse_log_level(hit)?,
            None => LogLevel::default(),
        };

        Ok(Self {
            environment,
            service_name: text(SERVICE_NAME_VAR, DEFAULT_SERVICE_NAME),
            service_version: text(SERVICE_VERSION_VAR, DEFAULT_SERVICE_VERSION),
            service_description: text(SERVICE_DESCRIPTION_VAR, DEFAULT_SERVICE_DESCRIPTION),
            host: text(HOST_VAR, DEFAULT_HOST),
            port,
            log_level,
        })
    }
}

/// Converts OS variables to UTF-8, replacing invalid sequences.
///
/// A non-UTF-8 value is kept rather than dropped so a recognized field still
/// fails coercion instead of silently falling back to its default.
fn lossy_vars<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .map(|(key, value)| {
            let key = key.to_string_lossy().into_owned();
            let value = match value.into_string() {
                Ok(value) => value,
                Err(raw) => {
                    tracing::warn!(variable = %key, "Environment variable is not valid UTF-8");
                    raw.to_string_lossy().into_owned()
                }
            };
            (key, value)
        })
        .collect()
}

fn parse_port(hit: Hit<'_>) -> Result<u16, ConfigError> {
    hit.value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidPort {
            value: hit.value.to_string(),
            origin: hit.origin.to_string(),
            source,
        })
}

fn parse_log_level(hit: Hit<'_>) -> Result<LogLevel, ConfigError> {
    hit.value
        .parse()
        .map_err(|source| ConfigError::InvalidLogLevel {
            value: hit.value.to_string(),
            origin: hit.origin.to_string(),
            source,
        })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT {value:?} from {origin}: {source}")]
    InvalidPort {
        value: String,
        origin: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid LOG_LEVEL {value:?} from {origin}: {source}")]
    InvalidLogLevel {
        value: String,
        origin: String,
        #[source]
        source: ParseLogLevelError,
    },
}
