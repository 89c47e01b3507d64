//! Layered key/value sources for settings resolution.
//!
//! A [`Layer`] is one named set of variables: the process environment or a
//! dotenv file. [`LayeredSource`] holds layers in priority order and answers
//! lookups with the first layer that defines a key. Keys are compared
//! case-insensitively.

use std::collections::HashMap;
use std::path::Path;

/// Name reported for values that came from the process environment.
pub const PROCESS_ENV_LAYER: &str = "environment";

#[derive(Debug, Clone, Default)]
pub struct Layer {
    name: String,
    values: HashMap<String, String>,
}

impl Layer {
    pub fn new<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_ascii_uppercase(), value.into()))
            .collect();

        Self {
            name: name.into(),
            values,
        }
    }

    /// Reads a dotenv-formatted file into a layer named after the file.
    ///
    /// Returns `None` when the file does not exist. A file that cannot be
    /// read is skipped with a warning, as are individual malformed lines;
    /// neither aborts settings resolution. The process environment is never
    /// modified.
    pub fn from_env_file(path: &Path) -> Option<Self> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let lines = match dotenv::from_path_iter(path) {
            Ok(lines) => lines,
            Err(e) if e.not_found() => {
                tracing::debug!(file = %name, "Env file not present");
                return None;
            }
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "Failed to open env file, skipping");
                return None;
            }
        };

        let mut values = HashMap::new();
        for line in lines {
            match line {
                Ok((key, value)) => {
                    values.insert(key.to_ascii_uppercase(), value);
                }
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "Skipping unparsable env file line");
                }
            }
        }

        tracing::debug!(file = %name, keys = values.len(), "Loaded env file");
        Some(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(&key.to_ascii_uppercase())
            .map(String::as_str)
    }
}

/// A value found by [`LayeredSource::lookup`] and the layer that supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    pub value: &'a str,
    pub origin: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct LayeredSource {
    layers: Vec<Layer>,
}

impl LayeredSource {
    /// Appends a layer below every layer already present.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn lookup(&self, key: &str) -> Option<Hit<'_>> {
        self.layers.iter().find_map(|layer| {
            layer.get(key).map(|value| Hit {
                value,
                origin: layer.name(),
            })
        })
    }

    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(Layer::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_first_layer_wins() {
        let mut source = LayeredSource::default();
        source.push(Layer::new("upper", [("PORT", "1")]));
        source.push(Layer::new("lower", [("PORT", "2"), ("HOST", "example")]));

        assert_eq!(
            source.lookup("PORT"),
            Some(Hit {
                value: "1",
                origin: "upper"
            })
        );
        assert_eq!(source.lookup("HOST").map(|hit| hit.origin), Some("lower"));
        assert_eq!(source.lookup("MISSING"), None);
    }

    #[test]
    fn test_keys_match_case_insensitively() {
        let layer = Layer::new("env", [("service_name", "billing")]);

        assert_eq!(layer.get("SERVICE_NAME"), Some("billing"));
        assert_eq!(layer.get("Service_Name"), Some("billing"));
    }

    #[test]
    fn test_missing_env_file_is_none() {
        let dir = tempfile::tempdir().unwrap();

        assert!(Layer::from_env_file(&dir.path().join(".env.nowhere")).is_none());
    }

    #[test]
    fn test_env_file_layer_is_named_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.staging");
        fs::write(&path, "# comment\nPORT=9001\nSERVICE_NAME=\"Billing API\"\n").unwrap();

        let layer = Layer::from_env_file(&path).expect("file exists");

        assert_eq!(layer.name(), ".env.staging");
        assert_eq!(layer.get("PORT"), Some("9001"));
        assert_eq!(layer.get("SERVICE_NAME"), Some("Billing API"));
    }
}
