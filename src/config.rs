use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Keys that conventionally hold a case name inside a table-driven test row.
pub const DEFAULT_NAME_FIELDS: &[&str] = &[
    "name",
    "testName",
    "desc",
    "description",
    "scenario",
    "test",
    "caseName",
    "label",
];

pub const DEFAULT_TEST_PREFIX: &str = "Test";
pub const DEFAULT_RUN_METHOD: &str = "Run";
pub const DEFAULT_SEPARATOR: &str = "/";

/// Read-only knobs for a [`crate::Resolver`].
///
/// Every field has a default matching `go test`, so a config file only has to
/// name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Prefix a top-level function needs to count as a test.
    pub test_prefix: String,
    /// Method name of the sub-case call (`t.Run`).
    pub run_method: String,
    /// Row keys tried in this order, before falling back to the first string field.
    pub name_fields: Vec<String>,
    /// Joins selector segments.
    pub separator: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            test_prefix: DEFAULT_TEST_PREFIX.to_string(),
            run_method: DEFAULT_RUN_METHOD.to_string(),
            name_fields: DEFAULT_NAME_FIELDS.iter().map(|s| s.to_string()).collect(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading resolver config");

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: Self = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            _ => return Err(ConfigError::unsupported_format(extension)),
        };

        config.validate()?;
        trace!(?config, "resolver config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.test_prefix.is_empty() {
            return Err(ConfigError::invalid("test_prefix must not be empty"));
        }
        if self.run_method.is_empty() {
            return Err(ConfigError::invalid("run_method must not be empty"));
        }
        if self.separator.is_empty() {
            return Err(ConfigError::invalid("separator must not be empty"));
        }
        Ok(())
    }
}
