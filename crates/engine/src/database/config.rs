//! Database configuration via `docgraph.toml`
//!
//! Every field is optional in the file; missing fields take their defaults.
//! Write-option defaults live in the `[defaults]` table and apply whenever a
//! caller leaves the corresponding option unset.

use docgraph_core::{
    DocumentLimits, Error, Result, WritePolicy, MAX_DOCUMENT_SIZE, MAX_NESTING_DEPTH,
};
use docgraph_storage::KeyGeneratorKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "docgraph.toml";

/// Database configuration loaded from `docgraph.toml`.
///
/// # Example
///
/// ```toml
/// parallel_batch_threshold = 32
/// max_batch_size = 10000
/// max_cas_retries = 16
/// key_generator = "traditional"
///
/// [defaults]
/// keep_null = true
/// merge_objects = true
/// ignore_revs = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Batches at least this long are processed in parallel.
    #[serde(default = "default_parallel_batch_threshold")]
    pub parallel_batch_threshold: usize,
    /// Largest accepted batch; longer batches are rejected whole.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
    /// Extra compare-and-swap attempts after a lost write race.
    #[serde(default = "default_max_cas_retries")]
    pub max_cas_retries: u32,
    /// Key generator: `"traditional"` or `"uuid"`.
    #[serde(default = "default_key_generator")]
    pub key_generator: String,
    /// Largest serialized document body in bytes.
    #[serde(default = "default_max_document_size")]
    pub max_document_size: usize,
    /// Deepest accepted object/array nesting.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
    /// Write option defaults.
    #[serde(default)]
    pub defaults: WritePolicy,
}

fn default_parallel_batch_threshold() -> usize {
    32
}

fn default_max_batch_size() -> usize {
    10_000
}

fn default_max_cas_retries() -> u32 {
    16
}

fn default_key_generator() -> String {
    "traditional".to_string()
}

fn default_max_document_size() -> usize {
    MAX_DOCUMENT_SIZE
}

fn default_max_nesting_depth() -> usize {
    MAX_NESTING_DEPTH
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            parallel_batch_threshold: default_parallel_batch_threshold(),
            max_batch_size: default_max_batch_size(),
            max_cas_retries: default_max_cas_retries(),
            key_generator: default_key_generator(),
            max_document_size: default_max_document_size(),
            max_nesting_depth: default_max_nesting_depth(),
            defaults: WritePolicy::default(),
        }
    }
}

impl DatabaseConfig {
    /// Parse the key generator string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"traditional"` or `"uuid"`.
    pub fn key_generator_kind(&self) -> Result<KeyGeneratorKind> {
        self.key_generator.parse()
    }

    /// Document limits derived from this config.
    pub fn limits(&self) -> DocumentLimits {
        DocumentLimits {
            max_document_size: self.max_document_size,
            max_nesting_depth: self.max_nesting_depth,
        }
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_batch_threshold == 0 {
            return Err(Error::bad_parameter(
                "parallel_batch_threshold must be at least 1",
            ));
        }
        if self.max_batch_size == 0 {
            return Err(Error::bad_parameter("max_batch_size must be at least 1"));
        }
        if self.max_document_size == 0 {
            return Err(Error::bad_parameter("max_document_size must be at least 1"));
        }
        if self.max_nesting_depth == 0 {
            return Err(Error::bad_parameter("max_nesting_depth must be at least 1"));
        }
        self.key_generator_kind()?;
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# docgraph configuration
#
# Batches with at least this many items are processed in parallel.
parallel_batch_threshold = 32

# Larger batches are rejected before any item runs.
max_batch_size = 10000

# Extra attempts after losing a write race on the same document.
max_cas_retries = 16

# Key generator for documents created without _key: "traditional" or "uuid"
key_generator = "traditional"

# Document limits
max_document_size = 16777216
max_nesting_depth = 100

# Write option defaults, used when a request leaves an option unset.
[defaults]
return_old = false
return_new = false
keep_null = true
merge_objects = true
ignore_revs = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::internal(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: DatabaseConfig = toml::from_str(&content).map_err(|e| {
            Error::bad_parameter(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::internal(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::internal(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::internal(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = DatabaseConfig::default();
        assert_eq!(config.parallel_batch_threshold, 32);
        assert_eq!(config.max_batch_size, 10_000);
        assert_eq!(config.max_cas_retries, 16);
        assert_eq!(
            config.key_generator_kind().unwrap(),
            KeyGeneratorKind::Traditional
        );
        assert_eq!(config.defaults, WritePolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_toml_matches_default() {
        let config: DatabaseConfig = toml::from_str(DatabaseConfig::default_toml()).unwrap();
        assert_eq!(config, DatabaseConfig::default());
    }

    #[test]
    fn parse_uuid_generator() {
        let config: DatabaseConfig = toml::from_str("key_generator = \"uuid\"").unwrap();
        assert_eq!(config.key_generator_kind().unwrap(), KeyGeneratorKind::Uuid);
    }

    #[test]
    fn invalid_generator_fails_validation() {
        let config: DatabaseConfig = toml::from_str("key_generator = \"autoincrement\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_threshold_fails_validation() {
        let config = DatabaseConfig {
            parallel_batch_threshold: 0,
            ..DatabaseConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_defaults_table() {
        let config: DatabaseConfig = toml::from_str("[defaults]\nkeep_null = false\n").unwrap();
        assert!(!config.defaults.keep_null);
        assert!(config.defaults.merge_objects);
        assert!(config.defaults.ignore_revs);
    }

    #[test]
    fn write_default_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(!path.exists());

        DatabaseConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());

        let config = DatabaseConfig::from_file(&path).unwrap();
        assert_eq!(config, DatabaseConfig::default());
    }

    #[test]
    fn write_default_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "max_cas_retries = 2\n").unwrap();
        DatabaseConfig::write_default_if_missing(&path).unwrap();

        let config = DatabaseConfig::from_file(&path).unwrap();
        assert_eq!(config.max_cas_retries, 2);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "").unwrap();

        let config = DatabaseConfig::from_file(&path).unwrap();
        assert_eq!(config, DatabaseConfig::default());
    }

    #[test]
    fn from_file_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "max_batch_size = \"lots\"").unwrap();

        let err = DatabaseConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::BadParameter { .. }));
    }

    #[test]
    fn from_file_missing_is_internal() {
        let dir = TempDir::new().unwrap();
        let err = DatabaseConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Internal { .. }));
    }

    #[test]
    fn write_to_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut config = DatabaseConfig {
            parallel_batch_threshold: 4,
            key_generator: "uuid".to_string(),
            ..DatabaseConfig::default()
        };
        config.defaults.return_new = true;

        config.write_to_file(&path).unwrap();
        assert_eq!(DatabaseConfig::from_file(&path).unwrap(), config);
    }
}
