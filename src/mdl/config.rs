//! Configuration for the notation compiler.
//!
//! `defaults/mdl.default.toml` is embedded into the crate so that the documented
//! defaults and the runtime behavior stay in sync. Applications layer user files
//! and single-key overrides on top of those defaults via [`Loader`] before
//! deserializing into [`MdlConfig`].
//!
//! [`MdlConfig::default`] returns the same values without going through the
//! loader, for library callers that never read configuration files.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/mdl.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct MdlConfig {
    pub tokenizer: TokenizerConfig,
    pub validation: ValidationConfig,
}

/// How tokens reach the parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenizerConfig {
    pub background: bool,
    pub queue_capacity: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            background: true,
            queue_capacity: 64,
        }
    }
}

/// Policy knobs of the validator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationConfig {
    /// Required module alias length; 0 disables the check.
    pub module_alias_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            module_alias_length: 3,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file, ignored if absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a command line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdlConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_match_default_impl() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config, MdlConfig::default());
        assert!(config.tokenizer.background);
        assert_eq!(config.tokenizer.queue_capacity, 64);
        assert_eq!(config.validation.module_alias_length, 3);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("validation.module_alias_length", 0i64)
            .expect("override to apply")
            .set_override("tokenizer.background", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.validation.module_alias_length, 0);
        assert!(!config.tokenizer.background);
    }

    #[test]
    fn layers_user_files() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[tokenizer]\nqueue_capacity = 8").expect("write temp file");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.tokenizer.queue_capacity, 8);
        assert!(config.tokenizer.background);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new().with_file("/nonexistent/mdl.toml").build().is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/mdl.toml")
            .build()
            .expect("config to build");
        assert_eq!(config, MdlConfig::default());
    }
}
