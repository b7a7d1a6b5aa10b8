//! Configuration for the `clonable` generator
//!
//! Values are resolved in the following order (highest priority wins):
//!
//! 1. **Command-line flags**
//! 2. **Environment variables** (`CLONABLE_*`)
//! 3. **Config file** (`clonable.toml`)
//! 4. **Defaults**
//!
//! ```toml
//! [codegen]
//! runtime_crate = "::clonable_core"
//! default_strategy = "shallow"
//! header = true
//!
//! [logging]
//! level = "info"
//! ```

pub mod codegen;
pub mod logging;

pub use codegen::CodegenConfig;
pub use logging::LoggingConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "clonable.toml";

/// Complete generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClonableConfig {
    pub codegen: CodegenConfig,
    pub logging: LoggingConfig,
}

impl ClonableConfig {
    /// Load configuration with the full supersedence chain: defaults, then
    /// the file at `path` if it exists, then environment variables.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.codegen.merge(other.codegen);
        self.logging.merge(other.logging);
    }

    pub fn apply_env_vars(&mut self) {
        self.apply_env(&|key| std::env::var(key).ok());
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env(&mut self, lookup: &dyn Fn(&str) -> Option<String>) {
        self.codegen.apply_env(lookup);
        self.logging.apply_env(lookup);
    }

    pub fn validate(&self) -> Result<()> {
        self.codegen.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clonable_codegen::CloneStrategy;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ClonableConfig::default();
        assert_eq!(config.codegen.runtime_crate, "::clonable_core");
        assert_eq!(config.codegen.default_strategy, CloneStrategy::Shallow);
        assert!(config.codegen.header);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClonableConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.codegen.runtime_crate, "::clonable_core");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clonable.toml");
        std::fs::write(
            &path,
            "[codegen]\ndefault_strategy = \"deep\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = ClonableConfig::from_file(&path).unwrap();
        assert_eq!(config.codegen.default_strategy, CloneStrategy::Deep);
        // Unset keys keep their defaults
        assert_eq!(config.codegen.runtime_crate, "::clonable_core");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = ClonableConfig::default();
        config.codegen.default_strategy = CloneStrategy::Deep;

        let env: HashMap<&str, &str> = [
            ("CLONABLE_DEFAULT_STRATEGY", "shallow"),
            ("CLONABLE_RUNTIME_CRATE", "my_app::clone"),
            ("CLONABLE_LOG_LEVEL", "warn"),
        ]
        .into();
        config.apply_env(&|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.codegen.default_strategy, CloneStrategy::Shallow);
        assert_eq!(config.codegen.runtime_crate, "my_app::clone");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clonable.toml");
        std::fs::write(&path, "[server]\nport = 1\n").unwrap();
        assert!(ClonableConfig::from_file(&path).is_err());
    }
}
