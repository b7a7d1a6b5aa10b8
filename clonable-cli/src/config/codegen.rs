//! Code generation configuration

use anyhow::{anyhow, Context, Result};
use clonable_codegen::{CloneStrategy, GeneratorDefaults, DEFAULT_RUNTIME_CRATE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Path generated code uses to reach the `Clonable` trait.
    pub runtime_crate: String,
    /// Strategy for schema fields with no strategy of their own and no record default.
    pub default_strategy: CloneStrategy,
    /// Prepend a `// @generated` banner to written files.
    pub header: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            default_strategy: CloneStrategy::Shallow,
            header: true,
        }
    }
}

impl CodegenConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env(&mut self, lookup: &dyn Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("CLONABLE_RUNTIME_CRATE") {
            self.runtime_crate = path;
        }
        if let Some(strategy) = lookup("CLONABLE_DEFAULT_STRATEGY") {
            if let Ok(strategy) = strategy.parse() {
                self.default_strategy = strategy;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.generator_defaults().map(|_| ())
    }

    /// Settings handed to the schema inspector.
    pub fn generator_defaults(&self) -> Result<GeneratorDefaults> {
        let runtime = syn::parse_str::<syn::Path>(&self.runtime_crate)
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("invalid runtime_crate \"{}\"", self.runtime_crate))?;
        Ok(GeneratorDefaults { runtime, default_strategy: self.default_strategy })
    }
}
