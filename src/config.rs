use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Labeler settings: how translation keys are composed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelerConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_attributes_scope")]
    pub attributes_scope: String,
    #[serde(default = "default_normalize_tokens")]
    pub normalize_tokens: bool,
}

fn default_namespace() -> String {
    "activerecord".to_string()
}

fn default_attributes_scope() -> String {
    "attributes".to_string()
}

fn default_normalize_tokens() -> bool {
    true
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            attributes_scope: default_attributes_scope(),
            normalize_tokens: default_normalize_tokens(),
        }
    }
}

impl LabelerConfig {
    /// Validate configuration values.
    ///
    /// Key segments must be non-empty and must not contain `.`, which would
    /// shift every key one level deeper than the translation tree.
    pub fn validate(&self) -> Result<()> {
        validate_segment("namespace", &self.namespace)?;
        validate_segment("attributesScope", &self.attributes_scope)?;
        Ok(())
    }

    /// Key prefix shared by every enum of a model:
    /// `<namespace>.<attributesScope>.<modelKey>`.
    pub fn key_prefix(&self, model_key: &str) -> String {
        format!("{}.{}.{}", self.namespace, self.attributes_scope, model_key)
    }
}

fn validate_segment(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("'{}' must not be empty", name);
    }
    if value.contains('.') {
        bail!("'{}' must be a single key segment, got \"{}\"", name, value);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = LabelerConfig::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Loads and validates a labeler config from a JSON file.
pub fn load_config(path: &Path) -> Result<LabelerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: LabelerConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    tracing::debug!(path = %path.display(), ?config, "loaded labeler config");
    Ok(config)
}
