//! Generator configuration.
//!
//! Every constant that ends up in generated files (manifest pins, author,
//! launch command, composite-key index name) lives here rather than inside
//! template text. All fields are optional in the YAML form and fall back
//! to [`GeneratorConfig::default`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub manifest: ManifestConfig,
    /// Index name passed to `createCompositeKey` by composite-key templates.
    pub composite_index: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            manifest: ManifestConfig::default(),
            composite_index: "compositeIndex".to_string(),
        }
    }
}

/// Fixed fields of the generated `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub author: String,
    pub version: String,
    /// Value of the `type` field; `module` makes `.js` files ES modules.
    pub module_type: String,
    pub start_command: String,
    pub engines: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

fn pins(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            author: "ameers".to_string(),
            version: "1.0.0".to_string(),
            module_type: "module".to_string(),
            start_command: "fabric-chaincode-node start".to_string(),
            engines: pins(&[("node", ">=12"), ("npm", ">=5")]),
            dependencies: pins(&[("fabric-contract-api", "^2.5.2"), ("fabric-shim", "^2.5.2")]),
            dev_dependencies: pins(&[("esdoc", "^1.1.0"), ("esdoc-standard-plugin", "^1.0.0")]),
        }
    }
}

/// Load a generator config YAML file.
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if the file cannot be read,
/// or [`ScaffoldError::Yaml`] if the YAML is malformed.
pub fn parse_config(path: &Path) -> Result<GeneratorConfig, ScaffoldError> {
    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse a generator config from a YAML string.
pub fn parse_config_str(yaml: &str) -> Result<GeneratorConfig, ScaffoldError> {
    if yaml.trim().is_empty() {
        return Ok(GeneratorConfig::default());
    }
    let config: GeneratorConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}
