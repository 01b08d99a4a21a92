use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ManifestConfig;
use crate::error::ScaffoldError;
use crate::schema::ProjectDescriptor;

use super::ENTRY_PATH;

/// The generated `package.json`. Field order here is the order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub author: String,
    pub version: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub main: String,
    pub scripts: BTreeMap<String, String>,
    pub engines: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Build the manifest. Only `name` depends on the project; every other
/// field comes from `config`.
pub fn manifest(project: &ProjectDescriptor, config: &ManifestConfig) -> PackageManifest {
    PackageManifest {
        name: project.class_name(),
        author: config.author.clone(),
        version: config.version.clone(),
        module_type: config.module_type.clone(),
        main: ENTRY_PATH.to_string(),
        scripts: BTreeMap::from([("start".to_string(), config.start_command.clone())]),
        engines: config.engines.clone(),
        dependencies: config.dependencies.clone(),
        dev_dependencies: config.dev_dependencies.clone(),
    }
}

/// Serialize the manifest as two-space indented JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`ScaffoldError::Json`] if serialization fails.
pub fn manifest_source(
    project: &ProjectDescriptor,
    config: &ManifestConfig,
) -> Result<String, ScaffoldError> {
    let mut out = serde_json::to_string_pretty(&manifest(project, config))?;
    out.push('\n');
    Ok(out)
}
