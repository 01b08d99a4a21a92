use std::path::Path;

use serde::Deserialize;

use crate::error::ScaffoldError;
use crate::schema::types::OperationDescriptor;

/// Mapping layout of a batch operations file. Other keys are ignored.
#[derive(Deserialize)]
struct OperationsDocument {
    operations: Vec<OperationDescriptor>,
}

/// Read a batch operations file (YAML, or JSON since JSON is valid YAML).
///
/// The file holds either a bare list of `{name, kind}` entries or a
/// mapping with an `operations:` list.
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if the file cannot be read,
/// or [`ScaffoldError::Yaml`] if it matches neither layout. A blank file
/// holds no operations.
pub fn parse_operations(path: &Path) -> Result<Vec<OperationDescriptor>, ScaffoldError> {
    let content = std::fs::read_to_string(path)?;
    parse_operations_str(&content)
}

/// Parse a batch operations list from a string.
///
/// The layout is picked from the top-level node, then the text is parsed
/// again into that layout so field errors keep their line and column.
pub fn parse_operations_str(yaml: &str) -> Result<Vec<OperationDescriptor>, ScaffoldError> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_yaml::from_str::<serde_yaml::Value>(yaml)? {
        serde_yaml::Value::Null => Ok(Vec::new()),
        serde_yaml::Value::Mapping(_) => {
            let doc: OperationsDocument = serde_yaml::from_str(yaml)?;
            Ok(doc.operations)
        }
        _ => Ok(serde_yaml::from_str(yaml)?),
    }
}
