use std::collections::HashSet;

use crate::error::{ScaffoldError, Severity, Violation};
use crate::schema::types::ProjectDescriptor;

/// Name of the method every generated contract already defines.
const PROLOGUE_METHOD: &str = "initLedger";

/// Check a chaincode name against `^[a-zA-Z0-9_-]+$`.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] if the name is empty or
/// contains any other character.
pub fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName(name.to_string()))
    }
}

/// Whether `s` is a plain ASCII JavaScript identifier.
pub fn is_js_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Check a project's operation list before generation.
///
/// Generation itself accepts anything; these findings are for the
/// collector to report. Only [`Severity::Error`] findings should stop a run.
pub fn validate_project(project: &ProjectDescriptor) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !is_js_identifier(&project.name) {
        violations.push(Violation {
            severity: Severity::Warning,
            rule: "OP-006".to_string(),
            message: format!(
                "chaincode name '{}' is not a JavaScript identifier; the generated \
                 class and export names will not parse",
                project.name
            ),
            location: Some("name".to_string()),
        });
    }

    if project.operations.is_empty() {
        violations.push(Violation {
            severity: Severity::Info,
            rule: "OP-005".to_string(),
            message: "no operations declared; the contract will only define initLedger"
                .to_string(),
            location: Some("operations".to_string()),
        });
    }

    let mut seen = HashSet::new();
    for (i, op) in project.operations.iter().enumerate() {
        let location = Some(format!("operations[{i}].name"));

        if op.name.is_empty() {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "OP-001".to_string(),
                message: format!("operations[{i}].name must not be empty"),
                location,
            });
            continue;
        }

        if !seen.insert(op.name.as_str()) {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "OP-002".to_string(),
                message: format!(
                    "operation '{}' is declared more than once; later definitions \
                     override earlier ones",
                    op.name
                ),
                location: location.clone(),
            });
        }

        if op.name == PROLOGUE_METHOD {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "OP-003".to_string(),
                message: format!("operation '{PROLOGUE_METHOD}' collides with the prologue"),
                location: location.clone(),
            });
        }

        if !is_js_identifier(&op.name) {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "OP-004".to_string(),
                message: format!("operation '{}' is not a valid method name", op.name),
                location,
            });
        }
    }

    violations
}
