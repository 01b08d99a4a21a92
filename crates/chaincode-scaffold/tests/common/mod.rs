//! Shared helpers for pipeline and property tests.

#![allow(dead_code)]

use chaincode_scaffold::generate::{ArtifactKind, GeneratedArtifact};
use chaincode_scaffold::schema::{OperationDescriptor, OperationKind, ProjectDescriptor};

/// Build a project from `(name, kind tag)` pairs.
pub fn project(name: &str, ops: &[(&str, &str)]) -> ProjectDescriptor {
    ProjectDescriptor::new(
        name,
        ops.iter()
            .map(|(n, tag)| OperationDescriptor::new(*n, OperationKind::from_tag(tag)))
            .collect(),
    )
}

/// Content of the artifact of the given kind.
pub fn content(artifacts: &[GeneratedArtifact], kind: ArtifactKind) -> &str {
    artifacts
        .iter()
        .find(|a| a.kind == kind)
        .map(|a| a.content.as_str())
        .unwrap_or_else(|| panic!("no {kind} artifact"))
}

/// Asserts every needle occurs in `haystack`, each after the previous one.
pub fn assert_in_order(haystack: &str, needles: &[String]) {
    let mut from = 0;
    for needle in needles {
        let pos = haystack[from..]
            .find(needle.as_str())
            .unwrap_or_else(|| panic!("{needle:?} not found after byte {from}"));
        from += pos + needle.len();
    }
}

/// Method names in the order they are declared in a contract source.
pub fn declared_methods(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|l| l.strip_prefix("    async "))
        .filter_map(|l| l.split('(').next())
        .map(str::to_string)
        .collect()
}
