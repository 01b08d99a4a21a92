//! End-to-end generation.
//!
//! [`generate_artifacts`] builds every project file in memory;
//! [`write_artifacts`] persists them; [`generate_project`] does both under
//! `<dir>/<name>/`.

use std::path::{Path, PathBuf};

use crate::assemble::assemble;
use crate::config::GeneratorConfig;
use crate::error::ScaffoldError;
use crate::schema::ProjectDescriptor;
use crate::skeleton::{
    entry_source, manifest_source, readme, CHAINCODE_PATH, ENTRY_PATH, MANIFEST_PATH,
    README_PATH,
};

/// The kind of generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Chaincode,
    EntryModule,
    Manifest,
    Readme,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chaincode => write!(f, "chaincode"),
            Self::EntryModule => write!(f, "entry"),
            Self::Manifest => write!(f, "manifest"),
            Self::Readme => write!(f, "readme"),
        }
    }
}

/// One generated file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    pub kind: ArtifactKind,
    pub content: String,
}

impl GeneratedArtifact {
    fn new(path: &str, kind: ArtifactKind, content: String) -> Self {
        Self {
            relative_path: PathBuf::from(path),
            kind,
            content,
        }
    }
}

/// Manifest of written files.
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    /// Project root the files were written under.
    pub root: PathBuf,
    pub files: Vec<GeneratedFile>,
}

/// A single written (or, in a dry run, planned) file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    /// Absolute path of the file.
    pub absolute_path: PathBuf,
    pub kind: ArtifactKind,
    /// Number of bytes written.
    pub bytes: usize,
}

/// Build every project file in memory.
///
/// Order is fixed: contract, entry module, manifest, README.
///
/// # Errors
///
/// Returns [`ScaffoldError::Json`] if the manifest cannot be serialized.
pub fn generate_artifacts(
    project: &ProjectDescriptor,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedArtifact>, ScaffoldError> {
    Ok(vec![
        GeneratedArtifact::new(
            CHAINCODE_PATH,
            ArtifactKind::Chaincode,
            assemble(project, config),
        ),
        GeneratedArtifact::new(ENTRY_PATH, ArtifactKind::EntryModule, entry_source(project)),
        GeneratedArtifact::new(
            MANIFEST_PATH,
            ArtifactKind::Manifest,
            manifest_source(project, &config.manifest)?,
        ),
        GeneratedArtifact::new(README_PATH, ArtifactKind::Readme, readme(project)),
    ])
}

fn planned(artifact: &GeneratedArtifact, root: &Path) -> GeneratedFile {
    GeneratedFile {
        relative_path: artifact.relative_path.clone(),
        absolute_path: root.join(&artifact.relative_path),
        kind: artifact.kind,
        bytes: artifact.content.len(),
    }
}

/// Write artifacts under `root`, creating directories as needed.
///
/// Existing files are overwritten.
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if directory creation or a write fails.
pub fn write_artifacts(
    artifacts: &[GeneratedArtifact],
    root: &Path,
) -> Result<GeneratedFiles, ScaffoldError> {
    std::fs::create_dir_all(root)?;

    let mut files = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let file = planned(artifact, root);
        if let Some(parent) = file.absolute_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&file.absolute_path, &artifact.content)?;
        tracing::info!(
            path = %file.absolute_path.display(),
            kind = %file.kind,
            bytes = file.bytes,
            "wrote artifact"
        );
        files.push(file);
    }

    Ok(GeneratedFiles {
        root: root.to_path_buf(),
        files,
    })
}

/// Generate a project into `<dir>/<project.name>/`.
///
/// `dir` must already exist. With `dry_run` nothing is written and the
/// returned manifest lists the files that would have been.
///
/// # Errors
///
/// Returns [`ScaffoldError::DirectoryNotFound`] if `dir` does not exist,
/// or the errors of [`generate_artifacts`] and [`write_artifacts`].
pub fn generate_project(
    project: &ProjectDescriptor,
    config: &GeneratorConfig,
    dir: &Path,
    dry_run: bool,
) -> Result<GeneratedFiles, ScaffoldError> {
    if !dir.is_dir() {
        return Err(ScaffoldError::DirectoryNotFound(dir.to_path_buf()));
    }

    let root = dir.join(&project.name);
    let artifacts = generate_artifacts(project, config)?;

    if dry_run {
        tracing::info!(root = %root.display(), "dry run, nothing written");
        return Ok(GeneratedFiles {
            files: artifacts.iter().map(|a| planned(a, &root)).collect(),
            root,
        });
    }

    let written = write_artifacts(&artifacts, &root)?;
    tracing::info!(
        project = %project.name,
        root = %root.display(),
        files = written.files.len(),
        "generated chaincode project"
    );
    Ok(written)
}
