//! Integration tests for the full descriptor → artifacts pipeline.

mod common;

use chaincode_scaffold::config::{parse_config_str, GeneratorConfig};
use chaincode_scaffold::generate::{generate_artifacts, generate_project, ArtifactKind};
use chaincode_scaffold::schema::{parse_operations_str, ProjectDescriptor};
use chaincode_scaffold::skeleton::PackageManifest;

use common::{assert_in_order, content, declared_methods, project};

// ================================================================
// assettracker scenario
// ================================================================

fn assettracker() -> ProjectDescriptor {
    project(
        "assettracker",
        &[("getAsset", "query"), ("createAsset", "create")],
    )
}

#[test]
fn assettracker_contract_class() {
    let artifacts = generate_artifacts(&assettracker(), &GeneratorConfig::default()).unwrap();
    let chaincode = content(&artifacts, ArtifactKind::Chaincode);
    assert!(chaincode.contains("class Assettracker extends Contract {"));
    assert_eq!(
        declared_methods(chaincode),
        ["initLedger", "getAsset", "createAsset"]
    );
    assert!(chaincode.ends_with("export default Assettracker;\n"));
}

#[test]
fn assettracker_entry_exports_one_contract() {
    let artifacts = generate_artifacts(&assettracker(), &GeneratorConfig::default()).unwrap();
    let entry = content(&artifacts, ArtifactKind::EntryModule);
    assert!(entry.contains("export const assettrackerContract = Assettracker;"));
    assert!(entry.contains("export const contracts = [Assettracker];"));
}

#[test]
fn assettracker_readme_lists_two_operations() {
    let artifacts = generate_artifacts(&assettracker(), &GeneratorConfig::default()).unwrap();
    let readme = content(&artifacts, ArtifactKind::Readme);
    let listing: Vec<&str> = readme.lines().filter(|l| l.starts_with("- ")).collect();
    assert_eq!(listing, ["- getAsset: Query", "- createAsset: Create"]);
}

#[test]
fn assettracker_manifest() {
    let artifacts = generate_artifacts(&assettracker(), &GeneratorConfig::default()).unwrap();
    let manifest: PackageManifest =
        serde_json::from_str(content(&artifacts, ArtifactKind::Manifest)).unwrap();
    assert_eq!(manifest.name, "Assettracker");
    assert_eq!(manifest.main, "index.js");
    assert_eq!(manifest.author, "ameers");
    assert_eq!(manifest.dependencies["fabric-contract-api"], "^2.5.2");
    assert_eq!(manifest.dependencies["fabric-shim"], "^2.5.2");
    assert_eq!(manifest.dev_dependencies["esdoc"], "^1.1.0");
    assert_eq!(manifest.dev_dependencies["esdoc-standard-plugin"], "^1.0.0");
}

// ================================================================
// boundaries and fallbacks
// ================================================================

#[test]
fn empty_operations_still_produces_every_artifact() {
    let artifacts =
        generate_artifacts(&project("bare", &[]), &GeneratorConfig::default()).unwrap();
    assert_eq!(artifacts.len(), 4);
    let chaincode = content(&artifacts, ArtifactKind::Chaincode);
    assert_eq!(declared_methods(chaincode), ["initLedger"]);
    let readme = content(&artifacts, ArtifactKind::Readme);
    assert!(readme.starts_with("# bare Chaincode"));
    assert!(!readme.lines().any(|l| l.starts_with("- ")));
}

#[test]
fn unrecognized_kind_becomes_stub() {
    let artifacts = generate_artifacts(
        &project("desk", &[("settle", "settleTrade")]),
        &GeneratorConfig::default(),
    )
    .unwrap();
    let chaincode = content(&artifacts, ArtifactKind::Chaincode);
    assert!(chaincode.contains("async settle(ctx, ...args) {"));
    assert!(chaincode.contains("console.log('settle called with args:', args);"));
    assert!(!chaincode.contains("ctx.stub."));
}

#[test]
fn every_kind_in_one_project() {
    let p = project(
        "ledger",
        &[
            ("read", "query"),
            ("write", "create"),
            ("writeOwned", "createComposite"),
            ("readOwned", "queryComposite"),
            ("scan", "queryAllTX"),
            ("trail", "History"),
            ("custom", "custom"),
        ],
    );
    let artifacts = generate_artifacts(&p, &GeneratorConfig::default()).unwrap();
    let chaincode = content(&artifacts, ArtifactKind::Chaincode);
    assert_eq!(
        declared_methods(chaincode),
        [
            "initLedger",
            "read",
            "write",
            "writeOwned",
            "readOwned",
            "scan",
            "trail",
            "custom"
        ]
    );
    assert_in_order(
        chaincode,
        &[
            "ctx.stub.getState(key)".to_string(),
            "ctx.stub.putState(key".to_string(),
            "ctx.stub.createCompositeKey('compositeIndex', [inputArgs.key])".to_string(),
            "ctx.stub.createCompositeKey('compositeIndex', [key])".to_string(),
            "ctx.stub.getStateByRange('', '')".to_string(),
            "ctx.stub.getHistoryForKey(key)".to_string(),
        ],
    );
}

#[test]
fn batch_file_drives_pipeline() {
    let ops = parse_operations_str(
        r#"
operations:
  - name: getAsset
    kind: query
  - name: createAsset
    kind: create
"#,
    )
    .unwrap();
    let from_file = ProjectDescriptor::new("assettracker", ops);
    let config = GeneratorConfig::default();
    assert_eq!(
        generate_artifacts(&from_file, &config).unwrap(),
        generate_artifacts(&assettracker(), &config).unwrap()
    );
}

#[test]
fn config_file_reaches_artifacts() {
    let config = parse_config_str(
        r#"
composite_index: byOwner
manifest:
  author: "ledger-team"
"#,
    )
    .unwrap();
    let artifacts =
        generate_artifacts(&project("p", &[("put", "createComposite")]), &config).unwrap();
    assert!(content(&artifacts, ArtifactKind::Chaincode).contains("createCompositeKey('byOwner'"));
    assert!(content(&artifacts, ArtifactKind::Manifest).contains("\"author\": \"ledger-team\""));
}

// ================================================================
// writing to disk
// ================================================================

#[test]
fn written_project_matches_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::default();
    let result = generate_project(&assettracker(), &config, dir.path(), false).unwrap();
    let artifacts = generate_artifacts(&assettracker(), &config).unwrap();
    for artifact in &artifacts {
        let on_disk =
            std::fs::read_to_string(result.root.join(&artifact.relative_path)).unwrap();
        assert_eq!(on_disk, artifact.content);
    }
}

#[test]
fn two_runs_write_identical_bytes() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::default();
    let ra = generate_project(&assettracker(), &config, a.path(), false).unwrap();
    let rb = generate_project(&assettracker(), &config, b.path(), false).unwrap();
    for (fa, fb) in ra.files.iter().zip(&rb.files) {
        assert_eq!(fa.relative_path, fb.relative_path);
        assert_eq!(
            std::fs::read(&fa.absolute_path).unwrap(),
            std::fs::read(&fb.absolute_path).unwrap()
        );
    }
}
