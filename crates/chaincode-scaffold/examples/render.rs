//! Render the contract class for an operations file without touching disk.
//!
//! Demonstrates: parse -> validate -> assemble for one batch file.
//!
//! Usage:
//!   cargo run --example render -- ops.yaml assettracker

use std::path::PathBuf;
use std::process;

use chaincode_scaffold::assemble::assemble;
use chaincode_scaffold::config::GeneratorConfig;
use chaincode_scaffold::error::Severity;
use chaincode_scaffold::schema::{parse_operations, validate_project, ProjectDescriptor};

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().map_or_else(
        || {
            eprintln!("Usage: render <operations.yaml> [name]");
            process::exit(1);
        },
        PathBuf::from,
    );
    let name = args.next().unwrap_or_else(|| "mychaincode".to_string());

    let operations = parse_operations(&path).unwrap_or_else(|e| {
        eprintln!("Cannot parse {}: {e}", path.display());
        process::exit(1);
    });

    let project = ProjectDescriptor::new(name, operations);
    let violations = validate_project(&project);
    for v in &violations {
        eprintln!("{v}");
    }
    if violations.iter().any(|v| v.severity == Severity::Error) {
        process::exit(1);
    }

    print!("{}", assemble(&project, &GeneratorConfig::default()));
}
