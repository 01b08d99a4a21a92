use std::io::{self, BufRead, Write};
use std::path::Path;

use chaincode_scaffold::collect::collect_operations;
use chaincode_scaffold::config::{parse_config, GeneratorConfig};
use chaincode_scaffold::error::{ScaffoldError, Severity, Violation};
use chaincode_scaffold::generate::generate_project;
use chaincode_scaffold::schema::{parse_operations, validate_project, ProjectDescriptor};
use colored::Colorize;

/// Where the operation list comes from.
pub enum OperationSource<'a> {
    File(&'a Path),
    Interactive,
}

pub struct GenerateOptions<'a> {
    pub name: &'a str,
    pub dir: &'a Path,
    pub operations: OperationSource<'a>,
    pub config: Option<&'a Path>,
    pub dry_run: bool,
}

pub fn run(opts: &GenerateOptions<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_with(opts, &mut input, &mut output)
}

/// [`run`] with explicit streams for the interactive collector and report.
pub fn run_with<R: BufRead, W: Write>(
    opts: &GenerateOptions<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match opts.config {
        Some(path) => parse_config(path)?,
        None => GeneratorConfig::default(),
    };

    let operations = match opts.operations {
        OperationSource::File(path) => {
            tracing::debug!(path = %path.display(), "reading operations file");
            parse_operations(path)?
        }
        OperationSource::Interactive => collect_operations(input, output)?,
    };
    tracing::debug!(count = operations.len(), "operations ready");

    let project = ProjectDescriptor::new(opts.name, operations);
    let violations = validate_project(&project);
    for v in &violations {
        writeln!(output, "{}", paint(v))?;
    }
    let errors = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .count();
    if errors > 0 {
        tracing::warn!(errors, "validation failed, nothing generated");
        return Err(ScaffoldError::Invalid(errors).into());
    }

    let result = generate_project(&project, &config, opts.dir, opts.dry_run)?;

    let verb = if opts.dry_run {
        "Would generate"
    } else {
        "Generated"
    };
    let summary = format!(
        "{verb} {} files in {}:",
        result.files.len(),
        result.root.display()
    );
    writeln!(output, "{}", summary.bold())?;
    for f in &result.files {
        writeln!(
            output,
            "  {} ({}, {} bytes)",
            f.relative_path.display(),
            f.kind,
            f.bytes
        )?;
    }
    if !opts.dry_run {
        let done = format!(
            "Chaincode '{}' structure created successfully at '{}'",
            opts.name,
            result.root.display()
        );
        writeln!(output, "{}", done.green())?;
    }

    Ok(())
}

/// Colour a violation line by severity. Colours drop out when stdout is
/// not a terminal or `NO_COLOR` is set.
fn paint(v: &Violation) -> colored::ColoredString {
    let line = v.to_string();
    match v.severity {
        Severity::Error => line.red(),
        Severity::Warning => line.yellow(),
        Severity::Info => line.normal(),
    }
}
