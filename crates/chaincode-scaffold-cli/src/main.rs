use std::path::PathBuf;
use std::process;

use chaincode_scaffold::schema::validate_project_name;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

use commands::generate::{GenerateOptions, OperationSource};

/// Command-line arguments for `ccgen`
#[derive(Parser)]
#[command(
    name = "ccgen",
    about = "Scaffold a Fabric chaincode project from a list of operations",
    version
)]
struct Cli {
    /// Chaincode name (letters, numbers, underscores, and dashes)
    #[arg(long, value_parser = parse_name)]
    name: String,
    /// Existing directory to create the project in
    #[arg(long, value_parser = parse_dir)]
    dir: PathBuf,
    /// Read operations from a YAML or JSON file instead of prompting
    #[arg(long)]
    operations: Option<PathBuf>,
    /// Generator config YAML (manifest fields, composite index name)
    #[arg(long)]
    config: Option<PathBuf>,
    /// List the files that would be generated without writing them
    #[arg(long)]
    dry_run: bool,
    /// Log generation steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_name(s: &str) -> Result<String, String> {
    validate_project_name(s)
        .map(|()| s.to_string())
        .map_err(|e| e.to_string())
}

fn parse_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("The directory {s} does not exist"))
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run generation for parsed arguments
fn run_command(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let operations = match cli.operations.as_deref() {
        Some(path) => OperationSource::File(path),
        None => OperationSource::Interactive,
    };
    commands::generate::run(&GenerateOptions {
        name: &cli.name,
        dir: &cli.dir,
        operations,
        config: cli.config.as_deref(),
        dry_run: cli.dry_run,
    })
}

/// Entry point: parse CLI arguments and generate the project
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run_command(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
