//! Trellis Client Generator
//!
//! Generates a hierarchical Go HTTP client library from a service schema
//! dump produced by a schema reflection tool.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use trellis_define::SchemaFile;
use trellis_gen::collect::{collect_services, describe_services};
use trellis_gen::config::ClientConfig;
use trellis_gen::diagnostics::Severity;
use trellis_gen::errors::GeneratorError;
use trellis_gen::output::generate_and_write;

/// Trellis client generator - transforms service schemas into hierarchical Go clients
#[derive(Parser, Debug)]
#[command(name = "trellis-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Schema dump to read (a JSON array of schema files)
    #[arg(short, long)]
    schema: String,

    /// Client spec: "<rootNamespace>:<outputSubdir>" (e.g. "vendors.acme:client")
    #[arg(short, long)]
    client: String,

    /// Import path base for generated packages
    #[arg(long)]
    module_root: Option<String>,

    /// Output directory the client subdirectory is created under
    #[arg(short, long, default_value = "gen/go")]
    output: String,

    /// Print generated files without writing them
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, GeneratorError> {
    let cfg = ClientConfig::parse(&cli.client, cli.module_root.as_deref())?;

    if cli.verbose > 0 {
        eprintln!("Generating client for namespace: {}", cfg.root_namespace);
        eprintln!("Output subdirectory: {}", cfg.output_subdir);
        if cli.dry_run {
            eprintln!("Dry run mode - no files will be written");
        }
    }

    let schema = load_schema(&cli.schema)?;

    if cli.verbose > 1 {
        let (services, _) = collect_services(&schema, &cfg.root_namespace);
        eprintln!(
            "Found {} service(s):\n{}",
            services.len(),
            describe_services(&services)
        );
    }

    let output_dir = Path::new(&cli.output);
    let generation = generate_and_write(&schema, &cfg, output_dir, cli.dry_run)?;

    for diagnostic in &generation.diagnostics {
        match diagnostic.severity {
            Severity::Warning => {
                eprintln!("{} {}", "warning:".yellow().bold(), diagnostic.message);
            }
            Severity::Error => {
                eprintln!("{} {}", "error:".red().bold(), diagnostic.message);
            }
        }
    }

    if generation.has_errors() {
        return Err(GeneratorError::GenerationFailed {
            errors: generation
                .diagnostics
                .iter()
                .filter(|d| d.is_error())
                .count(),
        });
    }

    if !cli.dry_run && cli.verbose > 0 {
        eprintln!(
            "Generated {} file(s) under {}",
            generation.files.len(),
            cli.output
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn load_schema(path: &str) -> Result<Vec<SchemaFile>, GeneratorError> {
    let raw = fs::read_to_string(path).map_err(|e| GeneratorError::SchemaLoad {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| GeneratorError::SchemaLoad {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
