//! Pipeline orchestration, output assembly, and file writing.
//!
//! [`generate_client`] runs the full pipeline — collect, group, build the
//! tree, emit — and returns a [`Generation`]: the ordered file set plus
//! every diagnostic produced along the way. A file that fails to render is
//! recorded as an error diagnostic while the remaining files still emit;
//! callers must treat a generation with error diagnostics as a failed run.
//!
//! File writes go through a temp-file-plus-rename so an interrupted run
//! never leaves a half-written artifact behind.

use std::fs;
use std::path::Path;

use trellis_define::SchemaFile;

use crate::codegen::{
    nested_file, root_client_file, runtime_file_path, runtime_source, service_file,
    service_file_stem,
};
use crate::collect::collect_services;
use crate::config::ClientConfig;
use crate::diagnostics::Diagnostic;
use crate::errors::GeneratorError;
use crate::group::group_services;
use crate::tree::build_tree;

/// One generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output path relative to the output directory, slash-separated,
    /// e.g. `"client/accounts.gen.go"`.
    pub path: String,
    /// File content.
    pub content: String,
}

/// The result of one generator invocation.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Generated files in emission order: runtime, top-level services,
    /// nested categories, root client.
    pub files: Vec<GeneratedFile>,
    /// Everything worth reporting, in the order it was produced.
    pub diagnostics: Vec<Diagnostic>,
}

impl Generation {
    /// Returns true if any diagnostic is an error — the invocation must then
    /// be reported as failed even though other files were generated.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Runs the full generation pipeline.
///
/// ## Errors
///
/// Returns an error for conditions that invalidate the whole run — an
/// accessor collision between sibling services. Per-file failures (an
/// unsupported verb reaching the emitter) are instead reported as error
/// diagnostics on the returned [`Generation`].
pub fn generate_client(
    files: &[SchemaFile],
    cfg: &ClientConfig,
) -> Result<Generation, GeneratorError> {
    let (services, mut diagnostics) = collect_services(files, &cfg.root_namespace);
    let (grouped, group_diagnostics) = group_services(services, &cfg.root_namespace);
    diagnostics.extend(group_diagnostics);

    let tree = build_tree(&grouped, cfg)?;

    let mut out = Vec::with_capacity(tree.top_level.len() + tree.categories.len() + 2);

    out.push(GeneratedFile {
        path: runtime_file_path(cfg),
        content: runtime_source().to_string(),
    });

    for svc in &tree.top_level {
        let path = format!(
            "{}/{}.gen.go",
            cfg.output_subdir,
            service_file_stem(&svc.service_name)
        );
        match service_file(svc, cfg) {
            Ok(file) => out.push(GeneratedFile {
                path,
                content: file.render(),
            }),
            Err(err) => diagnostics.push(Diagnostic::error(format!("{path}: {err}"))),
        }
    }

    for category in &tree.categories {
        let path = format!(
            "{}/{}.gen.go",
            cfg.output_subdir,
            category.category.to_lowercase()
        );
        match nested_file(category, cfg) {
            Ok(file) => out.push(GeneratedFile {
                path,
                content: file.render(),
            }),
            Err(err) => diagnostics.push(Diagnostic::error(format!("{path}: {err}"))),
        }
    }

    out.push(GeneratedFile {
        path: format!("{}/client.gen.go", cfg.output_subdir),
        content: root_client_file(&tree, cfg).render(),
    });

    Ok(Generation {
        files: out,
        diagnostics,
    })
}

/// Writes content to a file atomically via temp file + rename.
///
/// ## Errors
///
/// Returns [`GeneratorError::WriteError`] if directories cannot be created,
/// the temp file cannot be written, or the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates the client and writes every file under `output_dir`.
///
/// With `dry_run` set, files are printed to stdout instead of written.
/// Returns the generation either way so the caller can inspect diagnostics.
///
/// ## Errors
///
/// Returns pipeline errors from [`generate_client`] and write failures from
/// [`write_atomic`].
pub fn generate_and_write(
    files: &[SchemaFile],
    cfg: &ClientConfig,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Generation, GeneratorError> {
    let generation = generate_client(files, cfg)?;

    if dry_run {
        for file in &generation.files {
            println!("=== {} ===\n{}", file.path, file.content);
        }
    } else {
        for file in &generation.files {
            write_atomic(&output_dir.join(&file.path), &file.content)?;
        }
    }

    Ok(generation)
}
