//! Service collection from schema files.
//!
//! Walks every input file, keeps the ones inside the configured root
//! namespace, resolves each method's HTTP binding, and produces the ordered
//! service list the rest of the pipeline consumes. The `(namespace, name)`
//! total order established here is the only determinism guarantee downstream
//! stages rely on — they must not re-sort with different comparators.

use std::fmt::Write as _;

use trellis_define::SchemaFile;

use crate::diagnostics::Diagnostic;
use crate::extract::{HttpBinding, extract_binding};

/// A collected service, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Service name, e.g. `"AccountsService"`.
    pub name: String,
    /// Full dot-delimited namespace, e.g. `"vendors.acme.investments"`.
    pub namespace: String,
    /// Methods sorted by name.
    pub methods: Vec<Method>,
}

/// A collected method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Method name, e.g. `"GetAccount"`.
    pub name: String,
    /// Request message type name.
    pub input_type: String,
    /// Response message type name.
    pub output_type: String,
    /// Resolved HTTP binding; `None` means the method has no HTTP surface
    /// and produces no call site.
    pub binding: Option<HttpBinding>,
}

/// Returns true if `namespace` equals `root` or is a strict descendant of it.
///
/// The check is segment-aware: `"vendors.acmex"` is NOT within
/// `"vendors.acme"`, even though it is a string prefix match.
pub fn namespace_within(namespace: &str, root: &str) -> bool {
    if namespace == root {
        return true;
    }
    namespace
        .strip_prefix(root)
        .is_some_and(|rest| rest.starts_with('.'))
}

/// Collects services under `root` from the given schema files.
///
/// Methods whose HTTP rule fails extraction are kept (without a binding) and
/// reported as warning diagnostics — a schema authoring mistake should be
/// visible, not silently dropped. Duplicate `(namespace, name)` service
/// records are deduplicated, first occurrence wins, with a warning.
pub fn collect_services(files: &[SchemaFile], root: &str) -> (Vec<Service>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    // Stabilize file order up front so diagnostics come out in a fixed order
    // regardless of how the caller assembled the input.
    let mut ordered: Vec<&SchemaFile> = files.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name));

    let mut services = Vec::new();
    for file in ordered {
        if !namespace_within(&file.namespace, root) {
            continue;
        }

        for svc in &file.services {
            let mut methods = Vec::new();
            for method in &svc.methods {
                let binding = match extract_binding(&svc.name, method) {
                    Ok(binding) => binding,
                    Err(err) => {
                        diagnostics.push(Diagnostic::warning(err.to_string()));
                        None
                    }
                };
                methods.push(Method {
                    name: method.name.clone(),
                    input_type: method.input_type.clone(),
                    output_type: method.output_type.clone(),
                    binding,
                });
            }
            methods.sort_by(|a, b| a.name.cmp(&b.name));

            services.push(Service {
                name: svc.name.clone(),
                namespace: file.namespace.clone(),
                methods,
            });
        }
    }

    services.sort_by(|a, b| (&a.namespace, &a.name).cmp(&(&b.namespace, &b.name)));

    let mut deduped: Vec<Service> = Vec::with_capacity(services.len());
    for svc in services {
        if deduped
            .last()
            .is_some_and(|prev| prev.namespace == svc.namespace && prev.name == svc.name)
        {
            diagnostics.push(Diagnostic::warning(format!(
                "duplicate service '{}' in namespace '{}'; keeping the first declaration",
                svc.name, svc.namespace
            )));
            continue;
        }
        deduped.push(svc);
    }

    (deduped, diagnostics)
}

/// Renders a human-readable summary of the collected services.
///
/// Used by the CLI at high verbosity to show what the generator is about to
/// work with.
pub fn describe_services(services: &[Service]) -> String {
    let mut out = String::new();
    for svc in services {
        let _ = writeln!(out, "{} ({})", svc.name, svc.namespace);
        for method in &svc.methods {
            match &method.binding {
                Some(binding) => {
                    let _ = writeln!(
                        out,
                        "  {}({}) -> {} [{} {}]",
                        method.name, method.input_type, method.output_type, binding.verb,
                        binding.path
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "  {}({}) -> {}",
                        method.name, method.input_type, method.output_type
                    );
                }
            }
        }
    }
    out
}
