//! Namespace grouping: top-level services vs nested categories.
//!
//! A service whose namespace equals the root exactly is top-level. Any other
//! collected service sits one or more segments deeper; the segment
//! immediately after the root names its category. Categories are
//! materialized as an explicitly sorted sequence — emission never iterates
//! an associative container directly.

use std::collections::BTreeMap;

use crate::collect::Service;
use crate::diagnostics::Diagnostic;

/// The partitioned service set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouped {
    /// Services directly in the root namespace, sorted by name.
    pub top_level: Vec<Service>,
    /// `(category, services)` pairs, categories sorted lexicographically,
    /// services within each category sorted by name.
    pub nested: Vec<(String, Vec<Service>)>,
}

/// Partitions collected services by namespace depth relative to `root`.
///
/// A service whose namespace is neither the root nor deep enough to carry a
/// category segment should not survive collection; if one does, it is
/// dropped with a warning rather than aborting the run.
pub fn group_services(services: Vec<Service>, root: &str) -> (Grouped, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let root_depth = root.split('.').count();

    let mut top_level = Vec::new();
    let mut buckets: BTreeMap<String, Vec<Service>> = BTreeMap::new();

    for svc in services {
        if svc.namespace == root {
            top_level.push(svc);
            continue;
        }

        match svc.namespace.split('.').nth(root_depth) {
            Some(category) => {
                buckets.entry(category.to_string()).or_default().push(svc);
            }
            None => {
                diagnostics.push(Diagnostic::warning(format!(
                    "service '{}' in namespace '{}' has no category segment under root '{}'; dropped",
                    svc.name, svc.namespace, root
                )));
            }
        }
    }

    top_level.sort_by(|a, b| a.name.cmp(&b.name));

    let nested = buckets
        .into_iter()
        .map(|(category, mut services)| {
            services.sort_by(|a, b| a.name.cmp(&b.name));
            (category, services)
        })
        .collect();

    (
        Grouped { top_level, nested },
        diagnostics,
    )
}
