//! HTTP binding extraction from method annotations.
//!
//! A raw [`HttpRule`] is a bundle of optional per-verb path templates. This
//! module resolves a rule to a single [`HttpBinding`] by checking verbs in a
//! fixed priority order, or reports that the rule sets no recognized verb.
//! A method with no rule at all is not an error — most methods are internal
//! and simply have no HTTP surface.

use strum::Display;
use trellis_define::MethodDef;

use crate::errors::GeneratorError;
use crate::paths::extract_path_params;

/// HTTP verbs the binding extractor recognizes.
///
/// The transport helper only dispatches GET and POST; the remaining verbs are
/// accepted here and rejected at emission time, so a schema authoring mistake
/// is reported against the file it would affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpVerb {
    /// Returns true if the transport helper can dispatch this verb.
    pub fn is_emittable(self) -> bool {
        matches!(self, HttpVerb::Get | HttpVerb::Post)
    }
}

/// A resolved HTTP binding: one verb, one path template, and the template's
/// parameters in left-to-right order (duplicates preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBinding {
    /// The selected verb.
    pub verb: HttpVerb,
    /// The path template, verbatim — no slash normalization.
    pub path: String,
    /// Parameter names as they occur in the template.
    pub path_params: Vec<String>,
}

/// Resolves a method's HTTP rule into a binding.
///
/// Returns `Ok(None)` when the method carries no rule. When a rule is
/// present, verbs are checked in the fixed order GET, POST, PUT, DELETE,
/// PATCH and the first set field wins.
///
/// ## Errors
///
/// Returns [`GeneratorError::UnsupportedBindingPattern`] when a rule is
/// present but sets none of the recognized verb fields.
pub fn extract_binding(
    service: &str,
    method: &MethodDef,
) -> Result<Option<HttpBinding>, GeneratorError> {
    let Some(rule) = &method.http else {
        return Ok(None);
    };

    let candidates = [
        (HttpVerb::Get, &rule.get),
        (HttpVerb::Post, &rule.post),
        (HttpVerb::Put, &rule.put),
        (HttpVerb::Delete, &rule.delete),
        (HttpVerb::Patch, &rule.patch),
    ];

    for (verb, template) in candidates {
        if let Some(path) = template {
            let path_params = extract_path_params(path)
                .into_iter()
                .map(str::to_string)
                .collect();
            return Ok(Some(HttpBinding {
                verb,
                path: path.clone(),
                path_params,
            }));
        }
    }

    Err(GeneratorError::UnsupportedBindingPattern {
        service: service.to_string(),
        method: method.name.clone(),
    })
}
