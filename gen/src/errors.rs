//! Error types for the trellis generator.

use thiserror::Error;

use crate::extract::HttpVerb;

/// Errors that can occur during client generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The `"<namespace>:<subdir>"` invocation spec is malformed.
    #[error("invalid client spec '{spec}': {reason}")]
    InvalidClientSpec {
        /// The offending spec string.
        spec: String,
        /// Explanation of what is wrong with it.
        reason: String,
    },

    /// A method declares an HTTP rule, but none of its verb fields is set.
    #[error(
        "method '{service}.{method}' has an HTTP rule with no recognized verb \
         (expected one of GET, POST, PUT, DELETE, PATCH)"
    )]
    UnsupportedBindingPattern {
        /// Service the method belongs to.
        service: String,
        /// The offending method.
        method: String,
    },

    /// A verb the extractor accepts but the transport helper cannot dispatch.
    ///
    /// PUT, DELETE, and PATCH bindings are recognized during collection, but
    /// the generated call sites only wire GET and POST. Rendering such a
    /// method fails its file rather than silently downgrading the verb.
    #[error(
        "cannot emit {verb} call for '{service}.{method}': \
         the transport helper only supports GET and POST"
    )]
    UnsupportedEmissionVerb {
        /// The unsupported verb.
        verb: HttpVerb,
        /// Service the method belongs to.
        service: String,
        /// The offending method.
        method: String,
    },

    /// Two sibling services reduce to the same private accessor field.
    ///
    /// Without this check one accessor would silently shadow the other in the
    /// generated client. Suggestion: rename one of the services.
    #[error(
        "accessor collision in {scope}: '{first}' and '{second}' both reduce to \
         private field '{field}'; rename one of them"
    )]
    AccessorCollision {
        /// Where the collision occurs, e.g. "root client" or "category 'investments'".
        scope: String,
        /// The shared private field name.
        field: String,
        /// First colliding base name.
        first: String,
        /// Second colliding base name.
        second: String,
    },

    /// The schema input file could not be read or parsed.
    #[error("failed to load schema '{path}': {reason}")]
    SchemaLoad {
        /// Path of the schema input file.
        path: String,
        /// Underlying read or parse failure.
        reason: String,
    },

    /// Failed to write an output file.
    #[error("failed to write '{path}': {source}")]
    WriteError {
        /// Target path of the failed write.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The run produced error diagnostics.
    ///
    /// Individual file failures do not stop the remaining files from being
    /// generated, but the invocation as a whole must not look successful.
    #[error("generation completed with {errors} error(s)")]
    GenerationFailed {
        /// Number of error diagnostics produced.
        errors: usize,
    },
}
