//! Client generation configuration.
//!
//! The invocation is configured by a spec string of the form
//! `"<rootNamespace>:<outputSubdir>"`, e.g. `"vendors.acme:client"`,
//! optionally paired with a module-root override. Everything else — root
//! client name, runtime package import path — is derived here once; the
//! resulting [`ClientConfig`] is immutable and shared read-only by all
//! pipeline stages.

use crate::errors::GeneratorError;
use crate::paths::snake_to_pascal;

/// Import path base assumed when no module root is supplied.
pub const DEFAULT_MODULE_ROOT: &str = "example.com/schema/go";

/// Resolved generation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Namespace prefix selecting which services to generate for,
    /// e.g. `"vendors.acme"`.
    pub root_namespace: String,

    /// Subdirectory all generated files are placed under, e.g. `"client"`.
    pub output_subdir: String,

    /// Root client name derived from the last namespace segment,
    /// e.g. `"AcmeClient"`.
    pub client_name: String,

    /// Import path base for generated packages.
    pub module_root: String,

    /// Import path of the runtime transport package,
    /// `<module_root>/<output_subdir>/http`.
    pub runtime_pkg: String,
}

impl ClientConfig {
    /// Parses a `"<namespace>:<subdir>"` spec string.
    ///
    /// `module_root` overrides [`DEFAULT_MODULE_ROOT`] when given.
    ///
    /// ## Examples
    ///
    /// ```
    /// use trellis_gen::config::ClientConfig;
    ///
    /// let cfg = ClientConfig::parse("vendors.acme:client", None).unwrap();
    /// assert_eq!(cfg.client_name, "AcmeClient");
    /// assert_eq!(cfg.runtime_pkg, "example.com/schema/go/client/http");
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::InvalidClientSpec`] when the separator is
    /// missing or either side is empty.
    pub fn parse(spec: &str, module_root: Option<&str>) -> Result<Self, GeneratorError> {
        let Some((namespace, subdir)) = spec.split_once(':') else {
            return Err(GeneratorError::InvalidClientSpec {
                spec: spec.to_string(),
                reason: "expected '<namespace>:<subdir>'".to_string(),
            });
        };

        let root_namespace = namespace.trim().to_string();
        let output_subdir = subdir.trim().to_string();

        if root_namespace.is_empty() {
            return Err(GeneratorError::InvalidClientSpec {
                spec: spec.to_string(),
                reason: "namespace is empty".to_string(),
            });
        }
        if output_subdir.is_empty() {
            return Err(GeneratorError::InvalidClientSpec {
                spec: spec.to_string(),
                reason: "output subdirectory is empty".to_string(),
            });
        }

        // "vendors.acme" derives "AcmeClient".
        let last_segment = root_namespace.rsplit('.').next().unwrap_or(&root_namespace);
        let client_name = format!("{}Client", snake_to_pascal(last_segment));

        let module_root = module_root.unwrap_or(DEFAULT_MODULE_ROOT).to_string();
        let runtime_pkg = format!("{module_root}/{output_subdir}/http");

        Ok(Self {
            root_namespace,
            output_subdir,
            client_name,
            module_root,
            runtime_pkg,
        })
    }

    /// Go package name for generated files: the last path segment of the
    /// output subdirectory.
    pub fn package_name(&self) -> &str {
        self.output_subdir
            .rsplit('/')
            .next()
            .unwrap_or(&self.output_subdir)
    }

    /// Import path of the message package for a given import suffix
    /// (`""` for top-level services, `"/investments"` for a nested category).
    pub fn message_pkg(&self, import_suffix: &str) -> String {
        format!(
            "{}/{}{}",
            self.module_root,
            self.root_namespace.replace('.', "/"),
            import_suffix
        )
    }
}
