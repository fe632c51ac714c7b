//! Schema file, service, and method descriptions.
//!
//! These types mirror the structure a schema reflection pass recovers from
//! compiled descriptors: files own services, services own methods, and a
//! method optionally carries an [`HttpRule`] annotation. Namespaces are
//! dot-delimited (`vendors.acme.investments`).

use serde::{Deserialize, Serialize};

use crate::rule::HttpRule;

/// One schema source file and the services it declares.
///
/// ## Examples
///
/// ```
/// use trellis_define::{SchemaFile, ServiceDef};
///
/// let file = SchemaFile::new("auth.proto", "vendors.acme")
///     .with_service(ServiceDef::new("AuthService"));
///
/// assert_eq!(file.name, "auth.proto");
/// assert_eq!(file.services.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Source file name, e.g. `"accounts.proto"`.
    pub name: String,

    /// Dot-delimited namespace the file's services live in,
    /// e.g. `"vendors.acme"` or `"vendors.acme.investments"`.
    pub namespace: String,

    /// Services declared in this file.
    #[serde(default)]
    pub services: Vec<ServiceDef>,
}

impl SchemaFile {
    /// Creates an empty schema file description.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            services: Vec::new(),
        }
    }

    /// Appends a service declaration.
    pub fn with_service(mut self, service: ServiceDef) -> Self {
        self.services.push(service);
        self
    }
}

/// A named group of RPC methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDef {
    /// Service name, e.g. `"AccountsService"`.
    pub name: String,

    /// Methods declared on the service, in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

impl ServiceDef {
    /// Creates a service with no methods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Appends a method declaration.
    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }
}

/// A single RPC method.
///
/// A method without an [`HttpRule`] is perfectly valid — most schemas mix
/// HTTP-bound and internal-only methods — and is simply skipped by the
/// client generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    /// Method name, e.g. `"GetAccount"`.
    pub name: String,

    /// Request message type name, e.g. `"GetAccountRequest"`.
    pub input_type: String,

    /// Response message type name, e.g. `"GetAccountResponse"`.
    pub output_type: String,

    /// HTTP binding annotation, if the method has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpRule>,
}

impl MethodDef {
    /// Creates a method with no HTTP binding.
    pub fn new(
        name: impl Into<String>,
        input_type: impl Into<String>,
        output_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            output_type: output_type.into(),
            http: None,
        }
    }

    /// Attaches an HTTP binding annotation.
    pub fn with_rule(mut self, rule: HttpRule) -> Self {
        self.http = Some(rule);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> SchemaFile {
        SchemaFile::new("accounts.proto", "vendors.acme").with_service(
            ServiceDef::new("AccountsService")
                .with_method(
                    MethodDef::new("GetAccount", "GetAccountRequest", "GetAccountResponse")
                        .with_rule(HttpRule::get("/v1/accounts/{id}")),
                )
                .with_method(MethodDef::new(
                    "ReconcileLedger",
                    "ReconcileLedgerRequest",
                    "ReconcileLedgerResponse",
                )),
        )
    }

    #[test]
    fn builders_preserve_declaration_order() {
        let file = sample_file();
        let methods = &file.services[0].methods;
        assert_eq!(methods[0].name, "GetAccount");
        assert_eq!(methods[1].name, "ReconcileLedger");
        assert!(methods[1].http.is_none());
    }

    #[test]
    fn serde_round_trip() {
        let file = sample_file();
        let json = serde_json::to_string(&file).unwrap();
        let parsed: SchemaFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, file);
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let parsed: SchemaFile =
            serde_json::from_str(r#"{"name": "empty.proto", "namespace": "vendors.acme"}"#)
                .unwrap();
        assert!(parsed.services.is_empty());

        let method: MethodDef = serde_json::from_str(
            r#"{"name": "Ping", "input_type": "PingRequest", "output_type": "PingResponse"}"#,
        )
        .unwrap();
        assert!(method.http.is_none());
    }
}
