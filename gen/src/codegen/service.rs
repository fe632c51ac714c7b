//! Top-level service file generation.
//!
//! Each top-level service becomes one file declaring the service interface,
//! its implementation struct, and one method per HTTP-bound call site. The
//! implementation holds the shared transport handle; parameterized paths are
//! built with `fmt.Sprintf` from the method's interpolation plan.

use crate::config::ClientConfig;
use crate::errors::GeneratorError;
use crate::extract::HttpVerb;
use crate::gocode::{
    GoComposite, GoDecl, GoExpr, GoFile, GoFunc, GoImport, GoInterface, GoParam, GoSignature,
    GoStmt, GoStruct,
};
use crate::tree::{MethodNode, ServiceNode};

/// File stem for a top-level service: the service name minus a trailing
/// `"Service"`, lowercased. `"AccountsService"` becomes `"accounts"`.
pub fn service_file_stem(service_name: &str) -> String {
    service_name
        .strip_suffix("Service")
        .unwrap_or(service_name)
        .to_lowercase()
}

/// Builds the file for one top-level service.
///
/// ## Errors
///
/// Returns [`GeneratorError::UnsupportedEmissionVerb`] if any bound method
/// uses a verb the transport helper cannot dispatch.
pub fn service_file(svc: &ServiceNode, cfg: &ClientConfig) -> Result<GoFile, GeneratorError> {
    let decls = service_decls(svc)?;

    let mut std_imports = vec![GoImport::plain("context")];
    if needs_fmt(std::slice::from_ref(svc)) {
        std_imports.push(GoImport::plain("fmt"));
    }

    Ok(GoFile {
        package: cfg.package_name().to_string(),
        std_imports,
        imports: vec![
            GoImport::plain(cfg.runtime_pkg.clone()),
            GoImport::aliased("pb", cfg.message_pkg("")),
        ],
        decls,
    })
}

/// Returns true if any method of any given service interpolates parameters
/// (and therefore needs the `fmt` import).
pub fn needs_fmt(services: &[ServiceNode]) -> bool {
    services
        .iter()
        .any(|svc| svc.methods.iter().any(|m| m.plan.is_some()))
}

/// Builds the interface, implementation struct, and method declarations for
/// one service. Shared with the nested-category builder.
pub fn service_decls(svc: &ServiceNode) -> Result<Vec<GoDecl>, GeneratorError> {
    let mut decls = Vec::with_capacity(svc.methods.len() + 2);

    decls.push(GoDecl::Interface(GoInterface {
        doc: vec![format!(
            "{} defines the interface for {}",
            svc.naming.interface, svc.service_name
        )],
        name: svc.naming.interface.clone(),
        methods: svc.methods.iter().map(method_signature).collect(),
    }));

    decls.push(GoDecl::Struct(GoStruct {
        doc: vec![format!(
            "{} provides {} operations",
            svc.naming.implementation, svc.service_name
        )],
        name: svc.naming.implementation.clone(),
        embeds: vec![svc.naming.interface.clone()],
        fields: vec![GoParam::new("client", "*http.HTTPClient")],
    }));

    for method in &svc.methods {
        decls.push(GoDecl::Func(method_func(svc, method)?));
    }

    Ok(decls)
}

fn method_doc(method: &MethodNode) -> String {
    format!(
        "{} makes a {} request to {}",
        method.name, method.verb, method.path
    )
}

fn method_signature(method: &MethodNode) -> GoSignature {
    GoSignature {
        doc: Some(method_doc(method)),
        name: method.name.clone(),
        params: vec![
            GoParam::new("ctx", "context.Context"),
            GoParam::new("req", format!("*pb.{}", method.input_type)),
        ],
        results: vec![format!("*pb.{}", method.output_type), "error".to_string()],
    }
}

fn method_func(svc: &ServiceNode, method: &MethodNode) -> Result<GoFunc, GeneratorError> {
    let dispatch = match method.verb {
        HttpVerb::Get => GoExpr::Call {
            callee: "s.client.Get".to_string(),
            args: vec![
                GoExpr::Ident("ctx".to_string()),
                GoExpr::Ident("path".to_string()),
                GoExpr::Ident("resp".to_string()),
            ],
        },
        HttpVerb::Post => GoExpr::Call {
            callee: "s.client.Post".to_string(),
            args: vec![
                GoExpr::Ident("ctx".to_string()),
                GoExpr::Ident("path".to_string()),
                GoExpr::Ident("req".to_string()),
                GoExpr::Ident("resp".to_string()),
            ],
        },
        verb => {
            return Err(GeneratorError::UnsupportedEmissionVerb {
                verb,
                service: svc.service_name.clone(),
                method: method.name.clone(),
            });
        }
    };

    let path_value = match &method.plan {
        Some(plan) => GoExpr::Sprintf {
            format: plan.format_string(),
            args: plan
                .targets
                .iter()
                .map(|target| GoExpr::Field {
                    recv: "req".to_string(),
                    name: target.clone(),
                })
                .collect(),
        },
        None => GoExpr::Str(method.path.clone()),
    };

    Ok(GoFunc {
        doc: vec![method_doc(method)],
        receiver: Some(GoParam::new(
            "s",
            format!("*{}", svc.naming.implementation),
        )),
        name: method.name.clone(),
        params: vec![
            GoParam::new("ctx", "context.Context"),
            GoParam::new("req", format!("*pb.{}", method.input_type)),
        ],
        results: vec![format!("*pb.{}", method.output_type), "error".to_string()],
        body: vec![
            GoStmt::Define {
                name: "resp".to_string(),
                value: GoExpr::Composite(GoComposite {
                    ty: format!("pb.{}", method.output_type),
                    addr: true,
                    multiline: false,
                    fields: vec![],
                }),
            },
            GoStmt::Define {
                name: "path".to_string(),
                value: path_value,
            },
            GoStmt::Define {
                name: "err".to_string(),
                value: dispatch,
            },
            GoStmt::Return(vec![
                GoExpr::Ident("resp".to_string()),
                GoExpr::Ident("err".to_string()),
            ]),
        ],
    })
}
