//! Nested-category file generation.
//!
//! Services one namespace segment below the root are grouped by that
//! segment; each group becomes one file holding an aggregate client — an
//! interface exposing one accessor per member service — followed by the
//! member services themselves, in the same shape as top-level service files.

use crate::config::ClientConfig;
use crate::errors::GeneratorError;
use crate::gocode::{
    GoDecl, GoExpr, GoFile, GoFunc, GoImport, GoInterface, GoParam, GoSignature, GoStmt, GoStruct,
};
use crate::tree::CategoryNode;

use super::service::{needs_fmt, service_decls};

/// Builds the file for one nested category.
///
/// ## Errors
///
/// Returns [`GeneratorError::UnsupportedEmissionVerb`] if any member
/// service's bound method uses a verb the transport helper cannot dispatch.
pub fn nested_file(category: &CategoryNode, cfg: &ClientConfig) -> Result<GoFile, GeneratorError> {
    let mut decls = Vec::new();

    decls.push(GoDecl::Interface(GoInterface {
        doc: vec![format!(
            "{} defines the interface for {} services",
            category.naming.interface, category.accessor
        )],
        name: category.naming.interface.clone(),
        methods: category
            .services
            .iter()
            .map(|svc| GoSignature {
                doc: None,
                name: format!("Get{}", svc.service_name),
                params: vec![],
                results: vec![svc.naming.interface.clone()],
            })
            .collect(),
    }));

    decls.push(GoDecl::Struct(GoStruct {
        doc: vec![format!(
            "{} groups {} services",
            category.naming.implementation, category.category
        )],
        name: category.naming.implementation.clone(),
        embeds: vec![category.naming.interface.clone()],
        fields: category
            .services
            .iter()
            .map(|svc| {
                GoParam::new(
                    svc.naming.field.clone(),
                    format!("*{}", svc.naming.implementation),
                )
            })
            .collect(),
    }));

    for svc in &category.services {
        decls.push(GoDecl::Func(GoFunc {
            doc: vec![format!(
                "Get{} returns the {}",
                svc.service_name, svc.service_name
            )],
            receiver: Some(GoParam::new(
                "c",
                format!("*{}", category.naming.implementation),
            )),
            name: format!("Get{}", svc.service_name),
            params: vec![],
            results: vec![svc.naming.interface.clone()],
            body: vec![GoStmt::Return(vec![GoExpr::Field {
                recv: "c".to_string(),
                name: svc.naming.field.clone(),
            }])],
        }));
    }

    for svc in &category.services {
        decls.extend(service_decls(svc)?);
    }

    let mut std_imports = vec![GoImport::plain("context")];
    if needs_fmt(&category.services) {
        std_imports.push(GoImport::plain("fmt"));
    }

    Ok(GoFile {
        package: cfg.package_name().to_string(),
        std_imports,
        imports: vec![
            GoImport::plain(cfg.runtime_pkg.clone()),
            GoImport::aliased("pb", cfg.message_pkg(&format!("/{}", category.category))),
        ],
        decls,
    })
}
