//! Root client file generation.
//!
//! The root client ties the tree together: one accessor per top-level
//! service and per nested category, all backed by a single shared transport
//! handle built in the constructor. The handle is immutable after
//! construction — changing the token means building a new client.

use crate::config::ClientConfig;
use crate::gocode::{
    GoComposite, GoDecl, GoExpr, GoFile, GoFunc, GoImport, GoInterface, GoParam, GoSignature,
    GoStmt, GoStruct,
};
use crate::tree::ClientTree;

/// Builds the root client file.
pub fn root_client_file(tree: &ClientTree, cfg: &ClientConfig) -> GoFile {
    let root = &tree.root;
    let mut decls = Vec::new();

    // Accessor list: top-level services first, then category aggregates,
    // preserving the tree builder's ordering.
    let accessors: Vec<(String, String, String)> = tree
        .top_level
        .iter()
        .map(|svc| {
            (
                svc.accessor.clone(),
                svc.naming.interface.clone(),
                svc.naming.field.clone(),
            )
        })
        .chain(tree.categories.iter().map(|cat| {
            (
                cat.accessor.clone(),
                cat.naming.interface.clone(),
                cat.naming.field.clone(),
            )
        }))
        .collect();

    decls.push(GoDecl::Interface(GoInterface {
        doc: vec![format!(
            "{} defines the interface for the root HTTP client",
            root.naming.interface
        )],
        name: root.naming.interface.clone(),
        methods: accessors
            .iter()
            .map(|(accessor, interface, _)| GoSignature {
                doc: None,
                name: format!("Get{accessor}"),
                params: vec![],
                results: vec![interface.clone()],
            })
            .collect(),
    }));

    let mut fields = vec![GoParam::new("httpClient", "*httpclient.HTTPClient")];
    fields.extend(tree.top_level.iter().map(|svc| {
        GoParam::new(
            svc.naming.field.clone(),
            format!("*{}", svc.naming.implementation),
        )
    }));
    fields.extend(tree.categories.iter().map(|cat| {
        GoParam::new(
            cat.naming.field.clone(),
            format!("*{}", cat.naming.implementation),
        )
    }));

    decls.push(GoDecl::Struct(GoStruct {
        doc: vec![format!(
            "{} is the root HTTP client implementation",
            root.naming.implementation
        )],
        name: root.naming.implementation.clone(),
        embeds: vec![root.naming.interface.clone()],
        fields,
    }));

    for (accessor, interface, field) in &accessors {
        decls.push(GoDecl::Func(GoFunc {
            doc: vec![format!("Get{accessor} returns the {interface}")],
            receiver: Some(GoParam::new(
                "c",
                format!("*{}", root.naming.implementation),
            )),
            name: format!("Get{accessor}"),
            params: vec![],
            results: vec![interface.clone()],
            body: vec![GoStmt::Return(vec![GoExpr::Field {
                recv: "c".to_string(),
                name: field.clone(),
            }])],
        }));
    }

    decls.push(GoDecl::Func(constructor(tree)));

    GoFile {
        package: cfg.package_name().to_string(),
        std_imports: vec![GoImport::plain("net/http"), GoImport::plain("time")],
        imports: vec![GoImport::aliased("httpclient", cfg.runtime_pkg.clone())],
        decls,
    }
}

fn constructor(tree: &ClientTree) -> GoFunc {
    let root = &tree.root;

    let mut wiring = vec![(
        "httpClient".to_string(),
        GoExpr::Ident("httpClient".to_string()),
    )];

    for svc in &tree.top_level {
        wiring.push((
            svc.naming.field.clone(),
            GoExpr::Composite(GoComposite {
                ty: svc.naming.implementation.clone(),
                addr: true,
                multiline: false,
                fields: vec![(
                    "client".to_string(),
                    GoExpr::Ident("httpClient".to_string()),
                )],
            }),
        ));
    }

    for cat in &tree.categories {
        let members = cat
            .services
            .iter()
            .map(|svc| {
                (
                    svc.naming.field.clone(),
                    GoExpr::Composite(GoComposite {
                        ty: svc.naming.implementation.clone(),
                        addr: true,
                        multiline: false,
                        fields: vec![(
                            "client".to_string(),
                            GoExpr::Ident("httpClient".to_string()),
                        )],
                    }),
                )
            })
            .collect();

        wiring.push((
            cat.naming.field.clone(),
            GoExpr::Composite(GoComposite {
                ty: cat.naming.implementation.clone(),
                addr: true,
                multiline: true,
                fields: members,
            }),
        ));
    }

    GoFunc {
        doc: vec![
            format!("New{} creates a new HTTP client", root.client_name),
            String::new(),
            "Parameters:".to_string(),
            "  - baseURL: API base URL".to_string(),
            "  - token: Bearer token (empty string for unauthenticated client)".to_string(),
            String::new(),
            "The client is immutable - to change the token, create a new client instance."
                .to_string(),
        ],
        receiver: None,
        name: format!("New{}", root.client_name),
        params: vec![
            GoParam::new("baseURL", "string"),
            GoParam::new("token", "string"),
        ],
        results: vec![format!("*{}", root.naming.implementation)],
        body: vec![
            GoStmt::Define {
                name: "httpClient".to_string(),
                value: GoExpr::Composite(GoComposite {
                    ty: "httpclient.HTTPClient".to_string(),
                    addr: true,
                    multiline: true,
                    fields: vec![
                        ("BaseURL".to_string(), GoExpr::Ident("baseURL".to_string())),
                        (
                            "HTTPClient".to_string(),
                            GoExpr::Composite(GoComposite {
                                ty: "http.Client".to_string(),
                                addr: true,
                                multiline: false,
                                fields: vec![(
                                    "Timeout".to_string(),
                                    GoExpr::Raw("30 * time.Second".to_string()),
                                )],
                            }),
                        ),
                        ("Token".to_string(), GoExpr::Ident("token".to_string())),
                    ],
                }),
            },
            GoStmt::Return(vec![GoExpr::Composite(GoComposite {
                ty: root.naming.implementation.clone(),
                addr: true,
                multiline: true,
                fields: wiring,
            })]),
        ],
    }
}
