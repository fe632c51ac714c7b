//! Emission model construction.
//!
//! Converts the grouped service set into the [`ClientTree`] the emitter
//! walks: one root node, one node per top-level service, and one node per
//! nested category. Naming triples and path interpolation plans are derived
//! here so the emitter only renders. The tree is built once per invocation
//! and discarded after emission.

use crate::collect::Service;
use crate::config::ClientConfig;
use crate::errors::GeneratorError;
use crate::extract::HttpVerb;
use crate::group::Grouped;
use crate::naming::{NamingTriple, ensure_unique_fields};
use crate::paths::{InterpolationPlan, compile_path, snake_to_pascal};

/// The full emission model.
#[derive(Debug, Clone)]
pub struct ClientTree {
    /// Root client node.
    pub root: RootNode,
    /// Top-level service nodes, sorted by service name.
    pub top_level: Vec<ServiceNode>,
    /// Nested category nodes, sorted by category.
    pub categories: Vec<CategoryNode>,
}

/// The root client.
#[derive(Debug, Clone)]
pub struct RootNode {
    /// Root client base name, e.g. `"AcmeClient"`.
    pub client_name: String,
    /// Derived naming for the root client.
    pub naming: NamingTriple,
}

/// One generated service.
#[derive(Debug, Clone)]
pub struct ServiceNode {
    /// Service base name, e.g. `"AccountsService"`.
    pub service_name: String,
    /// Derived naming for the service.
    pub naming: NamingTriple,
    /// Root-client accessor stem: the service name minus a trailing
    /// `"Service"`, e.g. `"Accounts"` for `GetAccounts()`.
    pub accessor: String,
    /// HTTP-bound methods only; methods without a binding produce no call
    /// site.
    pub methods: Vec<MethodNode>,
}

/// One generated call site.
#[derive(Debug, Clone)]
pub struct MethodNode {
    /// Method name, e.g. `"GetAccount"`.
    pub name: String,
    /// Request message type name.
    pub input_type: String,
    /// Response message type name.
    pub output_type: String,
    /// The bound verb.
    pub verb: HttpVerb,
    /// Path template, verbatim.
    pub path: String,
    /// Interpolation plan; `None` for parameter-free templates, which are
    /// emitted as string literals.
    pub plan: Option<InterpolationPlan>,
}

/// One nested category and its member services.
#[derive(Debug, Clone)]
pub struct CategoryNode {
    /// Category segment, e.g. `"investments"`.
    pub category: String,
    /// Aggregate client base name, e.g. `"InvestmentsClient"`.
    pub client_base: String,
    /// Derived naming for the aggregate client.
    pub naming: NamingTriple,
    /// Root-client accessor stem, e.g. `"Investments"`.
    pub accessor: String,
    /// Member services, in the order the grouper sorted them.
    pub services: Vec<ServiceNode>,
}

/// Builds the emission model from the grouped services.
///
/// ## Errors
///
/// Returns [`GeneratorError::AccessorCollision`] when two siblings — either
/// two root-client accessors or two services inside one category — reduce to
/// the same private field name.
pub fn build_tree(grouped: &Grouped, cfg: &ClientConfig) -> Result<ClientTree, GeneratorError> {
    let top_level: Vec<ServiceNode> = grouped.top_level.iter().map(service_node).collect();

    let mut categories = Vec::with_capacity(grouped.nested.len());
    for (category, services) in &grouped.nested {
        let scope = format!("category '{category}'");
        ensure_unique_fields(&scope, services.iter().map(|s| s.name.as_str()))?;

        let client_base = format!("{}Client", snake_to_pascal(category));
        categories.push(CategoryNode {
            category: category.clone(),
            naming: NamingTriple::derive(&client_base),
            accessor: snake_to_pascal(category),
            client_base,
            services: services.iter().map(service_node).collect(),
        });
    }

    // Root-client siblings: every top-level service plus every category
    // aggregate shares one field namespace.
    let root_siblings = grouped
        .top_level
        .iter()
        .map(|s| s.name.clone())
        .chain(categories.iter().map(|c| c.client_base.clone()))
        .collect::<Vec<_>>();
    ensure_unique_fields("root client", root_siblings.iter().map(String::as_str))?;

    Ok(ClientTree {
        root: RootNode {
            client_name: cfg.client_name.clone(),
            naming: NamingTriple::derive(&cfg.client_name),
        },
        top_level,
        categories,
    })
}

fn service_node(svc: &Service) -> ServiceNode {
    let methods = svc
        .methods
        .iter()
        .filter_map(|method| {
            let binding = method.binding.as_ref()?;
            let plan = (!binding.path_params.is_empty()).then(|| compile_path(&binding.path));
            Some(MethodNode {
                name: method.name.clone(),
                input_type: method.input_type.clone(),
                output_type: method.output_type.clone(),
                verb: binding.verb,
                path: binding.path.clone(),
                plan,
            })
        })
        .collect();

    ServiceNode {
        service_name: svc.name.clone(),
        naming: NamingTriple::derive(&svc.name),
        accessor: svc
            .name
            .strip_suffix("Service")
            .unwrap_or(&svc.name)
            .to_string(),
        methods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::Method;
    use crate::extract::HttpBinding;
    use crate::group::group_services;

    fn config() -> ClientConfig {
        ClientConfig::parse("vendors.acme:client", None).unwrap()
    }

    fn bound(name: &str, verb: HttpVerb, path: &str) -> Method {
        Method {
            name: name.to_string(),
            input_type: format!("{name}Request"),
            output_type: format!("{name}Response"),
            binding: Some(HttpBinding {
                verb,
                path: path.to_string(),
                path_params: crate::paths::extract_path_params(path)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }),
        }
    }

    fn unbound(name: &str) -> Method {
        Method {
            name: name.to_string(),
            input_type: format!("{name}Request"),
            output_type: format!("{name}Response"),
            binding: None,
        }
    }

    fn service(name: &str, namespace: &str, methods: Vec<Method>) -> Service {
        Service {
            name: name.to_string(),
            namespace: namespace.to_string(),
            methods,
        }
    }

    #[test]
    fn builds_nodes_with_naming_and_plans() {
        let (grouped, _) = group_services(
            vec![
                service(
                    "AccountsService",
                    "vendors.acme",
                    vec![bound("GetAccount", HttpVerb::Get, "/v1/accounts/{id}")],
                ),
                service(
                    "TreasureTitlesService",
                    "vendors.acme.investments",
                    vec![bound("CreateInvestment", HttpVerb::Post, "/v1/investments")],
                ),
            ],
            "vendors.acme",
        );

        let tree = build_tree(&grouped, &config()).unwrap();

        assert_eq!(tree.root.client_name, "AcmeClient");
        assert_eq!(tree.root.naming.implementation, "AcmeClientImpl");

        let accounts = &tree.top_level[0];
        assert_eq!(accounts.accessor, "Accounts");
        assert_eq!(accounts.naming.field, "accounts");
        let get_account = &accounts.methods[0];
        assert_eq!(get_account.plan.as_ref().unwrap().targets, vec!["Id"]);

        let investments = &tree.categories[0];
        assert_eq!(investments.category, "investments");
        assert_eq!(investments.client_base, "InvestmentsClient");
        assert_eq!(investments.accessor, "Investments");
        assert_eq!(investments.naming.field, "investments");
        // Parameter-free path: no plan, emitted as a literal.
        assert!(investments.services[0].methods[0].plan.is_none());
    }

    #[test]
    fn unbound_methods_produce_no_call_sites() {
        let (grouped, _) = group_services(
            vec![service(
                "AuthService",
                "vendors.acme",
                vec![
                    bound("Authenticate", HttpVerb::Post, "/v1/auth"),
                    unbound("RotateKeys"),
                ],
            )],
            "vendors.acme",
        );

        let tree = build_tree(&grouped, &config()).unwrap();
        let names: Vec<_> = tree.top_level[0]
            .methods
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Authenticate"]);
    }

    #[test]
    fn snake_case_category_becomes_pascal_client() {
        let (grouped, _) = group_services(
            vec![service(
                "TitlesService",
                "vendors.acme.treasure_titles",
                vec![],
            )],
            "vendors.acme",
        );

        let tree = build_tree(&grouped, &config()).unwrap();
        assert_eq!(tree.categories[0].client_base, "TreasureTitlesClient");
        assert_eq!(tree.categories[0].accessor, "TreasureTitles");
        assert_eq!(tree.categories[0].naming.field, "treasureTitles");
    }

    #[test]
    fn root_level_collision_is_fatal() {
        // "InvestmentsService" at top level and category "investments" both
        // reduce to field "investments".
        let (grouped, _) = group_services(
            vec![
                service("InvestmentsService", "vendors.acme", vec![]),
                service("FundsService", "vendors.acme.investments", vec![]),
            ],
            "vendors.acme",
        );

        let err = build_tree(&grouped, &config()).unwrap_err();
        match err {
            GeneratorError::AccessorCollision { scope, field, .. } => {
                assert_eq!(scope, "root client");
                assert_eq!(field, "investments");
            }
            other => panic!("expected AccessorCollision, got: {other:?}"),
        }
    }

    #[test]
    fn category_level_collision_is_fatal() {
        let (grouped, _) = group_services(
            vec![
                service("FundsService", "vendors.acme.investments", vec![]),
                service("FundsClient", "vendors.acme.investments", vec![]),
            ],
            "vendors.acme",
        );

        let err = build_tree(&grouped, &config()).unwrap_err();
        match err {
            GeneratorError::AccessorCollision { scope, field, .. } => {
                assert_eq!(scope, "category 'investments'");
                assert_eq!(field, "funds");
            }
            other => panic!("expected AccessorCollision, got: {other:?}"),
        }
    }
}
