//! End-to-end tests for the full generation pipeline.
//!
//! These tests exercise collection through emission on a realistic schema:
//! file set and ordering, the generated client surface, determinism across
//! repeated runs, and the failure modes that must not abort the whole run.

use std::fs;

use tempfile::TempDir;
use trellis_define::{HttpRule, MethodDef, SchemaFile, ServiceDef};
use trellis_gen::config::ClientConfig;
use trellis_gen::output::{generate_and_write, generate_client};

fn config() -> ClientConfig {
    ClientConfig::parse("vendors.acme:client", None).unwrap()
}

/// One top-level service with a parameterized GET, one nested service with a
/// parameter-free POST.
fn round_trip_schema() -> Vec<SchemaFile> {
    vec![
        SchemaFile::new("accounts.proto", "vendors.acme").with_service(
            ServiceDef::new("AccountsService").with_method(
                MethodDef::new("GetAccount", "GetAccountRequest", "GetAccountResponse")
                    .with_rule(HttpRule::get("/v1/accounts/{id}")),
            ),
        ),
        SchemaFile::new("treasure_titles.proto", "vendors.acme.investments").with_service(
            ServiceDef::new("TreasureTitlesService").with_method(
                MethodDef::new(
                    "CreateInvestment",
                    "CreateInvestmentRequest",
                    "CreateInvestmentResponse",
                )
                .with_rule(HttpRule::post("/v1/investments")),
            ),
        ),
    ]
}

fn file_content<'a>(
    generation: &'a trellis_gen::output::Generation,
    path: &str,
) -> &'a str {
    &generation
        .files
        .iter()
        .find(|f| f.path == path)
        .unwrap_or_else(|| panic!("no file {path} in output"))
        .content
}

// =============================================================================
// Round-trip scenario
// =============================================================================

#[test]
fn round_trip_produces_expected_file_set() {
    let generation = generate_client(&round_trip_schema(), &config()).unwrap();
    assert!(!generation.has_errors());

    let paths: Vec<_> = generation.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "client/http/client.gen.go",
            "client/accounts.gen.go",
            "client/investments.gen.go",
            "client/client.gen.go",
        ]
    );
}

#[test]
fn round_trip_top_level_file_substitutes_id() {
    let generation = generate_client(&round_trip_schema(), &config()).unwrap();
    let code = file_content(&generation, "client/accounts.gen.go");

    assert!(code.contains("type AccountsService interface {"));
    assert!(code.contains("type AccountsServiceImpl struct {"));
    assert!(code.contains(r#"path := fmt.Sprintf("/v1/accounts/%s", req.Id)"#));
    assert!(code.contains("err := s.client.Get(ctx, path, resp)"));
}

#[test]
fn round_trip_nested_file_uses_literal_path() {
    let generation = generate_client(&round_trip_schema(), &config()).unwrap();
    let code = file_content(&generation, "client/investments.gen.go");

    assert!(code.contains("type InvestmentsClient interface {"));
    assert!(code.contains("\tGetTreasureTitlesService() TreasureTitlesService\n"));
    assert!(code.contains("type TreasureTitlesServiceImpl struct {"));
    assert!(code.contains(r#"path := "/v1/investments""#));
    assert!(code.contains("err := s.client.Post(ctx, path, req, resp)"));
}

#[test]
fn round_trip_root_client_exposes_both_accessors() {
    let generation = generate_client(&round_trip_schema(), &config()).unwrap();
    let code = file_content(&generation, "client/client.gen.go");

    assert!(code.contains("\tGetAccounts() AccountsService\n"));
    assert!(code.contains("\tGetInvestments() InvestmentsClient\n"));
    assert!(code.contains("func NewAcmeClient(baseURL string, token string) *AcmeClientImpl {"));
    assert!(code.contains("\t\taccounts: &AccountsServiceImpl{client: httpClient},\n"));
    assert!(code.contains(
        "\t\t\ttreasureTitles: &TreasureTitlesServiceImpl{client: httpClient},\n"
    ));
}

#[test]
fn every_generated_file_carries_the_header() {
    let generation = generate_client(&round_trip_schema(), &config()).unwrap();
    for file in &generation.files {
        assert!(
            file.content
                .starts_with("// Code generated by trellis-gen. DO NOT EDIT."),
            "{} is missing the generated header",
            file.path
        );
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_runs_are_byte_identical() {
    let schema = round_trip_schema();
    let cfg = config();

    let first = generate_client(&schema, &cfg).unwrap();
    let second = generate_client(&schema, &cfg).unwrap();

    assert_eq!(first.files, second.files);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn input_file_order_does_not_change_output() {
    let mut reversed = round_trip_schema();
    reversed.reverse();

    let forward = generate_client(&round_trip_schema(), &config()).unwrap();
    let backward = generate_client(&reversed, &config()).unwrap();

    assert_eq!(forward.files, backward.files);
}

#[test]
fn services_and_categories_emit_sorted() {
    let schema = vec![
        SchemaFile::new("z.proto", "vendors.acme")
            .with_service(ServiceDef::new("LinksService"))
            .with_service(ServiceDef::new("AuthService")),
        SchemaFile::new("y.proto", "vendors.acme.payments")
            .with_service(ServiceDef::new("PixService")),
        SchemaFile::new("x.proto", "vendors.acme.investments")
            .with_service(ServiceDef::new("FundsService")),
    ];

    let generation = generate_client(&schema, &config()).unwrap();
    let paths: Vec<_> = generation.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "client/http/client.gen.go",
            "client/auth.gen.go",
            "client/links.gen.go",
            "client/investments.gen.go",
            "client/payments.gen.go",
            "client/client.gen.go",
        ]
    );
}

// =============================================================================
// Namespace filtering
// =============================================================================

#[test]
fn sibling_namespace_with_shared_prefix_is_excluded() {
    let mut schema = round_trip_schema();
    schema.push(
        SchemaFile::new("other.proto", "vendors.acmex")
            .with_service(ServiceDef::new("OtherService")),
    );

    let generation = generate_client(&schema, &config()).unwrap();
    assert!(
        !generation
            .files
            .iter()
            .any(|f| f.content.contains("OtherService")),
        "vendors.acmex must not match root vendors.acme"
    );
}

// =============================================================================
// Unbound methods and degraded records
// =============================================================================

#[test]
fn methods_without_bindings_produce_no_call_sites() {
    let schema = vec![SchemaFile::new("accounts.proto", "vendors.acme").with_service(
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
    )];

    let generation = generate_client(&schema, &config()).unwrap();
    let code = file_content(&generation, "client/accounts.gen.go");

    assert!(code.contains("GetAccount"));
    assert!(!code.contains("ReconcileLedger"));
    assert!(!generation.has_errors());
}

#[test]
fn empty_http_rule_is_reported_but_does_not_fail_the_run() {
    let schema = vec![SchemaFile::new("auth.proto", "vendors.acme").with_service(
        ServiceDef::new("AuthService")
            .with_method(
                MethodDef::new("Authenticate", "AuthenticateRequest", "AuthenticateResponse")
                    .with_rule(HttpRule::post("/v1/auth")),
            )
            .with_method(
                MethodDef::new("Refresh", "RefreshRequest", "RefreshResponse")
                    .with_rule(HttpRule::default()),
            ),
    )];

    let generation = generate_client(&schema, &config()).unwrap();
    assert!(!generation.has_errors());
    assert!(
        generation
            .diagnostics
            .iter()
            .any(|d| d.message.contains("AuthService.Refresh")),
        "the malformed rule must be reported"
    );

    let code = file_content(&generation, "client/auth.gen.go");
    assert!(code.contains("Authenticate"));
    assert!(!code.contains("func (s *AuthServiceImpl) Refresh"));
}

// =============================================================================
// Writing to disk
// =============================================================================

#[test]
fn written_tree_matches_generation() {
    let dir = TempDir::new().unwrap();
    let generation =
        generate_and_write(&round_trip_schema(), &config(), dir.path(), false).unwrap();

    for file in &generation.files {
        let on_disk = fs::read_to_string(dir.path().join(&file.path)).unwrap();
        assert_eq!(on_disk, file.content, "mismatch for {}", file.path);
    }
}

#[test]
fn runtime_file_lands_under_http_subdir() {
    let dir = TempDir::new().unwrap();
    generate_and_write(&round_trip_schema(), &config(), dir.path(), false).unwrap();

    let runtime = fs::read_to_string(dir.path().join("client/http/client.gen.go")).unwrap();
    assert!(runtime.contains("package http"));
    assert!(runtime.contains("func (c *HTTPClient) Get"));
    assert!(runtime.contains("func (c *HTTPClient) PostWithWrap"));
}
