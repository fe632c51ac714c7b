//! Trellis client generator library.
//!
//! This crate turns service schemas described with `trellis-define` into a
//! hierarchical, interface-based Go client library. Services directly in the
//! configured root namespace become top-level clients; services one segment
//! deeper are grouped into category aggregates; a root client wires the
//! whole tree to one shared transport handle.
//!
//! ## Pipeline
//!
//! 1. [`collect`] - filter schema files to the root namespace, resolve each
//!    method's HTTP binding, and establish the `(namespace, name)` order
//! 2. [`group`] - partition services into top-level and nested-by-category
//! 3. [`tree`] - derive naming and path interpolation plans per node
//! 4. [`codegen`] + [`gocode`] - assemble each output file as a structured
//!    Go source model and render it
//! 5. [`output`] - fixed-order file assembly, diagnostics, atomic writes
//!
//! The same input always produces byte-identical output.
//!
//! ## Example
//!
//! ```
//! use trellis_define::{HttpRule, MethodDef, SchemaFile, ServiceDef};
//! use trellis_gen::config::ClientConfig;
//! use trellis_gen::output::generate_client;
//!
//! let schema = vec![SchemaFile::new("accounts.proto", "vendors.acme").with_service(
//!     ServiceDef::new("AccountsService").with_method(
//!         MethodDef::new("GetAccount", "GetAccountRequest", "GetAccountResponse")
//!             .with_rule(HttpRule::get("/v1/accounts/{id}")),
//!     ),
//! )];
//!
//! let cfg = ClientConfig::parse("vendors.acme:client", None).unwrap();
//! let generation = generate_client(&schema, &cfg).unwrap();
//!
//! assert_eq!(generation.files.len(), 3); // runtime, accounts, root client
//! assert!(!generation.has_errors());
//! ```
//!
//! ## Generated surface
//!
//! For a root namespace `vendors.acme` with `AccountsService` at the top
//! level and `TreasureTitlesService` under `vendors.acme.investments`:
//!
//! ```text
//! client/
//! ├── http/client.gen.go   // static transport support
//! ├── accounts.gen.go      // AccountsService + AccountsServiceImpl
//! ├── investments.gen.go   // InvestmentsClient aggregate + member services
//! └── client.gen.go        // AcmeClient root: GetAccounts(), GetInvestments()
//! ```

pub mod codegen;
pub mod collect;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod extract;
pub mod gocode;
pub mod group;
pub mod naming;
pub mod output;
pub mod paths;
pub mod tree;
