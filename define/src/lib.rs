//! Trellis Definition Library
//!
//! This crate provides the schema-description primitives consumed by the
//! `trellis-gen` binary. A schema reflection tool (or a hand-written fixture)
//! produces a set of [`SchemaFile`] values — one per source schema file —
//! and the generator turns them into a hierarchical Go client library.
//!
//! The raw schema wire format is *not* parsed here: whatever produced the
//! descriptors has already done that work. These types are the structured
//! hand-off point.
//!
//! ## Core Types
//!
//! - [`SchemaFile`] - One schema source file: a namespace plus its services
//! - [`ServiceDef`] - A named group of RPC methods
//! - [`MethodDef`] - A single method with input/output type names
//! - [`HttpRule`] - The raw HTTP binding annotation attached to a method
//!
//! ## Examples
//!
//! Describe a service with one HTTP-bound method:
//!
//! ```
//! use trellis_define::{HttpRule, MethodDef, SchemaFile, ServiceDef};
//!
//! let file = SchemaFile::new("accounts.proto", "vendors.acme").with_service(
//!     ServiceDef::new("AccountsService").with_method(
//!         MethodDef::new("GetAccount", "GetAccountRequest", "GetAccountResponse")
//!             .with_rule(HttpRule::get("/v1/accounts/{id}")),
//!     ),
//! );
//!
//! assert_eq!(file.namespace, "vendors.acme");
//! assert_eq!(file.services[0].methods.len(), 1);
//! ```
//!
//! All types are serde-serializable so schema dumps can be exchanged as JSON.

pub mod rule;
pub mod schema;

pub use rule::HttpRule;
pub use schema::{MethodDef, SchemaFile, ServiceDef};
