//! File builders for the generated client library.
//!
//! Each submodule assembles one class of output file as a [`crate::gocode`]
//! model (or, for the runtime, hands out an embedded static source):
//!
//! - [`runtime`] - the static transport support file
//! - [`service`] - one file per top-level service
//! - [`nested`] - one file per nested category
//! - [`root_client`] - the root client wiring the tree together
//!
//! Assembly order and file paths are decided in [`crate::output`].

pub mod nested;
pub mod root_client;
pub mod runtime;
pub mod service;

pub use nested::nested_file;
pub use root_client::root_client_file;
pub use runtime::{runtime_file_path, runtime_source};
pub use service::{service_file, service_file_stem};
