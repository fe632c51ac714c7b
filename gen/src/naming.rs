//! Naming policy for generated interfaces, implementations, and accessors.
//!
//! Every generated entity derives three names from one base identifier:
//! the interface keeps the base name, the implementation gets an `Impl`
//! suffix, and the private field strips a trailing `Service` or `Client`
//! suffix and lowercases the first character. The functions are pure — the
//! same base always yields the same triple.
//!
//! Because the private-field derivation is lossy, two sibling services can
//! reduce to the same field name. [`ensure_unique_fields`] rejects that case
//! instead of letting one accessor silently shadow the other.

use std::collections::HashMap;

use crate::errors::GeneratorError;

/// Returns the interface name for a base name.
///
/// The interface gets the unadorned base name: consumption sites program
/// against `AccountsService`, not a decorated variant.
pub fn interface_name(base: &str) -> String {
    base.to_string()
}

/// Returns the implementation struct name for a base name.
///
/// ## Examples
///
/// ```
/// use trellis_gen::naming::impl_name;
///
/// assert_eq!(impl_name("AccountsService"), "AccountsServiceImpl");
/// assert_eq!(impl_name("InvestmentsClient"), "InvestmentsClientImpl");
/// ```
pub fn impl_name(base: &str) -> String {
    format!("{base}Impl")
}

/// Returns the private field name for a base name.
///
/// Strips one trailing `"Service"` or `"Client"` suffix (at most one), then
/// lowercases the first character. An empty base yields an empty field name.
///
/// ## Examples
///
/// ```
/// use trellis_gen::naming::private_field_name;
///
/// assert_eq!(private_field_name("AccountsService"), "accounts");
/// assert_eq!(private_field_name("InvestmentsClient"), "investments");
/// assert_eq!(private_field_name("TreasureTitlesService"), "treasureTitles");
/// assert_eq!(private_field_name(""), "");
/// ```
pub fn private_field_name(base: &str) -> String {
    let trimmed = base
        .strip_suffix("Service")
        .or_else(|| base.strip_suffix("Client"))
        .unwrap_or(base);

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The three derived names for one base identifier.
///
/// Recomputed on demand; nothing caches or mutates naming state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingTriple {
    /// Interface name (the base name itself).
    pub interface: String,
    /// Implementation struct name (`<base>Impl`).
    pub implementation: String,
    /// Private accessor field name.
    pub field: String,
}

impl NamingTriple {
    /// Derives the triple for a base name.
    pub fn derive(base: &str) -> Self {
        Self {
            interface: interface_name(base),
            implementation: impl_name(base),
            field: private_field_name(base),
        }
    }
}

/// Rejects sibling base names whose private fields collide.
///
/// `scope` names the sibling set for the error message, e.g. `"root client"`
/// or `"category 'investments'"`.
///
/// ## Errors
///
/// Returns [`GeneratorError::AccessorCollision`] naming both colliding bases
/// and the shared field.
pub fn ensure_unique_fields<'a>(
    scope: &str,
    bases: impl IntoIterator<Item = &'a str>,
) -> Result<(), GeneratorError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for base in bases {
        let field = private_field_name(base);
        if let Some(first) = seen.get(field.as_str()) {
            return Err(GeneratorError::AccessorCollision {
                scope: scope.to_string(),
                field,
                first: (*first).to_string(),
                second: base.to_string(),
            });
        }
        seen.insert(field, base);
    }

    Ok(())
}
