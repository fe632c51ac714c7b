//! HTTP binding annotations.
//!
//! An [`HttpRule`] is the raw, unvalidated form of a method's HTTP binding:
//! one optional path template per verb, mirroring the one-of shape the
//! annotation has in the schema language. At most one verb field is expected
//! to be set; deciding which one wins (and rejecting rules that set none) is
//! the generator's job, not this crate's.

use serde::{Deserialize, Serialize};

/// Raw HTTP binding annotation for a single method.
///
/// Each field holds the URL path template for that verb, e.g.
/// `get: Some("/v1/accounts/{id}")`. Templates may contain `{name}`
/// placeholders which the generator substitutes from request fields.
///
/// ## Examples
///
/// ```
/// use trellis_define::HttpRule;
///
/// let rule = HttpRule::get("/v1/accounts/{id}");
/// assert_eq!(rule.get.as_deref(), Some("/v1/accounts/{id}"));
/// assert!(rule.post.is_none());
///
/// // An empty rule is representable; the generator rejects it.
/// assert!(HttpRule::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRule {
    /// Path template for a GET binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<String>,

    /// Path template for a POST binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,

    /// Path template for a PUT binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<String>,

    /// Path template for a DELETE binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,

    /// Path template for a PATCH binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

impl HttpRule {
    /// Creates a GET rule for the given path template.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            get: Some(path.into()),
            ..Self::default()
        }
    }

    /// Creates a POST rule for the given path template.
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            post: Some(path.into()),
            ..Self::default()
        }
    }

    /// Creates a PUT rule for the given path template.
    pub fn put(path: impl Into<String>) -> Self {
        Self {
            put: Some(path.into()),
            ..Self::default()
        }
    }

    /// Creates a DELETE rule for the given path template.
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            delete: Some(path.into()),
            ..Self::default()
        }
    }

    /// Creates a PATCH rule for the given path template.
    pub fn patch(path: impl Into<String>) -> Self {
        Self {
            patch: Some(path.into()),
            ..Self::default()
        }
    }

    /// Returns true if no verb field is set.
    pub fn is_empty(&self) -> bool {
        self.get.is_none()
            && self.post.is_none()
            && self.put.is_none()
            && self.delete.is_none()
            && self.patch.is_none()
    }
}
