//! Substring filters for the list endpoints.
//!
//! Matching is case-sensitive and applied to the whole column value, so a
//! filter of `"at"` matches `"The Matrix"` but not `"AT"`.

use serde::{Deserialize, Serialize};

/// Filter applied when listing videos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFilter {
    /// Substring the title must contain.
    pub title: Option<String>,
}

impl VideoFilter {
    /// Whether a title passes the filter.
    pub fn matches(&self, title: &str) -> bool {
        contains(self.title.as_deref(), title)
    }
}

/// Filter applied when listing customers. Both conditions must hold when
/// both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFilter {
    /// Substring the name must contain.
    pub name: Option<String>,
    /// Substring the postal code must contain.
    pub postal_code: Option<String>,
}

impl CustomerFilter {
    /// Whether a customer's name and postal code pass the filter.
    pub fn matches(&self, name: &str, postal_code: &str) -> bool {
        contains(self.name.as_deref(), name) && contains(self.postal_code.as_deref(), postal_code)
    }
}

fn contains(needle: Option<&str>, haystack: &str) -> bool {
    needle.is_none_or(|n| haystack.contains(n))
}
