//! Tag references for the label picker.
//!
//! Tags live in a global catalog owned elsewhere; the panel only keeps
//! cloned copies in its trending list.

use serde::{Deserialize, Serialize};

/// A tag from the catalog, identified by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagRef {
    /// Unique identifier for the tag
    pub id: u32,
    /// Display name of the tag
    pub name: String,
}

impl TagRef {
    /// Create a new tag reference.
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// Read-only, ordered source of tags.
pub trait TagCatalog {
    /// All tags in catalog order.
    fn tags(&self) -> &[TagRef];
}

impl TagCatalog for [TagRef] {
    fn tags(&self) -> &[TagRef] {
        self
    }
}

impl TagCatalog for Vec<TagRef> {
    fn tags(&self) -> &[TagRef] {
        self
    }
}
