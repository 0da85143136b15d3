//! Label registry: which tags the picker shows, and in what order.
//!
//! Recently used ("trending") tags come first, most recent at the front,
//! followed by the rest of the catalog in catalog order.

use std::collections::HashSet;

use crate::model::{TagCatalog, TagRef};

/// Most-recently-used list of tags, unique by id.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    trending: Vec<TagRef>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `tag` as just used: move it to the front, inserting a copy if new.
    pub fn promote(&mut self, tag: &TagRef) {
        match self.trending.iter().position(|t| t.id == tag.id) {
            Some(0) => {}
            Some(index) => {
                let existing = self.trending.remove(index);
                self.trending.insert(0, existing);
            }
            None => self.trending.insert(0, tag.clone()),
        }
        log::debug!("Promoted tag {} ({})", tag.id, tag.name);
    }

    /// Build the picker list: trending tags, then the remaining catalog tags.
    ///
    /// Never yields two tags with the same id, even if the catalog repeats one.
    pub fn render<C: TagCatalog + ?Sized>(&self, catalog: &C) -> Vec<TagRef> {
        let mut seen: HashSet<u32> = self.trending.iter().map(|t| t.id).collect();
        let mut labels = self.trending.clone();

        for tag in catalog.tags() {
            if seen.insert(tag.id) {
                labels.push(tag.clone());
            }
        }
        labels
    }

    /// Trending tags, most recent first.
    pub fn trending(&self) -> &[TagRef] {
        &self.trending
    }

    pub fn len(&self) -> usize {
        self.trending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trending.is_empty()
    }

    /// Forget all usage history.
    pub fn clear(&mut self) {
        self.trending.clear();
    }
}
