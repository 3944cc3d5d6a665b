//! Revealer - per-section progressive disclosure
//!
//! Each section starts with one page of dishes visible and grows by one
//! page per "show more". Counters are never clamped to section size;
//! rendering slices, so an oversized counter just shows everything.

use std::collections::HashMap;

use super::classifier::BucketKey;
use crate::core::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct Revealer {
    page_size: usize,
    /// Only sections the shopper expanded have an entry
    visible: HashMap<BucketKey, usize>,
}

impl Revealer {
    /// A zero page size would never reveal anything and falls back to the default
    pub fn new(page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self {
            page_size,
            visible: HashMap::new(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Stored visible count for a section, may exceed its size
    pub fn visible_count(&self, key: &BucketKey) -> usize {
        self.visible.get(key).copied().unwrap_or(self.page_size)
    }

    /// Show one more page of a section, returns the new visible count
    pub fn reveal_more(&mut self, key: &BucketKey) -> usize {
        let count = self.visible_count(key).saturating_add(self.page_size);
        self.visible.insert(key.clone(), count);
        tracing::trace!("Section {} now shows up to {} dishes", key, count);
        count
    }

    /// Number of dishes rendered for a section of `len` dishes
    pub fn rendered_len(&self, key: &BucketKey, len: usize) -> usize {
        self.visible_count(key).min(len)
    }

    /// Whether the "show more" control is shown for a section of `len` dishes
    pub fn has_more(&self, key: &BucketKey, len: usize) -> bool {
        self.visible_count(key) < len
    }

    pub fn reset(&mut self) {
        self.visible.clear();
    }
}

impl Default for Revealer {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page() {
        let revealer = Revealer::default();
        let key = BucketKey::new("hot__none");

        assert_eq!(revealer.visible_count(&key), 12);
        assert_eq!(revealer.rendered_len(&key, 5), 5);
        assert!(!revealer.has_more(&key, 12));
        assert!(revealer.has_more(&key, 13));
    }

    #[test]
    fn test_reveal_more_is_unclamped() {
        let mut revealer = Revealer::default();
        let key = BucketKey::new("hot__none");

        assert_eq!(revealer.reveal_more(&key), 24);
        assert_eq!(revealer.reveal_more(&key), 36);
        assert_eq!(revealer.visible_count(&key), 36);
        assert_eq!(revealer.rendered_len(&key, 15), 15);
        assert!(!revealer.has_more(&key, 15));
    }

    #[test]
    fn test_sections_are_independent() {
        let mut revealer = Revealer::default();
        let hot = BucketKey::new("hot__none");
        let bakery = BucketKey::new("bakery__none");

        revealer.reveal_more(&hot);

        assert_eq!(revealer.visible_count(&hot), 24);
        assert_eq!(revealer.visible_count(&bakery), 12);
    }

    #[test]
    fn test_reset() {
        let mut revealer = Revealer::new(6);
        let key = BucketKey::new("hot__none");
        revealer.reveal_more(&key);

        revealer.reset();

        assert_eq!(revealer.visible_count(&key), 6);
    }

    #[test]
    fn test_zero_page_size_uses_default() {
        let mut revealer = Revealer::new(0);
        let key = BucketKey::new("hot__none");

        assert_eq!(revealer.page_size(), DEFAULT_PAGE_SIZE);
        assert!(revealer.has_more(&key, 13));
        revealer.reveal_more(&key);
        assert!(!revealer.has_more(&key, 13));
    }

    #[test]
    fn test_huge_page_size_saturates() {
        let mut revealer = Revealer::new(usize::MAX);
        let key = BucketKey::new("hot__none");

        assert_eq!(revealer.reveal_more(&key), usize::MAX);
        assert_eq!(revealer.reveal_more(&key), usize::MAX);
        assert_eq!(revealer.rendered_len(&key, 40), 40);
        assert!(!revealer.has_more(&key, 40));
    }
}
