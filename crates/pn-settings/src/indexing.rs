//! Stable option indexing.
//!
//! Provides bidirectional mappings between option names and contiguous
//! slots (0..N) in declaration order.

use std::collections::HashMap;

/// Name index for a settings store.
///
/// Slots are assigned in insertion order and never reused, so iterating
/// slots 0..N replays declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct OptionIndex {
    /// Contiguous list of names (slot -> name).
    names: Vec<String>,

    /// Reverse lookup: name -> slot.
    slots: HashMap<String, usize>,
}

impl OptionIndex {
    /// Register a new name and return its slot, or `None` if already present.
    pub(crate) fn insert(&mut self, name: &str) -> Option<usize> {
        if self.slots.contains_key(name) {
            return None;
        }
        let slot = self.names.len();
        self.names.push(name.to_string());
        self.slots.insert(name.to_string(), slot);
        Some(slot)
    }

    /// Get the slot for a name.
    pub(crate) fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    /// Names in slot order.
    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_basic() {
        let mut idx = OptionIndex::default();
        assert_eq!(idx.insert("prefix"), Some(0));
        assert_eq!(idx.insert("name"), Some(1));
        assert_eq!(idx.names().len(), 2);

        assert_eq!(idx.slot("prefix"), Some(0));
        assert_eq!(idx.slot("name"), Some(1));
        assert_eq!(idx.slot("missing"), None);
    }

    #[test]
    fn index_rejects_duplicates() {
        let mut idx = OptionIndex::default();
        idx.insert("a");
        assert_eq!(idx.insert("a"), None);
        assert_eq!(idx.names().len(), 1);
    }

    #[test]
    fn index_contiguous_in_insertion_order() {
        let mut idx = OptionIndex::default();
        for name in ["z", "a", "m"] {
            idx.insert(name);
        }
        assert_eq!(idx.names(), ["z", "a", "m"]);
    }
}
