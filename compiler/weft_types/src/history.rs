//! Accumulated description history of a declarative type.

use std::slice;
use std::sync::Arc;

use weft_bind::SynthesizedNode;
use weft_ir::SharedNamespace;

/// One layer of a declarative type: a synthesized tree and the namespace its
/// bindings were closed over.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    description: Arc<SynthesizedNode>,
    namespace: SharedNamespace,
}

impl HistoryEntry {
    pub fn new(description: Arc<SynthesizedNode>, namespace: SharedNamespace) -> Self {
        HistoryEntry {
            description,
            namespace,
        }
    }

    pub fn description(&self) -> &Arc<SynthesizedNode> {
        &self.description
    }

    pub fn namespace(&self) -> &SharedNamespace {
        &self.namespace
    }

    /// Identity comparison: both entries share the same tree and namespace.
    pub fn ptr_eq(&self, other: &HistoryEntry) -> bool {
        Arc::ptr_eq(&self.description, &other.description)
            && Arc::ptr_eq(&self.namespace, &other.namespace)
    }
}

/// Ordered, append-only list of layers, oldest ancestor first.
///
/// Entries are shared with the base types they were inherited from; a
/// history is never modified in place, only [extended](Self::extended) into
/// a new one.
#[derive(Clone, Debug, Default)]
pub struct DescriptionHistory {
    entries: Vec<HistoryEntry>,
}

impl DescriptionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this history with `entry` appended.
    #[must_use]
    pub fn extended(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(entry);
        DescriptionHistory { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// The most derived layer.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a DescriptionHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
