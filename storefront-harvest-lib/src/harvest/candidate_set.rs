use super::ItemId;
use std::collections::HashSet;

/// A deduplicated, discovery-ordered set of item identifiers.
///
/// The discovery order lives in a plain sequence while membership is answered by a
/// separate hash set, so "was this seen" is O(1) and "in what order" is a linear walk.
/// Inserting an identifier that is already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    order: Vec<ItemId>,
    seen: HashSet<ItemId>,
}

impl CandidateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identifier, returning `true` if it was not already present.
    pub fn insert(&mut self, id: ItemId) -> bool {
        if self.seen.contains(&id) {
            return false;
        }

        let _ = self.seen.insert(id.clone());
        self.order.push(id);
        true
    }

    /// Adds every identifier from `ids`, returning how many were new.
    pub fn extend(&mut self, ids: impl IntoIterator<Item = ItemId>) -> usize {
        ids.into_iter().filter(|id| self.insert(id.clone())).count()
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.seen.contains(id)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keeps only the first `cap` identifiers by discovery order.
    pub fn truncate(&mut self, cap: usize) {
        if self.order.len() <= cap {
            return;
        }

        for dropped in self.order.drain(cap..) {
            let _ = self.seen.remove(&dropped);
        }
    }

    /// Iterates identifiers in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.order.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ItemId> {
        self.order
    }
}

impl IntoIterator for CandidateSet {
    type Item = ItemId;
    type IntoIter = std::vec::IntoIter<ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl FromIterator<ItemId> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        let mut set = Self::new();
        let _ = set.extend(iter);
        set
    }
}
