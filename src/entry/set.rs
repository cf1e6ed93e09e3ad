// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::ZipEntry;

/// An ordered store of central directory entries.
///
/// Insertion order is preserved, and is the order in which entries are written.
#[derive(Debug, Clone)]
pub struct EntrySet<E = ZipEntry> {
    pub(crate) entries: Vec<E>,
}

impl<E> Default for EntrySet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EntrySet<E> {
    /// Constructs a new, empty set.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Appends an entry to the end of this set.
    pub fn push(&mut self, entry: E) {
        self.entries.push(entry);
    }

    /// Removes and returns the entry at the provided index, shifting all entries after it.
    ///
    /// Returns None if the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<E> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Retains only the entries for which the predicate returns true, preserving their order.
    pub fn retain(&mut self, predicate: impl FnMut(&E) -> bool) {
        self.entries.retain(predicate);
    }

    /// Returns the entry at the provided index.
    pub fn get(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    /// Returns the number of entries in this set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether or not this set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    /// Returns the entries as a slice, in insertion order.
    pub fn as_slice(&self) -> &[E] {
        &self.entries
    }
}

impl<E: Ord> EntrySet<E> {
    /// Returns references to the entries sorted by their total order, leaving this set untouched.
    pub fn sorted(&self) -> Vec<&E> {
        let mut sorted: Vec<&E> = self.entries.iter().collect();
        sorted.sort();
        sorted
    }
}

impl<E> FromIterator<E> for EntrySet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<E> Extend<E> for EntrySet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<E> IntoIterator for EntrySet<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a EntrySet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
