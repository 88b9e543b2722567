//! Per-fetch library lookup.

use std::collections::HashMap;

use super::library::LibraryIdentity;
use super::location::LocationRecord;

/// Library → location mapping built from a single fetch.
///
/// Holds at most one record per library. There is no merging with earlier
/// fetches: each fetch produces a fresh index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryStatusIndex {
    records: HashMap<LibraryIdentity, LocationRecord>,
}

impl LibraryStatusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it displaced, if any.
    pub fn insert(
        &mut self,
        library: LibraryIdentity,
        record: LocationRecord,
    ) -> Option<LocationRecord> {
        self.records.insert(library, record)
    }

    pub fn get(&self, library: LibraryIdentity) -> Option<&LocationRecord> {
        self.records.get(&library)
    }

    pub fn contains(&self, library: LibraryIdentity) -> bool {
        self.records.contains_key(&library)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over present records in [`LibraryIdentity::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (LibraryIdentity, &LocationRecord)> {
        LibraryIdentity::ALL
            .into_iter()
            .filter_map(|lib| self.records.get(&lib).map(|record| (lib, record)))
    }
}
