//! The listing boundary the engine searches and mutates.
//!
//! The engine only ever talks to the [`Listing`] trait, so callers can back
//! it with a real archive view or a test double. [`ArchiveListing`] is the
//! in-memory implementation used by this crate and its tests.

use std::collections::HashSet;
use std::io;

use super::Entry;

/// The ordered, mutable collection of archive entries a search pass runs
/// against.
///
/// Indices are stable for the duration of one search pass; the engine
/// assumes exclusive access for one resolve+match+apply cycle.
pub trait Listing {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, index: usize) -> &Entry;

    /// Unfolds every folder so that all entries become visible.
    ///
    /// May fail when folder contents are materialized lazily and the
    /// backing archive cannot be read.
    fn unfold_all(&mut self) -> io::Result<()>;

    fn set_selected(&mut self, index: usize, selected: bool);

    fn clear_selection(&mut self) {
        for index in 0..self.len() {
            self.set_selected(index, false);
        }
    }
}

/// In-memory listing over a flat, ordered entry vector.
///
/// Maintains the visibility invariant: an entry is visible iff no ancestor
/// folder on its path is folded. Folding a folder hides its descendants but
/// not the folder entry itself.
#[derive(Debug, Clone, Default)]
pub struct ArchiveListing {
    entries: Vec<Entry>,
}

impl ArchiveListing {
    /// Builds a listing and establishes the visibility invariant from the
    /// entries' fold flags.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut listing = Self { entries };
        listing.recompute_visibility();
        listing
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Folds or unfolds the folder at `index` and updates descendant
    /// visibility. Ignored for non-folder entries.
    pub fn set_folded(&mut self, index: usize, folded: bool) {
        if self.entries[index].is_folder {
            self.entries[index].is_folded = folded;
            self.recompute_visibility();
        }
    }

    /// Paths of all currently selected entries, in listing order.
    pub fn selected_paths(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.is_selected)
            .map(|e| e.path.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_selected).count()
    }

    fn recompute_visibility(&mut self) {
        let folded_folders: HashSet<&str> = self
            .entries
            .iter()
            .filter(|e| e.is_folder && e.is_folded)
            .map(|e| e.path.as_str())
            .collect();

        let visibility: Vec<bool> = self
            .entries
            .iter()
            .map(|entry| {
                !ancestors(&entry.path).any(|ancestor| folded_folders.contains(ancestor))
            })
            .collect();

        for (entry, visible) in self.entries.iter_mut().zip(visibility) {
            entry.is_visible = visible;
        }
    }
}

/// Iterates the strict ancestor paths of a slash-separated path, nearest
/// first: `"a/b/c.txt"` yields `"a/b"`, then `"a"`.
fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(path.rfind('/').map(|i| &path[..i]), |current| {
        current.rfind('/').map(|i| &current[..i])
    })
}

impl Listing for ArchiveListing {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entry(&self, index: usize) -> &Entry {
        &self.entries[index]
    }

    fn unfold_all(&mut self) -> io::Result<()> {
        for entry in &mut self.entries {
            entry.is_folded = false;
        }
        self.recompute_visibility();
        Ok(())
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        self.entries[index].is_selected = selected;
    }
}
