//! Applies per-candidate match results to the listing's selection state.
//!
//! This is the only place a search pass mutates the listing, cleanly
//! separated from the pure matcher so that validation failures can never
//! leave a half-applied selection behind.

use tracing::debug;

use super::{CombinationMode, Listing, SearchResult};

/// Stateless combiner; methods are associated functions.
pub struct SelectionCombiner;

impl SelectionCombiner {
    /// Merges `matches` (one bool per candidate index) into the listing's
    /// selection according to `mode`.
    ///
    /// Entries outside the candidate set are only ever touched by
    /// `Replace`, which clears the whole selection before selecting the
    /// matches. Panics if `candidates` and `matches` differ in length; a
    /// silent `zip` truncation would under-report `considered_count`.
    pub fn apply(
        listing: &mut dyn Listing,
        candidates: &[usize],
        matches: &[bool],
        mode: CombinationMode,
    ) -> SearchResult {
        assert_eq!(
            candidates.len(),
            matches.len(),
            "one match result per candidate"
        );

        match mode {
            CombinationMode::Replace => {
                listing.clear_selection();
                for (&index, &matched) in candidates.iter().zip(matches) {
                    if matched {
                        listing.set_selected(index, true);
                    }
                }
            }
            CombinationMode::Add => {
                for (&index, &matched) in candidates.iter().zip(matches) {
                    if matched {
                        listing.set_selected(index, true);
                    }
                }
            }
            CombinationMode::DeselectUnmatched => {
                for (&index, &matched) in candidates.iter().zip(matches) {
                    if !matched {
                        listing.set_selected(index, false);
                    }
                }
            }
        }

        let result = SearchResult {
            matched_count: matches.iter().filter(|&&m| m).count(),
            considered_count: candidates.len(),
        };
        debug!(
            mode = ?mode,
            matched = result.matched_count,
            considered = result.considered_count,
            "applied selection combination"
        );
        result
    }
}
