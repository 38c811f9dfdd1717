//! Resolves a scope selector into the candidate entries of one search pass.

use super::{Listing, Scope, SearchError};

/// Stateless resolver; methods are associated functions.
pub struct ScopeResolver;

impl ScopeResolver {
    /// Snapshots the candidate entry indices for `scope`, in listing order.
    ///
    /// `Scope::All` unfolds every folder first so that entries hidden under
    /// collapsed folders are considered; if the listing cannot unfold, the
    /// pass fails with [`SearchError::ScopeUnavailable`] before any
    /// selection mutation. `Scope::Selected` is snapshotted here so the
    /// combiner's in-place selection changes cannot alter the iteration
    /// set mid-pass.
    pub fn candidate_entries(
        listing: &mut dyn Listing,
        scope: Scope,
    ) -> Result<Vec<usize>, SearchError> {
        match scope {
            Scope::All => {
                listing.unfold_all().map_err(SearchError::ScopeUnavailable)?;
                Ok((0..listing.len()).collect())
            }
            Scope::Visible => Ok((0..listing.len())
                .filter(|&i| listing.entry(i).is_visible)
                .collect()),
            Scope::Selected => Ok((0..listing.len())
                .filter(|&i| listing.entry(i).is_selected)
                .collect()),
        }
    }
}
