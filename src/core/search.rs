//! The search pipeline: validate, resolve scope, match, combine.
//!
//! Ordering is strict validate-then-apply: pattern compilation and scope
//! resolution both complete before the first selection mutation, so a bad
//! expression or an unreadable archive can never leave the listing with a
//! partially applied selection.

use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    CompiledMatcher, Listing, ScopeResolver, SearchError, SearchResult, SearchSpec,
    SelectionCombiner,
};

/// Runs one synchronous search pass over `listing`.
///
/// Returns the match/considered counts; the listing's selection state is
/// updated in place according to `spec.combination_mode`. On any error the
/// selection is untouched.
pub fn run_search(
    listing: &mut dyn Listing,
    spec: &SearchSpec,
) -> Result<SearchResult, SearchError> {
    let matcher = CompiledMatcher::compile(spec)?;
    let candidates = ScopeResolver::candidate_entries(listing, spec.scope)?;
    debug!(
        scope = ?spec.scope,
        candidates = candidates.len(),
        "resolved search scope"
    );

    // Snapshot the field values so the match pass can run in parallel
    // without borrowing the listing across threads.
    let values: Vec<String> = candidates
        .iter()
        .map(|&index| matcher.field_value(listing.entry(index)))
        .collect();
    let matches: Vec<bool> = values
        .par_iter()
        .map(|value| matcher.is_match_value(value))
        .collect();

    let result = SelectionCombiner::apply(listing, &candidates, &matches, spec.combination_mode);
    info!(
        expression = %spec.expression,
        mode = ?spec.match_mode,
        matched = result.matched_count,
        considered = result.considered_count,
        "search pass complete"
    );
    Ok(result)
}
