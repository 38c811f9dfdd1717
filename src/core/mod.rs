pub mod combine;
pub mod error;
pub mod listing;
pub mod matcher;
pub mod scope;
pub mod search;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One archive item as exposed by the listing.
///
/// `is_visible` is derived state: an entry is visible iff none of its
/// ancestor folders is folded. The listing maintains it; the engine only
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub name: String,
    /// Slash-separated path within the archive, e.g. `"src/core/mod.rs"`.
    pub path: String,
    pub size: u64,
    pub date: DateTime<Utc>,
    pub is_folder: bool,
    pub is_folded: bool,
    pub is_visible: bool,
    pub is_selected: bool,
}

/// How the expression is matched against the target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Literal prefix.
    StartsWith,
    /// Literal suffix.
    EndsWith,
    /// Literal substring anywhere.
    Contains,
    /// Shell-style wildcards (`*`, `?`), anchored to the whole field value.
    Glob,
    /// Regular expression, search-anywhere (unanchored).
    Regex,
}

/// Which entry attribute the expression is tested against.
///
/// A stable identifier resolved by the listing; presentation layers map
/// their column widgets onto this, not the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetField {
    Name,
    Path,
    /// Size rendered as decimal bytes, e.g. `"10240"`.
    Size,
    /// Date rendered as RFC 3339, e.g. `"2024-03-01T12:00:00+00:00"`.
    Date,
}

/// The subset of entries a search pass considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// Every entry; unfolds all folders first.
    All,
    /// Entries not hidden inside a folded folder.
    Visible,
    /// Entries selected at the moment the pass starts.
    Selected,
}

/// How per-entry match results merge into the persistent selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombinationMode {
    /// Clear the whole selection, then select the matches.
    Replace,
    /// Union: select the matches, leave everything else untouched.
    Add,
    /// Shrink: deselect candidates that did not match.
    DeselectUnmatched,
}

/// One immutable search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpec {
    pub expression: String,
    pub match_mode: MatchMode,
    pub target_field: TargetField,
    pub ignore_case: bool,
    /// Flips the per-entry result before it reaches the combiner.
    pub invert: bool,
    pub scope: Scope,
    pub combination_mode: CombinationMode,
}

/// Summary of one completed search pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub matched_count: usize,
    pub considered_count: usize,
}

pub use combine::SelectionCombiner;
pub use error::SearchError;
pub use listing::{ArchiveListing, Listing};
pub use matcher::CompiledMatcher;
pub use scope::ScopeResolver;
pub use search::run_search;
