//! Defines the custom error type for the `core` module.

use thiserror::Error;

/// The primary error type for a search pass.
///
/// All three variants are detected during validation, before any entry is
/// tested and before any selection state is mutated (validate-then-apply).
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search expression is empty or consists only of whitespace.
    #[error("search expression is empty")]
    EmptyExpression,

    /// The expression is not a syntactically valid glob pattern.
    #[error("invalid glob pattern: {0}")]
    GlobPattern(#[from] globset::Error),

    /// The expression is not a syntactically valid regular expression.
    #[error("invalid regular expression: {0}")]
    RegexPattern(#[from] regex::Error),

    /// Resolving `Scope::All` requires unfolding every folder, and the
    /// listing failed to do so (e.g. deferred archive metadata could not
    /// be read).
    #[error("cannot unfold folders to resolve search scope: {0}")]
    ScopeUnavailable(#[source] std::io::Error),
}

impl SearchError {
    /// True for the pattern-compilation failures (bad glob or bad regex).
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, SearchError::GlobPattern(_) | SearchError::RegexPattern(_))
    }
}
