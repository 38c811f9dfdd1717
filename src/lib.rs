//! Pattern-based search and selection engine for archive entry listings.
//!
//! Matches entries against an expression under one of several match modes
//! (prefix, suffix, substring, glob, regex), over a chosen scope (all,
//! visible, or selected entries), and merges the results into the listing's
//! selection state (replace, add, or deselect-unmatched).

// Declare all modules as public so they can be used by tests and consumers.
pub mod config;
pub mod core;
