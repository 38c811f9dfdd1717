//! Pattern compilation and the per-entry match predicate.

use globset::GlobBuilder;
use regex::RegexBuilder;

use super::{Entry, MatchMode, SearchError, SearchSpec, TargetField};

/// A search expression validated and compiled once, before any entry is
/// visited. Matching itself is a pure predicate with no side effects.
///
/// Case policy: the literal modes lower-case both the needle and the field
/// value; glob and regex use their engines' native case-insensitive compile
/// flags instead of folding the subject.
#[derive(Debug)]
pub struct CompiledMatcher {
    kind: MatcherKind,
    target_field: TargetField,
    ignore_case: bool,
    invert: bool,
}

#[derive(Debug)]
enum MatcherKind {
    StartsWith(String),
    EndsWith(String),
    Contains(String),
    Glob(globset::GlobMatcher),
    Regex(regex::Regex),
}

impl CompiledMatcher {
    /// Validates the expression and compiles it for the spec's match mode.
    ///
    /// Fails with [`SearchError::EmptyExpression`] for blank input and with
    /// a pattern error for malformed glob/regex syntax, in both cases
    /// before any entry is tested.
    pub fn compile(spec: &SearchSpec) -> Result<Self, SearchError> {
        if spec.expression.trim().is_empty() {
            return Err(SearchError::EmptyExpression);
        }

        let needle = if spec.ignore_case {
            spec.expression.to_lowercase()
        } else {
            spec.expression.clone()
        };

        let kind = match spec.match_mode {
            MatchMode::StartsWith => MatcherKind::StartsWith(needle),
            MatchMode::EndsWith => MatcherKind::EndsWith(needle),
            MatchMode::Contains => MatcherKind::Contains(needle),
            MatchMode::Glob => {
                let glob = GlobBuilder::new(&spec.expression)
                    .case_insensitive(spec.ignore_case)
                    .build()?;
                MatcherKind::Glob(glob.compile_matcher())
            }
            MatchMode::Regex => {
                let regex = RegexBuilder::new(&spec.expression)
                    .case_insensitive(spec.ignore_case)
                    .build()?;
                MatcherKind::Regex(regex)
            }
        };

        Ok(Self {
            kind,
            target_field: spec.target_field,
            ignore_case: spec.ignore_case,
            invert: spec.invert,
        })
    }

    /// Renders the target field of `entry` as the string the expression is
    /// tested against.
    pub fn field_value(&self, entry: &Entry) -> String {
        match self.target_field {
            TargetField::Name => entry.name.clone(),
            TargetField::Path => entry.path.clone(),
            TargetField::Size => entry.size.to_string(),
            TargetField::Date => entry.date.to_rfc3339(),
        }
    }

    /// Tests one entry. Pure; the invert flag is applied here, before the
    /// result reaches the combiner.
    pub fn is_match(&self, entry: &Entry) -> bool {
        self.is_match_value(&self.field_value(entry))
    }

    /// Tests an already-rendered field value.
    pub fn is_match_value(&self, value: &str) -> bool {
        let folded;
        let subject = match &self.kind {
            // Glob and regex carry case-insensitivity in the compiled
            // pattern; only the literal modes fold the subject.
            MatcherKind::Glob(_) | MatcherKind::Regex(_) => value,
            _ if self.ignore_case => {
                folded = value.to_lowercase();
                &folded
            }
            _ => value,
        };

        let matched = match &self.kind {
            MatcherKind::StartsWith(needle) => subject.starts_with(needle),
            MatcherKind::EndsWith(needle) => subject.ends_with(needle),
            MatcherKind::Contains(needle) => subject.contains(needle),
            // Globs are anchored: the pattern must cover the whole value.
            MatcherKind::Glob(glob) => glob.is_match(subject),
            // Regex is a search-anywhere match, not a full match.
            MatcherKind::Regex(regex) => regex.is_match(subject),
        };

        matched != self.invert
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CombinationMode, Scope};
    use chrono::TimeZone;
    use chrono::Utc;

    fn spec(expression: &str, match_mode: MatchMode) -> SearchSpec {
        SearchSpec {
            expression: expression.to_string(),
            match_mode,
            target_field: TargetField::Name,
            ignore_case: false,
            invert: false,
            scope: Scope::All,
            combination_mode: CombinationMode::Replace,
        }
    }

    fn named(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            path: name.to_string(),
            size: 2048,
            date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            is_folder: false,
            is_folded: false,
            is_visible: true,
            is_selected: false,
        }
    }

    #[test]
    fn starts_with_is_a_literal_prefix_test() {
        let matcher = CompiledMatcher::compile(&spec("read", MatchMode::StartsWith)).unwrap();
        assert!(matcher.is_match(&named("readme.txt")));
        assert!(!matcher.is_match(&named("unreadme.txt")));
    }

    #[test]
    fn ends_with_is_a_literal_suffix_test() {
        let matcher = CompiledMatcher::compile(&spec(".txt", MatchMode::EndsWith)).unwrap();
        assert!(matcher.is_match(&named("readme.txt")));
        assert!(!matcher.is_match(&named("readme.txt.bak")));
    }

    #[test]
    fn contains_finds_substrings_anywhere() {
        let matcher = CompiledMatcher::compile(&spec("adm", MatchMode::Contains)).unwrap();
        assert!(matcher.is_match(&named("readme.txt")));
        assert!(!matcher.is_match(&named("notes.txt")));
    }

    #[test]
    fn contains_ignore_case_folds_both_sides() {
        let mut s = spec("README", MatchMode::Contains);
        s.ignore_case = true;
        let matcher = CompiledMatcher::compile(&s).unwrap();
        assert!(matcher.is_match(&named("readme.txt")));
        assert!(matcher.is_match(&named("ReadMe.TXT")));
    }

    #[test]
    fn glob_is_anchored_at_both_ends() {
        let matcher = CompiledMatcher::compile(&spec("*.txt", MatchMode::Glob)).unwrap();
        assert!(matcher.is_match(&named("readme.txt")));
        assert!(!matcher.is_match(&named("readme.txt.bak")));
    }

    #[test]
    fn glob_question_mark_matches_exactly_one_character() {
        let matcher = CompiledMatcher::compile(&spec("file?.log", MatchMode::Glob)).unwrap();
        assert!(matcher.is_match(&named("file1.log")));
        assert!(!matcher.is_match(&named("file12.log")));
        assert!(!matcher.is_match(&named("file.log")));
    }

    #[test]
    fn glob_star_matches_an_empty_run() {
        let matcher = CompiledMatcher::compile(&spec("readme*", MatchMode::Glob)).unwrap();
        assert!(matcher.is_match(&named("readme")));
        assert!(matcher.is_match(&named("readme.txt")));
    }

    #[test]
    fn glob_case_insensitive_uses_the_compile_flag() {
        let mut s = spec("*.TXT", MatchMode::Glob);
        s.ignore_case = true;
        let matcher = CompiledMatcher::compile(&s).unwrap();
        assert!(matcher.is_match(&named("readme.txt")));
    }

    #[test]
    fn regex_searches_anywhere_instead_of_full_matching() {
        let matcher = CompiledMatcher::compile(&spec("ab", MatchMode::Regex)).unwrap();
        assert!(matcher.is_match(&named("xaby")));
    }

    #[test]
    fn regex_respects_its_own_anchors() {
        let matcher = CompiledMatcher::compile(&spec("^ab$", MatchMode::Regex)).unwrap();
        assert!(matcher.is_match(&named("ab")));
        assert!(!matcher.is_match(&named("xaby")));
    }

    #[test]
    fn invert_negates_the_result() {
        let mut s = spec("*.txt", MatchMode::Glob);
        s.invert = true;
        let matcher = CompiledMatcher::compile(&s).unwrap();
        assert!(!matcher.is_match(&named("readme.txt")));
        assert!(matcher.is_match(&named("readme.md")));
    }

    #[test]
    fn blank_expression_is_rejected() {
        for expression in ["", "   ", "\t"] {
            let err = CompiledMatcher::compile(&spec(expression, MatchMode::Contains)).unwrap_err();
            assert!(matches!(err, SearchError::EmptyExpression));
        }
    }

    #[test]
    fn invalid_regex_is_a_pattern_error() {
        let err = CompiledMatcher::compile(&spec("[", MatchMode::Regex)).unwrap_err();
        assert!(err.is_pattern_error());
    }

    #[test]
    fn invalid_glob_is_a_pattern_error() {
        let err = CompiledMatcher::compile(&spec("a[", MatchMode::Glob)).unwrap_err();
        assert!(err.is_pattern_error());
    }

    #[test]
    fn size_and_date_fields_match_their_string_renderings() {
        let entry = named("readme.txt");

        let mut s = spec("2048", MatchMode::Contains);
        s.target_field = TargetField::Size;
        assert!(CompiledMatcher::compile(&s).unwrap().is_match(&entry));

        let mut s = spec("2024-03-01", MatchMode::StartsWith);
        s.target_field = TargetField::Date;
        assert!(CompiledMatcher::compile(&s).unwrap().is_match(&entry));
    }
}
