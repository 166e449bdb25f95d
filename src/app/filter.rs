//! Search-term filtering of item lists.
//!
//! Filtering is a pure function of the items, the search term and a
//! [`MatchMode`]. Matching is case-insensitive and always literal: every piece
//! of the term is escaped before it is compiled, so terms such as `"(a"` or
//! `"c++"` match their own text instead of failing to compile.
//!
//! # Match Modes
//!
//! - [`MatchMode::Partial`]: the trimmed term is split on whitespace, `-` and
//!   `:` into tokens; an item matches if its display value contains **any**
//!   token. `"a-b"` matches both `"Apple"` and `"Banana"`.
//! - [`MatchMode::Full`]: the trimmed term must appear verbatim in the display
//!   value. `"App"` matches `"Apple"` but not `"Banana"`.
//!
//! An empty term, or one made only of delimiters (`"- :"`), applies no filter.

use crate::domain::Item;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strategy for matching the search term against display values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Match any delimiter-separated token of the term.
    #[default]
    Partial,
    /// Match the whole trimmed term as one literal substring.
    Full,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "partial" => Ok(Self::Partial),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown match mode '{other}', expected 'partial' or 'full'")),
        }
    }
}

/// Compiled form of a search term.
///
/// Produced by [`build_pattern`]. `Literal` is the fallback for the rare case
/// where the escaped pattern exceeds the regex engine's size limits; it holds
/// the lowercased needles and matches them as plain substrings.
#[derive(Debug, Clone)]
pub enum SearchPattern {
    Regex(Regex),
    Literal(Vec<String>),
}

impl SearchPattern {
    /// Returns `true` if `text` contains a match.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Regex(regex) => regex.is_match(text),
            Self::Literal(needles) => {
                let haystack = text.to_lowercase();
                needles.iter().any(|needle| haystack.contains(needle.as_str()))
            }
        }
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == ':'
}

/// Splits a term into its literal needles for the given mode.
///
/// Returns an empty list when the term applies no filter.
fn needles(term: &str, mode: MatchMode) -> Vec<&str> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return vec![];
    }

    match mode {
        MatchMode::Full => vec![trimmed],
        MatchMode::Partial => trimmed
            .split(is_delimiter)
            .filter(|token| !token.is_empty())
            .collect(),
    }
}

/// Compiles a search term into a case-insensitive pattern.
///
/// Returns `None` when the term filters nothing (empty, whitespace, or only
/// delimiters in partial mode).
///
/// # Examples
///
/// ```
/// use multiselect::app::filter::{build_pattern, MatchMode};
///
/// let pattern = build_pattern("ban: app", MatchMode::Partial).unwrap();
/// assert!(pattern.is_match("Banana"));
/// assert!(pattern.is_match("Pineapple"));
/// assert!(!pattern.is_match("Cherry"));
///
/// assert!(build_pattern(" - : ", MatchMode::Partial).is_none());
/// ```
#[must_use]
pub fn build_pattern(term: &str, mode: MatchMode) -> Option<SearchPattern> {
    let needles = needles(term, mode);
    if needles.is_empty() {
        return None;
    }

    let source = needles
        .iter()
        .map(|needle| regex::escape(needle))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&source).case_insensitive(true).build() {
        Ok(regex) => Some(SearchPattern::Regex(regex)),
        Err(e) => {
            tracing::error!(error = %e, pattern_len = source.len(), "escaped search pattern rejected, matching literally");
            Some(SearchPattern::Literal(
                needles.iter().map(|needle| needle.to_lowercase()).collect(),
            ))
        }
    }
}

/// Filters items by search term, preserving input order.
///
/// Items without a display value never match a non-empty term. With an
/// empty term every item is returned.
///
/// # Parameters
///
/// * `items` - Items to filter, in render order
/// * `term` - Raw search term as typed
/// * `mode` - Tokenization strategy
///
/// # Examples
///
/// ```
/// use multiselect::app::filter::{filter_items, MatchMode};
/// use multiselect::domain::Item;
///
/// let items = vec![Item::new(1, "Apple"), Item::new(2, "Banana")];
///
/// let matched = filter_items(&items, "APP", MatchMode::Full);
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].label(), "Apple");
/// ```
#[must_use]
pub fn filter_items<'a, K>(items: &'a [Item<K>], term: &str, mode: MatchMode) -> Vec<&'a Item<K>> {
    let _span = tracing::trace_span!("filter_items", total = items.len(), ?mode).entered();

    let Some(pattern) = build_pattern(term, mode) else {
        return items.iter().collect();
    };

    let filtered: Vec<&Item<K>> = items
        .iter()
        .filter(|item| {
            item.display_value
                .as_deref()
                .is_some_and(|text| pattern.is_match(text))
        })
        .collect();

    tracing::trace!(matched = filtered.len(), "items filtered");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<Item<u32>> {
        vec![
            Item::new(1, "Apple"),
            Item::new(2, "Banana"),
            Item::new(3, "Cherry (sour)"),
            Item::new(4, "Dragon-fruit"),
        ]
    }

    fn labels<'a>(items: &[&'a Item<u32>]) -> Vec<&'a str> {
        items.iter().map(|item| item.label()).collect()
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let items = fruit();
        for mode in [MatchMode::Partial, MatchMode::Full] {
            let filtered = filter_items(&items, "", mode);
            assert_eq!(labels(&filtered), vec!["Apple", "Banana", "Cherry (sour)", "Dragon-fruit"]);
            assert_eq!(filter_items(&items, "   ", mode).len(), 4);
        }
    }

    #[test]
    fn partial_matches_any_token() {
        let items = fruit();
        let filtered = filter_items(&items, "a-b", MatchMode::Partial);
        assert_eq!(labels(&filtered), vec!["Apple", "Banana", "Dragon-fruit"]);
    }

    #[test]
    fn partial_splits_on_colon_and_whitespace() {
        let items = fruit();
        let filtered = filter_items(&items, "cher:  drag", MatchMode::Partial);
        assert_eq!(labels(&filtered), vec!["Cherry (sour)", "Dragon-fruit"]);
    }

    #[test]
    fn delimiter_only_term_applies_no_filter() {
        let items = fruit();
        assert_eq!(filter_items(&items, "- :", MatchMode::Partial).len(), 4);
        assert_eq!(filter_items(&items, "--", MatchMode::Partial).len(), 4);
    }

    #[test]
    fn full_mode_keeps_delimiters() {
        let items = fruit();
        let filtered = filter_items(&items, "n-f", MatchMode::Full);
        assert_eq!(labels(&filtered), vec!["Dragon-fruit"]);

        assert!(filter_items(&items, "- :", MatchMode::Full).is_empty());
    }

    #[test]
    fn full_mode_matches_substring() {
        let items = fruit();
        let filtered = filter_items(&items, "App", MatchMode::Full);
        assert_eq!(labels(&filtered), vec!["Apple"]);
    }

    #[test]
    fn matching_ignores_case() {
        let items = fruit();
        for mode in [MatchMode::Partial, MatchMode::Full] {
            assert_eq!(
                labels(&filter_items(&items, "BANANA", mode)),
                labels(&filter_items(&items, "banana", mode)),
            );
        }
    }

    #[test]
    fn regex_syntax_is_literal() {
        let items = fruit();
        assert_eq!(labels(&filter_items(&items, "(sour", MatchMode::Full)), vec!["Cherry (sour)"]);
        assert_eq!(labels(&filter_items(&items, "(sour)", MatchMode::Partial)), vec!["Cherry (sour)"]);
        assert!(filter_items(&items, ".*", MatchMode::Full).is_empty());
        assert!(filter_items(&items, "[", MatchMode::Partial).is_empty());
    }

    #[test]
    fn missing_display_value_never_matches() {
        let items = vec![
            Item {
                key: Some(1),
                display_value: None,
                disabled: false,
            },
            Item::new(2, "Apple"),
        ];
        assert_eq!(filter_items(&items, "a", MatchMode::Partial).len(), 1);
        assert_eq!(filter_items(&items, "", MatchMode::Partial).len(), 2);
    }

    #[test]
    fn literal_fallback_matches_case_insensitively() {
        let pattern = SearchPattern::Literal(vec!["app".to_string()]);
        assert!(pattern.is_match("Pineapple"));
        assert!(!pattern.is_match("Banana"));
    }

    #[test]
    fn match_mode_parses_names() {
        assert_eq!("Full".parse::<MatchMode>(), Ok(MatchMode::Full));
        assert_eq!(" partial ".parse::<MatchMode>(), Ok(MatchMode::Partial));
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }
}
