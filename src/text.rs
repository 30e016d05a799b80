//! Character-indexed text helpers
//!
//! "Character" means an extended grapheme cluster throughout this module, so
//! `"e\u{301}"` (e + combining acute) counts as one character and emoji
//! sequences are never split.
//!
//! Range slicing is lenient on purpose: a start at or past the end gives an
//! empty string and an end past the end is clamped. Only [`TextExt::char_at`]
//! reports out-of-range indices as an error.
//!
//! # Example
//!
//! ```
//! use toolbelt::text::TextExt;
//!
//! assert_eq!("hello".slice(1..3), "el");
//! assert_eq!("hello".slice(10..12), "");
//! assert_eq!("hello".slice(1..100), "ello");
//! assert_eq!("hello world".truncated(5, true), "hello...");
//! ```

use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use unicode_segmentation::UnicodeSegmentation;

const PLACEHOLDER_OPEN: &str = "{$";
const PLACEHOLDER_CLOSE: char = '}';
const ELLIPSIS: &str = "...";

/// A range of character offsets, resolved leniently against a text length.
pub trait CharRange {
    /// Start and end offsets with `start <= end <= len`.
    fn resolve(&self, len: usize) -> (usize, usize);
}

fn lenient(start: usize, end: usize, len: usize) -> (usize, usize) {
    let end = end.min(len);
    if start >= end {
        (end, end)
    } else {
        (start, end)
    }
}

impl CharRange for Range<usize> {
    fn resolve(&self, len: usize) -> (usize, usize) {
        lenient(self.start, self.end, len)
    }
}

impl CharRange for RangeInclusive<usize> {
    fn resolve(&self, len: usize) -> (usize, usize) {
        lenient(*self.start(), self.end().saturating_add(1), len)
    }
}

impl CharRange for RangeFrom<usize> {
    fn resolve(&self, len: usize) -> (usize, usize) {
        lenient(self.start, len, len)
    }
}

impl CharRange for RangeTo<usize> {
    fn resolve(&self, len: usize) -> (usize, usize) {
        lenient(0, self.end, len)
    }
}

impl CharRange for RangeToInclusive<usize> {
    fn resolve(&self, len: usize) -> (usize, usize) {
        lenient(0, self.end.saturating_add(1), len)
    }
}

impl CharRange for RangeFull {
    fn resolve(&self, len: usize) -> (usize, usize) {
        (0, len)
    }
}

/// Placeholder values for [`substitute_variables`].
pub trait Variables {
    fn lookup(&self, name: &str) -> Option<String>;
}

impl<V: Display, S: BuildHasher> Variables for HashMap<String, V, S> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

impl<V: Display> Variables for BTreeMap<String, V> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

impl<V: Display> Variables for [(&str, V)] {
    fn lookup(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

/// Byte offset of character `index`, or `text.len()` past the end.
fn byte_offset(text: &str, index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Replaces every `{$name}` token with its value from `variables`.
///
/// Missing names become empty strings. A `{$` with no closing `}` is kept as
/// written. Templates without any `{$` are returned untouched.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use toolbelt::text::substitute_variables;
///
/// let vars = HashMap::from([("x".to_string(), 42)]);
/// assert_eq!(substitute_variables("{$x}", &vars), "42");
/// assert_eq!(substitute_variables("{$missing}", &vars), "");
/// assert_eq!(substitute_variables("no vars here", &vars), "no vars here");
/// ```
pub fn substitute_variables<V: Variables + ?Sized>(template: &str, variables: &V) -> String {
    if !template.contains(PLACEHOLDER_OPEN) {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find(PLACEHOLDER_OPEN) {
        let after_open = &rest[open + PLACEHOLDER_OPEN.len()..];
        let Some(close) = after_open.find(PLACEHOLDER_CLOSE) else {
            break;
        };
        let name = &after_open[..close];
        out.push_str(&rest[..open]);
        match variables.lookup(name) {
            Some(value) => out.push_str(&value),
            None => tracing::debug!("No value for placeholder '{name}', substituting empty"),
        }
        rest = &after_open[close + PLACEHOLDER_CLOSE.len_utf8()..];
    }
    out.push_str(rest);
    out
}

/// URL-safe slug: ASCII transliteration, lowercase, hyphen-joined.
///
/// Returns `None` when a character has no transliteration or nothing
/// alphanumeric is left.
///
/// # Examples
///
/// ```
/// use toolbelt::text::slugify;
///
/// assert_eq!(slugify("Crème Brûlée recipe!").as_deref(), Some("creme-brulee-recipe"));
/// assert_eq!(slugify("?!"), None);
/// ```
pub fn slugify(text: &str) -> Option<String> {
    let mut ascii = String::with_capacity(text.len());
    for c in text.chars() {
        let Some(latin) = deunicode::deunicode_char(c) else {
            tracing::debug!("No transliteration for {c:?}, cannot slugify");
            return None;
        };
        ascii.push_str(latin);
    }
    let ascii = ascii.to_lowercase();

    let slug = ascii
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() { None } else { Some(slug) }
}

/// Character-indexed helpers on `str`.
pub trait TextExt {
    /// Number of characters (grapheme clusters).
    fn grapheme_len(&self) -> usize;

    /// The character at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= grapheme_len()`.
    fn char_at(&self, index: usize) -> Result<&str>;

    /// Lenient substring by character offsets; see the module docs.
    fn slice<R: CharRange>(&self, range: R) -> &str;

    /// Removes `prefix` once if present.
    fn deleting_prefix(&self, prefix: &str) -> &str;

    /// Removes `suffix` once if present.
    fn deleting_suffix(&self, suffix: &str) -> &str;

    /// Prepends `prefix` unless already present.
    fn with_prefix(&self, prefix: &str) -> String;

    /// Appends `suffix` unless already present.
    fn with_suffix(&self, suffix: &str) -> String;

    /// First `length` characters, plus `"..."` if anything was cut and
    /// `add_ellipsis` is set. The ellipsis does not count toward `length`.
    fn truncated(&self, length: usize, add_ellipsis: bool) -> String;

    /// Replaces up to `max_count` non-overlapping occurrences, left to right.
    fn replace_bounded(&self, search: &str, replacement: &str, max_count: usize) -> String;

    fn capitalize_first(&self) -> String;

    /// True for empty or whitespace-only text.
    fn is_blank(&self) -> bool;
}

impl TextExt for str {
    fn grapheme_len(&self) -> usize {
        self.graphemes(true).count()
    }

    fn char_at(&self, index: usize) -> Result<&str> {
        self.graphemes(true).nth(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            len: self.grapheme_len(),
        })
    }

    fn slice<R: CharRange>(&self, range: R) -> &str {
        let (start, end) = range.resolve(self.grapheme_len());
        if start == end {
            return "";
        }
        &self[byte_offset(self, start)..byte_offset(self, end)]
    }

    fn deleting_prefix(&self, prefix: &str) -> &str {
        self.strip_prefix(prefix).unwrap_or(self)
    }

    fn deleting_suffix(&self, suffix: &str) -> &str {
        self.strip_suffix(suffix).unwrap_or(self)
    }

    fn with_prefix(&self, prefix: &str) -> String {
        if self.starts_with(prefix) {
            self.to_string()
        } else {
            format!("{prefix}{self}")
        }
    }

    fn with_suffix(&self, suffix: &str) -> String {
        if self.ends_with(suffix) {
            self.to_string()
        } else {
            format!("{self}{suffix}")
        }
    }

    fn truncated(&self, length: usize, add_ellipsis: bool) -> String {
        let end = byte_offset(self, length);
        if end == self.len() {
            return self.to_string();
        }
        let head = &self[..end];
        if add_ellipsis {
            format!("{head}{ELLIPSIS}")
        } else {
            head.to_string()
        }
    }

    fn replace_bounded(&self, search: &str, replacement: &str, max_count: usize) -> String {
        if search.is_empty() {
            return self.to_string();
        }
        self.replacen(search, replacement, max_count)
    }

    fn capitalize_first(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_at_ascii() {
        assert_eq!("hello".char_at(0).unwrap(), "h");
        assert_eq!("hello".char_at(4).unwrap(), "o");
    }

    #[test]
    fn test_char_at_out_of_range() {
        let err = "hello".char_at(5).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 5, len: 5 }));
        assert!("".char_at(0).is_err());
    }

    #[test]
    fn test_char_at_grapheme_clusters() {
        let text = "ae\u{301}🇫🇮z";
        assert_eq!(text.grapheme_len(), 4);
        assert_eq!(text.char_at(1).unwrap(), "e\u{301}");
        assert_eq!(text.char_at(2).unwrap(), "🇫🇮");
        assert_eq!(text.char_at(3).unwrap(), "z");
    }

    #[test]
    fn test_slice_half_open() {
        assert_eq!("hello".slice(1..3), "el");
        assert_eq!("hello".slice(0..5), "hello");
        assert_eq!("hello".slice(2..2), "");
    }

    #[test]
    fn test_slice_lenient_bounds() {
        assert_eq!("hello".slice(10..12), "");
        assert_eq!("hello".slice(1..100), "ello");
        assert_eq!("hello".slice(5..), "");
        assert_eq!("hello".slice(4..1), "");
    }

    #[test]
    fn test_slice_range_kinds() {
        assert_eq!("hello".slice(1..=3), "ell");
        assert_eq!("hello".slice(2..), "llo");
        assert_eq!("hello".slice(..2), "he");
        assert_eq!("hello".slice(..=2), "hel");
        assert_eq!("hello".slice(..), "hello");
        assert_eq!("hello".slice(3..=usize::MAX), "lo");
    }

    #[test]
    fn test_slice_multibyte() {
        assert_eq!("naïve café".slice(2..5), "ïve");
        assert_eq!("👍🏽ok".slice(0..1), "👍🏽");
    }

    #[test]
    fn test_deleting_affixes() {
        assert_eq!("prefix-body".deleting_prefix("prefix-"), "body");
        assert_eq!("body".deleting_prefix("prefix-"), "body");
        assert_eq!("aaa".deleting_prefix("a"), "aa");
        assert_eq!("file.txt.txt".deleting_suffix(".txt"), "file.txt");
        assert_eq!("file".deleting_suffix(".txt"), "file");
    }

    #[test]
    fn test_with_affixes_idempotent() {
        assert_eq!("example.com".with_prefix("https://"), "https://example.com");
        assert_eq!(
            "https://example.com".with_prefix("https://"),
            "https://example.com"
        );
        assert_eq!("path".with_suffix("/"), "path/");
        assert_eq!("path/".with_suffix("/"), "path/");
    }

    #[test]
    fn test_truncate() {
        assert_eq!("hello world".truncated(5, true), "hello...");
        assert_eq!("hello world".truncated(5, false), "hello");
        assert_eq!("hi".truncated(5, false), "hi");
        assert_eq!("hello".truncated(5, true), "hello");
        assert_eq!("héllo wörld".truncated(7, true), "héllo w...");
        assert_eq!("abc".truncated(0, true), "...");
        assert_eq!(String::from("hello world").truncated(5, true), "hello...");
    }

    #[test]
    fn test_replace_bounded() {
        assert_eq!("a-b-c-d".replace_bounded("-", "+", 2), "a+b+c-d");
        assert_eq!("a-b".replace_bounded("-", "+", 10), "a+b");
        assert_eq!("aaaa".replace_bounded("aa", "b", 5), "bb");
        assert_eq!("abc".replace_bounded("x", "y", 3), "abc");
        assert_eq!("abc".replace_bounded("", "y", 3), "abc");
        assert_eq!("abc".replace_bounded("b", "y", 0), "abc");
    }

    #[test]
    fn test_replace_bounded_does_not_rescan_replacement() {
        assert_eq!("a".replace_bounded("a", "aa", 3), "aa");
    }

    #[test]
    fn test_substitute_variables_examples() {
        let vars = HashMap::from([("x".to_string(), "42")]);
        assert_eq!(substitute_variables("{$x}", &vars), "42");
        assert_eq!(
            substitute_variables("{$missing}", &HashMap::<String, i32>::new()),
            ""
        );
        assert_eq!(
            substitute_variables("no vars here", &HashMap::<String, i32>::new()),
            "no vars here"
        );
    }

    #[test]
    fn test_substitute_variables_repeated_and_mixed() {
        let vars = BTreeMap::from([
            ("name".to_string(), "Ada".to_string()),
            ("n".to_string(), "3".to_string()),
        ]);
        assert_eq!(
            substitute_variables("Hi {$name}, {$name} has {$n} new {$what}.", &vars),
            "Hi Ada, Ada has 3 new ."
        );
    }

    #[test]
    fn test_substitute_variables_display_values() {
        let vars = [("count", 7.5)];
        assert_eq!(substitute_variables("total={$count}", &vars[..]), "total=7.5");
    }

    #[test]
    fn test_substitute_variables_unterminated_and_braces() {
        let vars = [("a", 1)];
        assert_eq!(substitute_variables("x {$a", &vars[..]), "x {$a");
        assert_eq!(substitute_variables("{a} {$a}", &vars[..]), "{a} 1");
        assert_eq!(substitute_variables("{$}", &vars[..]), "");
        assert_eq!(substitute_variables("{$a}}", &vars[..]), "1}");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!").as_deref(), Some("hello-world"));
        assert_eq!(slugify("  multiple   spaces ").as_deref(), Some("multiple-spaces"));
        assert_eq!(slugify("keep-hyphens_here").as_deref(), Some("keep-hyphens-here"));
        assert_eq!(slugify("Ærøskøbing").as_deref(), Some("aeroskobing"));
        assert_eq!(slugify(""), None);
        assert_eq!(slugify("!!!"), None);
    }

    #[test]
    fn test_capitalize_and_blank() {
        assert_eq!("hello".capitalize_first(), "Hello");
        assert_eq!("élan".capitalize_first(), "Élan");
        assert_eq!("".capitalize_first(), "");
        assert!(" \t\n".is_blank());
        assert!(!" x ".is_blank());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_slice_never_panics(text in "\\PC{0,20}", start in 0usize..30, end in 0usize..30) {
            let sliced = text.slice(start..end);
            prop_assert!(sliced.grapheme_len() <= text.grapheme_len());
            prop_assert!(text.contains(sliced));
        }

        #[test]
        fn test_truncate_length_bound(text in "\\PC{0,40}", length in 0usize..50) {
            let cut = text.truncated(length, false);
            prop_assert!(cut.grapheme_len() <= length);
            prop_assert!(text.starts_with(&cut));
        }

        #[test]
        fn test_with_prefix_idempotent(text in "[a-z]{0,10}", prefix in "[a-z]{0,4}") {
            let once = text.with_prefix(&prefix);
            prop_assert!(once.starts_with(&prefix));
            prop_assert_eq!(once.with_prefix(&prefix), once.clone());
        }

        #[test]
        fn test_slugify_output_charset(text in "\\PC{0,40}") {
            if let Some(slug) = slugify(&text) {
                prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
                prop_assert!(!slug.is_empty());
            }
        }

        #[test]
        fn test_template_without_marker_unchanged(text in "[^$]{0,40}") {
            let vars: HashMap<String, String> = HashMap::new();
            prop_assert_eq!(substitute_variables(&text, &vars), text);
        }
    }
}
