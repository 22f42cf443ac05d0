//! Free-text helpers: markup stripping and character-budget truncation
//!
//! Lengths are counted in Unicode scalar values, which is how the listing
//! site counts characters for titles and descriptions.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

static ENTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-zA-Z]{2,8});")
        .expect("entity pattern is valid")
});

/// Removes markup tags from free text and decodes character entities
///
/// Tags are removed before entities are decoded, so an escaped `&lt;b&gt;`
/// survives as literal text.
///
/// # Examples
///
/// ```
/// use lotpack::core::text::strip_markup;
///
/// assert_eq!(strip_markup("<b>Hi</b> &amp; bye"), "Hi & bye");
/// ```
pub fn strip_markup(input: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(input, "");
    ENTITY_PATTERN
        .replace_all(&without_tags, |caps: &Captures| {
            decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Decodes the body of an entity (`amp`, `#39`, `#x27`); unknown names
/// yield `None` so the original text is kept
fn decode_entity(body: &str) -> Option<String> {
    let decoded = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "yen" => '¥',
        "copy" => '©',
        "reg" => '®',
        _ => {
            let code = if let Some(hex) = body.strip_prefix("#x").or(body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)?
        }
    };
    Some(decoded.to_string())
}

/// Returns the first `max_chars` characters of `input`
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &input[..byte_idx],
        None => input,
    }
}

/// Number of characters in `input`
pub fn char_len(input: &str) -> usize {
    input.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup_removes_tags() {
        assert_eq!(strip_markup("<b>Hi</b>"), "Hi");
        assert_eq!(
            strip_markup("<p class=\"lead\">A4 <br/>ポスター</p>"),
            "A4 ポスター"
        );
    }

    #[test]
    fn test_strip_markup_multiline_tag() {
        assert_eq!(strip_markup("a<div\n  id=\"x\">b</div>"), "ab");
    }

    #[test]
    fn test_strip_markup_decodes_entities() {
        assert_eq!(strip_markup("&lt;b&gt; &amp; &quot;x&quot;"), "<b> & \"x\"");
        assert_eq!(strip_markup("&#39;&#x41;"), "'A");
    }

    #[test]
    fn test_strip_markup_keeps_unknown_entities() {
        assert_eq!(strip_markup("&bogus; &"), "&bogus; &");
    }

    #[test]
    fn test_strip_markup_plain_text_unchanged() {
        assert_eq!(strip_markup("高画質 A4"), "高画質 A4");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("美尻巨乳", 2), "美尻");
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        assert_eq!(char_len("（1）"), 3);
        assert_eq!(char_len("A4"), 2);
    }
}
