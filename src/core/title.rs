//! Listing title generation
//!
//! A title is the image base name numbered with a full-width parenthesized
//! index, followed by a marketing suffix phrase. When the result exceeds the
//! title budget, whole suffix words are dropped from the end; the retained
//! suffix is always a prefix of the phrase's word list.

use super::text::{char_len, truncate_chars};
use once_cell::sync::Lazy;

/// Maximum title length accepted by the listing site, in characters
pub const MAX_TITLE_LENGTH: usize = 65;

/// Marketing phrase appended to every title
pub const TITLE_SUFFIX: &str =
    "美尻 巨乳 セクシー グラビア コスプレ 同人 アニメ イラスト ファンアート 高画質 A4 ポスター";

static DEFAULT_GENERATOR: Lazy<TitleGenerator> = Lazy::new(TitleGenerator::default);

/// Generates a title with the default budget and suffix phrase
///
/// # Examples
///
/// ```
/// use lotpack::core::title::{generate_title, TITLE_SUFFIX};
///
/// assert_eq!(generate_title("Cover", 0), format!("Cover（1） {TITLE_SUFFIX}"));
/// ```
pub fn generate_title(base_name: &str, index: usize) -> String {
    DEFAULT_GENERATOR.generate(base_name, index)
}

/// Title generator with a fixed budget and suffix phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleGenerator {
    max_length: usize,
    suffix_words: Vec<String>,
}

impl TitleGenerator {
    /// Creates a generator; the suffix is split on whitespace into words
    pub fn new(max_length: usize, suffix: &str) -> Self {
        Self {
            max_length,
            suffix_words: suffix.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Title budget in characters
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Suffix phrase words in order
    pub fn suffix_words(&self) -> &[String] {
        &self.suffix_words
    }

    /// Builds the title for the image at zero-based `index`
    ///
    /// Always returns at most `max_length` characters.
    pub fn generate(&self, base_name: &str, index: usize) -> String {
        let numbered = numbered_name(base_name, index);
        let kept = self.retained_word_count(&numbered);

        let title = if kept == 0 {
            numbered
        } else {
            format!("{} {}", numbered, self.suffix_words[..kept].join(" "))
        };

        // The numbered name alone can exceed the budget
        truncate_chars(&title, self.max_length).to_string()
    }

    /// Number of leading suffix words that fit after `numbered`
    fn retained_word_count(&self, numbered: &str) -> usize {
        let numbered_len = char_len(numbered);
        let mut kept = self.suffix_words.len();

        while kept > 0 && numbered_len + self.suffix_len(kept) > self.max_length {
            kept -= 1;
        }

        kept
    }

    /// Length of the separator space plus the first `count` words joined by spaces
    fn suffix_len(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let words: usize = self.suffix_words[..count].iter().map(|w| char_len(w)).sum();
        // leading space + spaces between words
        words + count
    }
}

impl Default for TitleGenerator {
    fn default() -> Self {
        Self::new(MAX_TITLE_LENGTH, TITLE_SUFFIX)
    }
}

fn numbered_name(base_name: &str, index: usize) -> String {
    format!("{}（{}）", base_name, index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const FOURTEEN_WORDS: &str =
        "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu nu xi";

    #[test]
    fn test_short_name_keeps_full_suffix() {
        assert_eq!(
            generate_title("Cover", 0),
            format!("Cover（1） {TITLE_SUFFIX}")
        );
        assert_eq!(char_len(&generate_title("Cover", 0)), 60);
    }

    #[test]
    fn test_index_is_one_based() {
        assert!(generate_title("Cover", 9).starts_with("Cover（10） "));
    }

    #[test]
    fn test_exact_budget_is_not_truncated() {
        // 10 + 3 + 1 + 51 = 65
        let title = generate_title("あいうえおかきくけこ", 0);
        assert_eq!(char_len(&title), 65);
        assert!(title.ends_with("ポスター"));
    }

    #[test]
    fn test_one_over_budget_drops_last_word() {
        let title = generate_title("あいうえおかきくけこさ", 0);
        assert_eq!(
            title,
            "あいうえおかきくけこさ（1） 美尻 巨乳 セクシー グラビア コスプレ 同人 アニメ イラスト ファンアート 高画質 A4"
        );
        assert_eq!(char_len(&title), 61);
    }

    #[test]
    fn test_fourteen_word_suffix_with_fifty_char_name() {
        let generator = TitleGenerator::new(65, FOURTEEN_WORDS);
        let base = "a".repeat(50);

        let title = generator.generate(&base, 0);

        // 53 chars of numbered name leave room for " alpha beta" only
        assert_eq!(title, format!("{base}（1） alpha beta"));
        assert_eq!(char_len(&title), 64);
    }

    #[test]
    fn test_all_words_dropped_leaves_numbered_name() {
        let generator = TitleGenerator::new(65, FOURTEEN_WORDS);
        let base = "b".repeat(60);

        let title = generator.generate(&base, 0);

        assert_eq!(title, format!("{base}（1）"));
        assert!(!title.ends_with(' '));
    }

    #[test]
    fn test_numbered_name_longer_than_budget_is_hard_truncated() {
        let base = "c".repeat(70);
        let title = generate_title(&base, 4);
        assert_eq!(char_len(&title), MAX_TITLE_LENGTH);
        assert_eq!(title, "c".repeat(65));
    }

    #[test]
    fn test_empty_suffix() {
        let generator = TitleGenerator::new(65, "");
        assert_eq!(generator.generate("Cover", 1), "Cover（2）");
    }

    #[test_case(0 ; "empty base")]
    #[test_case(5 ; "short base")]
    #[test_case(12 ; "base near the boundary")]
    #[test_case(40 ; "long base")]
    #[test_case(64 ; "base just under budget")]
    #[test_case(200 ; "base far over budget")]
    fn test_title_never_exceeds_budget(base_len: usize) {
        let base = "名".repeat(base_len);
        for index in [0, 8, 9, 98, 99, 12_345] {
            let title = generate_title(&base, index);
            assert!(char_len(&title) <= MAX_TITLE_LENGTH, "{title}");
        }
    }

    #[test]
    fn test_word_dropping_is_prefix_monotonic() {
        let generator = TitleGenerator::default();
        let words = generator.suffix_words().to_vec();
        let mut previous_kept = words.len();

        for base_len in 0..=60 {
            let base = "x".repeat(base_len);
            let numbered = numbered_name(&base, 0);
            let title = generator.generate(&base, 0);

            let kept: Vec<&str> = match title.strip_prefix(&format!("{numbered} ")) {
                Some(rest) => rest.split(' ').collect(),
                None => Vec::new(),
            };

            let expected: Vec<&str> = words[..kept.len()].iter().map(String::as_str).collect();
            assert_eq!(kept, expected, "suffix must be a prefix of the phrase");
            assert!(kept.len() <= previous_kept, "longer names never keep more words");
            previous_kept = kept.len();
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = TitleGenerator::default();
        let base = "同じ名前".repeat(6);
        assert_eq!(generator.generate(&base, 3), generator.generate(&base, 3));
    }
}
