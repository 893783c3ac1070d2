/*!
 * Content statistics extraction for draft captions.
 *
 * Statistics are derived from the raw text with three independent pattern
 * scans; overlapping matches are not de-duplicated beyond what the regex
 * engine naturally returns. `\w` is Unicode-aware, so Cyrillic hashtags
 * and mentions are counted.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regex for hashtag tokens
static HASHTAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\w+").expect("Invalid hashtag regex"));

/// Regex for mention tokens
static MENTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@\w+").expect("Invalid mention regex"));

/// Regex for http/https links
static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://\S+").expect("Invalid link regex"));

/// Statistics counted from a caption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    /// Characters (Unicode scalar values)
    pub char_count: usize,
    /// `#tag` tokens
    pub hashtag_count: usize,
    /// `@name` tokens
    pub mention_count: usize,
    /// http/https links
    pub link_count: usize,
}

impl ContentStats {
    /// Count characters, hashtags, mentions and links in the given text
    pub fn extract(text: &str) -> Self {
        Self {
            char_count: text.chars().count(),
            hashtag_count: HASHTAG_REGEX.find_iter(text).count(),
            mention_count: MENTION_REGEX.find_iter(text).count(),
            link_count: LINK_REGEX.find_iter(text).count(),
        }
    }
}

/// All hashtag tokens in the text, including the leading `#`
pub fn hashtag_tokens(text: &str) -> Vec<&str> {
    HASHTAG_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}
