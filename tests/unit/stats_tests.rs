/*!
 * Tests for content statistics extraction
 */

use crosspost_rules::validation::ContentStats;

/// Test basic character counting
#[test]
fn test_extract_withAsciiText_shouldCountChars() {
    let stats = ContentStats::extract("Hello, world");

    assert_eq!(stats.char_count, 12);
}

/// Test that counting uses characters, not bytes
#[test]
fn test_extract_withCyrillicText_shouldCountCharsNotBytes() {
    // 12 characters, 21 bytes in UTF-8
    let stats = ContentStats::extract("Привет, мир!");

    assert_eq!(stats.char_count, 12);
}

/// Test the three token scans together
#[test]
fn test_extract_withMixedContent_shouldCountAllTokenKinds() {
    let text = "Big news! #launch #2024 ping @alice see https://example.com/post";
    let stats = ContentStats::extract(text);

    assert_eq!(stats.hashtag_count, 2);
    assert_eq!(stats.mention_count, 1);
    assert_eq!(stats.link_count, 1);
}

/// Test Unicode-aware token boundaries for the Russian locale
#[test]
fn test_extract_withCyrillicTokens_shouldCountThem() {
    let text = "#скидки сегодня у @магазин_москва";
    let stats = ContentStats::extract(text);

    assert_eq!(stats.hashtag_count, 1);
    assert_eq!(stats.mention_count, 1);
}

/// Test that the link scan matches both schemes case-insensitively
#[test]
fn test_extract_withLinks_shouldMatchHttpAndHttps() {
    let text = "http://a.example https://b.example HTTPS://c.example ftp://skip.me";
    let stats = ContentStats::extract(text);

    assert_eq!(stats.link_count, 3);
}

/// Test that bare sigils are not tokens
#[test]
fn test_extract_withBareSigils_shouldNotCount() {
    let stats = ContentStats::extract("# @ #! @?");

    assert_eq!(stats.hashtag_count, 0);
    assert_eq!(stats.mention_count, 0);
}

/// Test that scans are independent and not de-duplicated
#[test]
fn test_extract_withEmailAddress_shouldCountMentionToken() {
    // The mention scan has no lookbehind; an email's @domain matches it.
    // This mirrors the original scanning behavior.
    let stats = ContentStats::extract("contact me at team@example.com");

    assert_eq!(stats.mention_count, 1);
}
