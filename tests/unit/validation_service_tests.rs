/*!
 * Tests for the validation service
 *
 * Covers the per-platform compliance rules: length bounds and truncation,
 * the severity split between blocking errors and advisory warnings, the
 * permissive default for unknown platforms, and the recomputed statistics
 * invariant.
 */

use crosspost_rules::platforms::Platform;
use crosspost_rules::validation::{
    ContentStats, IssueSeverity, ValidationConfig, ValidationService,
};

use crate::common::{all_platform_ids, text_of_len};

/// Empty drafts are too short exactly on the platforms with a non-zero minimum
#[test]
fn test_validateForPlatform_withEmptyText_shouldErrorIffMinPositive() {
    let service = ValidationService::new();

    for id in all_platform_ids() {
        let limits = Platform::from_id(id).unwrap().limits();
        // One attachment so the media check stays out of the picture
        let result = service.validate_for_platform("", id, 1);

        let has_too_short = result
            .errors
            .iter()
            .any(|i| i.check == "caption" && i.message.contains("too short"));

        assert_eq!(
            has_too_short,
            limits.caption.min > 0,
            "platform {} min={}",
            id,
            limits.caption.min
        );
    }
}

/// A caption of exactly the maximum length warns but never errors
#[test]
fn test_validateForPlatform_atExactMax_shouldWarnOnly() {
    let service = ValidationService::new();

    for id in all_platform_ids() {
        let limits = Platform::from_id(id).unwrap().limits();
        let text = text_of_len(limits.caption.max);
        let result = service.validate_for_platform(&text, id, 1);

        assert!(result.valid, "platform {} blocked a max-length caption", id);
        assert!(
            result
                .warnings
                .iter()
                .any(|i| i.check == "caption"),
            "platform {} missing the near-limit warning",
            id
        );
        assert_eq!(result.adapted_text, text);
    }
}

/// A caption at 90% of the maximum does not warn yet
#[test]
fn test_validateForPlatform_atNinetyPercent_shouldNotWarn() {
    let service = ValidationService::new();
    // 90% of instagram's 2200 is 1980; the warning fires strictly above it
    let result = service.validate_for_platform(&text_of_len(1980), "instagram", 1);

    assert!(result.valid);
    assert!(result.warnings.is_empty());

    let result = service.validate_for_platform(&text_of_len(1981), "instagram", 1);

    assert_eq!(result.warnings.len(), 1);
}

/// Truncated captions are exactly max characters long and end with the suffix
#[test]
fn test_validateForPlatform_overMax_shouldTruncateToExactlyMax() {
    let service = ValidationService::new();

    for extra in [1, 2, 3, 500] {
        let text = text_of_len(2200 + extra);
        let result = service.validate_for_platform(&text, "instagram", 1);

        assert!(!result.valid);
        assert_eq!(
            result.adapted_text.chars().count(),
            2200,
            "adapted length off for extra={}",
            extra
        );
        assert!(result.adapted_text.ends_with("..."));
    }
}

/// Result statistics always describe the adapted text, not the original
#[test]
fn test_validateForPlatform_afterTruncation_shouldRecomputeStats() {
    let service = ValidationService::new();
    // Hashtags sit in the tail that truncation removes
    let text = format!("{} #one #two #three", text_of_len(2190));
    let original_stats = ContentStats::extract(&text);
    assert_eq!(original_stats.hashtag_count, 3);

    let result = service.validate_for_platform(&text, "instagram", 1);

    let expected = ContentStats::extract(&result.adapted_text);
    assert_eq!(result.stats, expected);
    assert!(result.stats.hashtag_count < original_stats.hashtag_count);
    assert_eq!(result.stats.char_count, 2200);
}

/// Unknown platform identifiers pass unconstrained by default
#[test]
fn test_validateForPlatform_withUnknownId_shouldPassUnconstrained() {
    let service = ValidationService::new();
    let text = text_of_len(100_000);

    let result = service.validate_for_platform(&text, "nonexistent", 0);

    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.adapted_text, text);
    assert_eq!(result.stats, ContentStats::extract(&text));
}

/// Strict mode turns unknown identifiers into labeled errors
#[test]
fn test_validateForPlatform_withStrictMode_shouldFlagUnknownId() {
    let service = ValidationService::with_config(ValidationConfig {
        strict_platform_ids: true,
        ..Default::default()
    });

    let result = service.validate_for_platform("fine text", "dzen", 0);

    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].check, "platform");
    assert_eq!(result.errors[0].severity, IssueSeverity::Error);
}

/// Token-count overflow alone never blocks publishing
#[test]
fn test_validateForPlatform_tokenOverflow_shouldNeverError() {
    let service = ValidationService::new();

    // 12 hashtags on telegram (max 10), 25 mentions on vk (max 10),
    // 12 links on telegram (max 10)
    let hashtags = (0..12).map(|i| format!("#t{}", i)).collect::<Vec<_>>().join(" ");
    let mentions = (0..25).map(|i| format!("@u{}", i)).collect::<Vec<_>>().join(" ");
    let links = (0..12)
        .map(|i| format!("https://example.com/{}", i))
        .collect::<Vec<_>>()
        .join(" ");

    for (text, id) in [(&hashtags, "telegram"), (&mentions, "vk"), (&links, "telegram")] {
        let result = service.validate_for_platform(text, id, 1);

        assert!(result.valid, "{} blocked on token overflow", id);
        assert!(!result.warnings.is_empty());
        assert!(result.errors.is_empty());
    }
}

/// Links on a platform that forbids them always block, regardless of count
#[test]
fn test_validateForPlatform_linkWhereForbidden_shouldError() {
    let service = ValidationService::new();

    let result = service.validate_for_platform("watch https://x.co", "tiktok", 1);

    assert!(!result.valid);
    assert!(result.errors.iter().any(|i| i.check == "links"));
}

/// Scenario: tiktok draft with a link and no media has exactly two errors
#[test]
fn test_scenario_tiktokLinkNoMedia_shouldHaveTwoErrors() {
    let service = ValidationService::new();

    let result = service.validate_for_platform("Check this out! https://x.co", "tiktok", 0);

    assert!(!result.valid);
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors[0].message.contains("not allowed"));
    assert!(result.errors[1].message.contains("required"));
    assert_eq!(result.adapted_text, "Check this out! https://x.co");
}

/// Scenario: instagram draft at 2205 characters truncates to 2200
#[test]
fn test_scenario_instagramOverflow_shouldTruncate() {
    let service = ValidationService::new();
    let text = text_of_len(2205);

    let result = service.validate_for_platform(&text, "instagram", 1);

    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("2205/2200"));
    assert_eq!(result.adapted_text.chars().count(), 2200);
    assert!(result.adapted_text.ends_with("..."));
    assert_eq!(result.stats.char_count, 2200);
}

/// Scenario: empty telegram draft without media is fully valid
#[test]
fn test_scenario_emptyTelegramDraft_shouldPass() {
    let service = ValidationService::new();

    let result = service.validate_for_platform("", "telegram", 0);

    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

/// Scenario: 35 hashtags on instagram produce exactly one warning
#[test]
fn test_scenario_instagramHashtagOverflow_shouldWarnOnce() {
    let service = ValidationService::new();
    let text = crate::common::caption_with_hashtags(35);

    let result = service.validate_for_platform(&text, "instagram", 1);

    assert!(result.valid);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].message.contains("35/30"));
}

/// Media overflow warns while a missing required attachment errors
#[test]
fn test_validateForPlatform_mediaChecks_shouldSplitSeverity() {
    let service = ValidationService::new();

    let missing = service.validate_for_platform("video description here", "youtube", 0);
    assert!(!missing.valid);
    assert!(missing.errors.iter().any(|i| i.check == "media"));

    let too_many = service.validate_for_platform("carousel post", "telegram", 12);
    assert!(too_many.valid);
    assert!(too_many.warnings.iter().any(|i| i.check == "media"));
}

/// Re-running validation is deterministic and order-independent
#[test]
fn test_validateMany_shouldBeIndependentPerPlatform() {
    let service = ValidationService::new();
    let text = "Spring collection drop #fashion https://shop.example";

    let forward = service.validate_many(&text, &all_platform_ids(), 1);
    let mut reversed_ids = all_platform_ids();
    reversed_ids.reverse();
    let backward = service.validate_many(&text, &reversed_ids, 1);

    assert_eq!(forward.total_platforms, backward.total_platforms);
    assert_eq!(forward.error_count, backward.error_count);

    for result in &forward.results {
        let twin = backward
            .results
            .iter()
            .find(|r| r.platform_id == result.platform_id)
            .unwrap();
        assert_eq!(result.valid, twin.valid);
        assert_eq!(result.errors.len(), twin.errors.len());
        assert_eq!(result.adapted_text, twin.adapted_text);
    }
}
