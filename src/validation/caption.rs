/*!
 * Caption length validation for draft content.
 *
 * This module checks a caption against a platform's length bounds:
 * - Overflow produces an error and an automatically truncated caption
 * - Length within 90% of the maximum produces a warning
 * - Underflow below a non-zero minimum produces an error
 */

use log::debug;

use crate::platforms::CaptionRange;

/// Fraction of the maximum length at which the near-limit warning fires
const NEAR_LIMIT_RATIO: f64 = 0.9;

/// Suffix appended to truncated captions
const TRUNCATION_SUFFIX: &str = "...";

/// Types of caption length issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionIssue {
    /// Caption exceeds the platform maximum
    TooLong { char_count: usize, max: usize },
    /// Caption is within 90% of the platform maximum
    NearLimit { char_count: usize, max: usize },
    /// Caption is below the platform minimum
    TooShort { char_count: usize, min: usize },
}

impl std::fmt::Display for CaptionIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptionIssue::TooLong { char_count, max } => {
                write!(f, "Text too long ({}/{} characters)", char_count, max)
            }
            CaptionIssue::NearLimit { char_count, max } => {
                write!(f, "Text close to the limit ({}/{})", char_count, max)
            }
            CaptionIssue::TooShort { min, .. } => {
                write!(f, "Text too short (min. {} characters)", min)
            }
        }
    }
}

/// Outcome of caption validation for one platform
#[derive(Debug, Clone)]
pub struct CaptionOutcome {
    /// Issues found, in evaluation order
    pub issues: Vec<CaptionIssue>,
    /// Truncated caption, present only when the text exceeded the maximum
    pub adapted_text: Option<String>,
}

/// Caption length validator
pub struct CaptionValidator;

impl CaptionValidator {
    /// Validate a caption of `char_count` characters against `range`.
    ///
    /// The overflow and near-limit checks are mutually exclusive; the
    /// underflow check is independent and evaluated afterwards.
    pub fn validate(text: &str, char_count: usize, range: &CaptionRange) -> CaptionOutcome {
        let mut issues = Vec::new();
        let mut adapted_text = None;

        if char_count > range.max {
            issues.push(CaptionIssue::TooLong {
                char_count,
                max: range.max,
            });
            adapted_text = Some(Self::truncate(text, range.max));
            debug!(
                "Caption truncated from {} to {} characters",
                char_count, range.max
            );
        } else if char_count as f64 > range.max as f64 * NEAR_LIMIT_RATIO {
            issues.push(CaptionIssue::NearLimit {
                char_count,
                max: range.max,
            });
        }

        if char_count < range.min && range.min > 0 {
            issues.push(CaptionIssue::TooShort {
                char_count,
                min: range.min,
            });
        }

        CaptionOutcome {
            issues,
            adapted_text,
        }
    }

    /// Truncate `text` so that the result plus the `"..."` suffix is exactly
    /// `max` characters long. For `max < 3` the kept prefix clamps to zero
    /// and the result is just the suffix.
    pub fn truncate(text: &str, max: usize) -> String {
        let keep = max.saturating_sub(TRUNCATION_SUFFIX.chars().count());
        let mut truncated: String = text.chars().take(keep).collect();
        truncated.push_str(TRUNCATION_SUFFIX);
        truncated
    }
}
