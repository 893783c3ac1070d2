/*!
 * Media attachment validation for draft content.
 *
 * A missing attachment on a platform that requires one blocks publishing;
 * attachment counts above the maximum only warn. The two checks are
 * independent of each other.
 */

use crate::platforms::MediaPolicy;

/// Types of media attachment issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaIssue {
    /// The platform requires at least one media attachment
    Required,
    /// More attachments than the platform accepts
    TooMany { count: usize, max: usize },
}

impl std::fmt::Display for MediaIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaIssue::Required => {
                write!(f, "Media attachment required")
            }
            MediaIssue::TooMany { count, max } => {
                write!(f, "Too many media attachments ({}/{})", count, max)
            }
        }
    }
}

/// Media attachment validator
pub struct MediaValidator;

impl MediaValidator {
    /// Validate a draft's media attachment count against the platform policy
    pub fn validate(media_count: usize, policy: &MediaPolicy) -> Vec<MediaIssue> {
        let mut issues = Vec::new();

        if policy.required && media_count == 0 {
            issues.push(MediaIssue::Required);
        }

        if media_count > policy.max_count {
            issues.push(MediaIssue::TooMany {
                count: media_count,
                max: policy.max_count,
            });
        }

        issues
    }
}
