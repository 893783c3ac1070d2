/*!
 * Hashtag and mention validation for draft content.
 *
 * Count overflows are warnings, never errors: platforms accept the post
 * but discovery and reach degrade. The per-hashtag length rule is opt-in
 * and disabled by default.
 */

use crate::platforms::{HashtagLimit, MentionLimit};

use super::stats::{ContentStats, hashtag_tokens};

/// Types of hashtag and mention issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityIssue {
    /// More hashtags than the platform recommends
    TooManyHashtags { count: usize, max: usize },
    /// A single hashtag exceeds the platform's token length
    HashtagTooLong { tag: String, max_length: usize },
    /// More mentions than the platform recommends
    TooManyMentions { count: usize, max: usize },
}

impl std::fmt::Display for EntityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityIssue::TooManyHashtags { count, max } => {
                write!(f, "Too many hashtags ({}/{})", count, max)
            }
            EntityIssue::HashtagTooLong { tag, max_length } => {
                write!(f, "Hashtag {} longer than {} characters", tag, max_length)
            }
            EntityIssue::TooManyMentions { count, max } => {
                write!(f, "Too many mentions ({}/{})", count, max)
            }
        }
    }
}

/// Configuration for entity validation
#[derive(Debug, Clone)]
pub struct EntityValidatorConfig {
    /// Whether to check hashtag counts
    pub check_hashtags: bool,
    /// Whether to check mention counts
    pub check_mentions: bool,
    /// Whether to enforce the per-hashtag length limit
    pub enforce_hashtag_length: bool,
}

impl Default for EntityValidatorConfig {
    fn default() -> Self {
        Self {
            check_hashtags: true,
            check_mentions: true,
            enforce_hashtag_length: false,
        }
    }
}

/// Hashtag and mention validator
pub struct EntityValidator {
    config: EntityValidatorConfig,
}

impl EntityValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self {
            config: EntityValidatorConfig::default(),
        }
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: EntityValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate hashtag and mention usage in a caption
    pub fn validate(
        &self,
        text: &str,
        stats: &ContentStats,
        hashtags: &HashtagLimit,
        mentions: &MentionLimit,
    ) -> Vec<EntityIssue> {
        let mut issues = Vec::new();

        if self.config.check_hashtags {
            if stats.hashtag_count > hashtags.max_count {
                issues.push(EntityIssue::TooManyHashtags {
                    count: stats.hashtag_count,
                    max: hashtags.max_count,
                });
            }

            if self.config.enforce_hashtag_length {
                for token in hashtag_tokens(text) {
                    // Token length without the leading '#'
                    let tag_len = token.chars().count().saturating_sub(1);
                    if tag_len > hashtags.max_length {
                        issues.push(EntityIssue::HashtagTooLong {
                            tag: token.to_string(),
                            max_length: hashtags.max_length,
                        });
                    }
                }
            }
        }

        if self.config.check_mentions && stats.mention_count > mentions.max_count {
            issues.push(EntityIssue::TooManyMentions {
                count: stats.mention_count,
                max: mentions.max_count,
            });
        }

        issues
    }
}

impl Default for EntityValidator {
    fn default() -> Self {
        Self::new()
    }
}
