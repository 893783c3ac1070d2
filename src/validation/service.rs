/*!
 * Validation service that orchestrates all compliance checks.
 *
 * This module provides the unified interface for validating one draft
 * caption against one or many target platforms.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::platforms::{Platform, PlatformLimits, limits_for};

use super::caption::{CaptionIssue, CaptionValidator};
use super::entities::{EntityIssue, EntityValidator, EntityValidatorConfig};
use super::links::{LinkIssue, LinkValidator};
use super::media::{MediaIssue, MediaValidator};
use super::stats::ContentStats;

/// Configuration for the validation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Whether validation is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to validate caption length
    #[serde(default = "default_true")]
    pub caption_validation: bool,

    /// Whether to validate hashtag counts
    #[serde(default = "default_true")]
    pub hashtag_validation: bool,

    /// Whether to validate mention counts
    #[serde(default = "default_true")]
    pub mention_validation: bool,

    /// Whether to validate link policy
    #[serde(default = "default_true")]
    pub link_validation: bool,

    /// Whether to validate media attachments
    #[serde(default = "default_true")]
    pub media_validation: bool,

    /// Whether unknown platform identifiers are an error instead of the
    /// permissive unconstrained default
    #[serde(default)]
    pub strict_platform_ids: bool,

    /// Whether to enforce the per-hashtag length limit
    #[serde(default)]
    pub enforce_hashtag_length: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            caption_validation: true,
            hashtag_validation: true,
            mention_validation: true,
            link_validation: true,
            media_validation: true,
            strict_platform_ids: false,
            enforce_hashtag_length: false,
        }
    }
}

/// Convert from app_config::ValidationSettings to validation::ValidationConfig
impl From<crate::app_config::ValidationSettings> for ValidationConfig {
    fn from(settings: crate::app_config::ValidationSettings) -> Self {
        Self {
            enabled: settings.enabled,
            caption_validation: settings.caption_validation,
            hashtag_validation: settings.hashtag_validation,
            mention_validation: settings.mention_validation,
            link_validation: settings.link_validation,
            media_validation: settings.media_validation,
            strict_platform_ids: settings.strict_platform_ids,
            enforce_hashtag_length: settings.enforce_hashtag_length,
        }
    }
}

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueSeverity {
    /// Warning - content publishable but risky
    Warning,
    /// Error - content cannot be published as-is
    Error,
}

/// A validation issue
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// Which check found the issue
    pub check: String,
    /// Severity of the issue
    pub severity: IssueSeverity,
    /// Description of the issue
    pub message: String,
}

impl ValidationIssue {
    /// Create a warning issue
    pub fn warning(check: &str, message: String) -> Self {
        Self {
            check: check.to_string(),
            severity: IssueSeverity::Warning,
            message,
        }
    }

    /// Create an error issue
    pub fn error(check: &str, message: String) -> Self {
        Self {
            check: check.to_string(),
            severity: IssueSeverity::Error,
            message,
        }
    }
}

/// Result of validating one draft for one platform
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Platform identifier the draft was validated against
    pub platform_id: String,
    /// True iff no errors were found
    pub valid: bool,
    /// Conditions that block publishing, in evaluation order
    pub errors: Vec<ValidationIssue>,
    /// Conditions that are permitted but risky, in evaluation order
    pub warnings: Vec<ValidationIssue>,
    /// The caption as it will be published; equals the input unless the
    /// caption length check truncated it
    pub adapted_text: String,
    /// Statistics recomputed from `adapted_text`
    pub stats: ContentStats,
}

impl ValidationResult {
    /// Create a passing result with no constraints applied
    pub fn unconstrained(platform_id: &str, text: &str) -> Self {
        Self {
            platform_id: platform_id.to_string(),
            valid: true,
            errors: vec![],
            warnings: vec![],
            adapted_text: text.to_string(),
            stats: ContentStats::extract(text),
        }
    }

    /// Error messages in evaluation order
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|i| i.message.as_str()).collect()
    }

    /// Warning messages in evaluation order
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|i| i.message.as_str()).collect()
    }

    /// Whether the caption was truncated to fit the platform
    pub fn was_truncated(&self, original_text: &str) -> bool {
        self.adapted_text != original_text
    }
}

/// Complete validation report for a multi-platform draft
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether the draft is publishable on every target platform
    pub all_valid: bool,
    /// Total platforms validated
    pub total_platforms: usize,
    /// Platforms where the draft passed without issues
    pub valid_count: usize,
    /// Platforms that passed with warnings
    pub warning_count: usize,
    /// Platforms where the draft is blocked
    pub error_count: usize,
    /// Individual results, in the order the platforms were given
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    /// Platform identifiers where the draft is blocked
    pub fn platforms_to_fix(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.valid)
            .map(|r| r.platform_id.as_str())
            .collect()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Validation: {}/{} platforms ok, {} with warnings, {} blocked",
            self.valid_count, self.total_platforms, self.warning_count, self.error_count
        )
    }
}

/// Validation service for draft content
pub struct ValidationService {
    config: ValidationConfig,
    entity_validator: EntityValidator,
}

impl ValidationService {
    /// Create a new validation service with default configuration
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Create a new validation service with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        let entity_config = EntityValidatorConfig {
            check_hashtags: config.hashtag_validation,
            check_mentions: config.mention_validation,
            enforce_hashtag_length: config.enforce_hashtag_length,
        };

        Self {
            config,
            entity_validator: EntityValidator::with_config(entity_config),
        }
    }

    /// Check if validation is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Validate a draft caption for one target platform.
    ///
    /// An unrecognized `platform_id` is treated as unconstrained and passes
    /// unless `strict_platform_ids` is set.
    pub fn validate_for_platform(
        &self,
        text: &str,
        platform_id: &str,
        media_count: usize,
    ) -> ValidationResult {
        if !self.config.enabled {
            return ValidationResult::unconstrained(platform_id, text);
        }

        match limits_for(platform_id) {
            Some(limits) => self.validate_with_limits(text, platform_id, limits, media_count),
            None if self.config.strict_platform_ids => ValidationResult {
                platform_id: platform_id.to_string(),
                valid: false,
                errors: vec![ValidationIssue::error(
                    "platform",
                    format!("Unknown platform identifier: {}", platform_id),
                )],
                warnings: vec![],
                adapted_text: text.to_string(),
                stats: ContentStats::extract(text),
            },
            None => {
                debug!(
                    "No limits registered for platform '{}', treating as unconstrained",
                    platform_id
                );
                ValidationResult::unconstrained(platform_id, text)
            }
        }
    }

    /// Validate a draft caption against an explicit limits record.
    ///
    /// Statistics in the result are recomputed from the adapted text, so a
    /// hashtag that fell inside a truncated tail is no longer counted.
    pub fn validate_with_limits(
        &self,
        text: &str,
        platform_id: &str,
        limits: &PlatformLimits,
        media_count: usize,
    ) -> ValidationResult {
        let stats = ContentStats::extract(text);
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut adapted_text = text.to_string();

        // Caption length
        if self.config.caption_validation {
            let outcome = CaptionValidator::validate(text, stats.char_count, &limits.caption);
            if let Some(truncated) = outcome.adapted_text {
                adapted_text = truncated;
            }
            for issue in outcome.issues {
                match issue {
                    CaptionIssue::NearLimit { .. } => {
                        warnings.push(ValidationIssue::warning("caption", issue.to_string()));
                    }
                    _ => {
                        errors.push(ValidationIssue::error("caption", issue.to_string()));
                    }
                }
            }
        }

        // Hashtags and mentions (warnings only)
        for issue in
            self.entity_validator
                .validate(text, &stats, &limits.hashtags, &limits.mentions)
        {
            let check = match issue {
                EntityIssue::TooManyMentions { .. } => "mentions",
                _ => "hashtags",
            };
            warnings.push(ValidationIssue::warning(check, issue.to_string()));
        }

        // Links
        if self.config.link_validation {
            for issue in LinkValidator::validate(stats.link_count, &limits.links) {
                match issue {
                    LinkIssue::NotAllowed => {
                        errors.push(ValidationIssue::error("links", issue.to_string()));
                    }
                    LinkIssue::TooMany { .. } => {
                        warnings.push(ValidationIssue::warning("links", issue.to_string()));
                    }
                }
            }
        }

        // Media attachments
        if self.config.media_validation {
            for issue in MediaValidator::validate(media_count, &limits.media) {
                match issue {
                    MediaIssue::Required => {
                        errors.push(ValidationIssue::error("media", issue.to_string()));
                    }
                    MediaIssue::TooMany { .. } => {
                        warnings.push(ValidationIssue::warning("media", issue.to_string()));
                    }
                }
            }
        }

        // Statistics reflect the text that will actually be published
        let final_stats = ContentStats::extract(&adapted_text);
        let valid = errors.is_empty();

        debug!(
            "Validated draft for {}: {} errors, {} warnings",
            platform_id,
            errors.len(),
            warnings.len()
        );

        ValidationResult {
            platform_id: platform_id.to_string(),
            valid,
            errors,
            warnings,
            adapted_text,
            stats: final_stats,
        }
    }

    /// Validate a draft against a typed platform
    pub fn validate_for(&self, text: &str, platform: Platform, media_count: usize) -> ValidationResult {
        self.validate_for_platform(text, platform.id(), media_count)
    }

    /// Validate a draft against every target platform independently.
    ///
    /// Results carry no cross-platform state; the order of the report
    /// matches the order of `platform_ids`.
    pub fn validate_many<S: AsRef<str>>(
        &self,
        text: &str,
        platform_ids: &[S],
        media_count: usize,
    ) -> ValidationReport {
        let results: Vec<ValidationResult> = platform_ids
            .iter()
            .map(|id| self.validate_for_platform(text, id.as_ref(), media_count))
            .collect();

        let valid_count = results
            .iter()
            .filter(|r| r.valid && r.warnings.is_empty())
            .count();
        let warning_count = results
            .iter()
            .filter(|r| r.valid && !r.warnings.is_empty())
            .count();
        let error_count = results.iter().filter(|r| !r.valid).count();
        let all_valid = results.iter().all(|r| r.valid);

        debug!(
            "Validation complete: {}/{} platforms ok, {} warnings, {} blocked",
            valid_count,
            results.len(),
            warning_count,
            error_count
        );

        ValidationReport {
            all_valid,
            total_platforms: results.len(),
            valid_count,
            warning_count,
            error_count,
            results,
        }
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
