/*!
 * Platform registry for the supported social networks.
 *
 * This module defines the typed platform identifiers, their display
 * metadata, and the static publishing-limits table that drives content
 * validation:
 * - Caption length bounds
 * - Hashtag and mention count limits
 * - Link policy (allowed at all, and how many)
 * - Media attachment policy (required, and how many)
 *
 * Unknown platform identifiers are deliberately not an error: lookup
 * returns `None` and callers treat the platform as unconstrained.
 */

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported publishing platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Telegram,
    Vk,
    Instagram,
    Facebook,
    Tiktok,
    Youtube,
    Rutube,
}

impl Platform {
    /// All supported platforms, in display order
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Telegram,
            Platform::Vk,
            Platform::Instagram,
            Platform::Facebook,
            Platform::Tiktok,
            Platform::Youtube,
            Platform::Rutube,
        ]
    }

    /// Parse a platform from its string identifier, `None` when unrecognized
    pub fn from_id(id: &str) -> Option<Platform> {
        match id.trim().to_lowercase().as_str() {
            "telegram" => Some(Platform::Telegram),
            "vk" => Some(Platform::Vk),
            "instagram" => Some(Platform::Instagram),
            "facebook" => Some(Platform::Facebook),
            "tiktok" => Some(Platform::Tiktok),
            "youtube" => Some(Platform::Youtube),
            "rutube" => Some(Platform::Rutube),
            _ => None,
        }
    }

    /// Lowercase platform identifier used in API payloads and config files
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Telegram => "telegram",
            Platform::Vk => "vk",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Rutube => "rutube",
        }
    }

    /// Human-readable platform name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Telegram => "Telegram",
            Platform::Vk => "VKontakte",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
            Platform::Rutube => "RuTube",
        }
    }

    /// Brand color used by the dashboard for platform badges
    pub fn brand_color(&self) -> &'static str {
        match self {
            Platform::Telegram => "#0088cc",
            Platform::Vk => "#4a76a8",
            Platform::Instagram => "#E4405F",
            Platform::Facebook => "#1877F2",
            Platform::Tiktok => "#000000",
            Platform::Youtube => "#FF0000",
            Platform::Rutube => "#00A8E6",
        }
    }

    /// Publishing limits for this platform
    pub fn limits(&self) -> &'static PlatformLimits {
        PLATFORM_LIMITS
            .get(self)
            .expect("every platform has a limits entry")
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Platform::from_id(s).ok_or_else(|| anyhow!("Unknown platform identifier: {}", s))
    }
}

/// Inclusive caption character-count bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionRange {
    /// Minimum characters; 0 disables the underflow check
    pub min: usize,
    /// Maximum characters before truncation kicks in
    pub max: usize,
}

/// Hashtag constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagLimit {
    /// Maximum number of `#tag` tokens before a warning
    pub max_count: usize,
    /// Maximum characters per individual hashtag (opt-in rule, see
    /// `ValidationConfig::enforce_hashtag_length`)
    pub max_length: usize,
}

/// Mention constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionLimit {
    /// Maximum number of `@name` tokens before a warning
    pub max_count: usize,
}

/// Link policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPolicy {
    /// Whether URLs are permitted at all
    pub allowed: bool,
    /// Maximum number of links before a warning (when allowed)
    pub max_count: usize,
}

/// Media attachment policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPolicy {
    /// Whether at least one media attachment is mandatory
    pub required: bool,
    /// Maximum number of attachments before a warning
    pub max_count: usize,
}

/// Publishing limits for one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformLimits {
    pub caption: CaptionRange,
    pub hashtags: HashtagLimit,
    pub mentions: MentionLimit,
    pub links: LinkPolicy,
    pub media: MediaPolicy,
}

/// Per-platform publishing limits, mirrored from publishing_rules.yml
static PLATFORM_LIMITS: Lazy<HashMap<Platform, PlatformLimits>> = Lazy::new(|| {
    let mut limits = HashMap::new();

    limits.insert(
        Platform::Telegram,
        PlatformLimits {
            caption: CaptionRange { min: 0, max: 4096 },
            hashtags: HashtagLimit {
                max_count: 10,
                max_length: 50,
            },
            mentions: MentionLimit { max_count: 20 },
            links: LinkPolicy {
                allowed: true,
                max_count: 10,
            },
            media: MediaPolicy {
                required: false,
                max_count: 10,
            },
        },
    );

    limits.insert(
        Platform::Vk,
        PlatformLimits {
            caption: CaptionRange { min: 1, max: 15000 },
            hashtags: HashtagLimit {
                max_count: 10,
                max_length: 50,
            },
            mentions: MentionLimit { max_count: 10 },
            links: LinkPolicy {
                allowed: true,
                max_count: 5,
            },
            media: MediaPolicy {
                required: false,
                max_count: 10,
            },
        },
    );

    limits.insert(
        Platform::Instagram,
        PlatformLimits {
            caption: CaptionRange { min: 1, max: 2200 },
            hashtags: HashtagLimit {
                max_count: 30,
                max_length: 100,
            },
            mentions: MentionLimit { max_count: 20 },
            links: LinkPolicy {
                allowed: true,
                max_count: 1,
            },
            media: MediaPolicy {
                required: true,
                max_count: 10,
            },
        },
    );

    limits.insert(
        Platform::Facebook,
        PlatformLimits {
            caption: CaptionRange { min: 0, max: 63206 },
            hashtags: HashtagLimit {
                max_count: 30,
                max_length: 100,
            },
            mentions: MentionLimit { max_count: 50 },
            links: LinkPolicy {
                allowed: true,
                max_count: 10,
            },
            media: MediaPolicy {
                required: false,
                max_count: 10,
            },
        },
    );

    limits.insert(
        Platform::Tiktok,
        PlatformLimits {
            caption: CaptionRange { min: 1, max: 150 },
            hashtags: HashtagLimit {
                max_count: 5,
                max_length: 25,
            },
            mentions: MentionLimit { max_count: 5 },
            links: LinkPolicy {
                allowed: false,
                max_count: 0,
            },
            media: MediaPolicy {
                required: true,
                max_count: 1,
            },
        },
    );

    limits.insert(
        Platform::Youtube,
        PlatformLimits {
            caption: CaptionRange { min: 1, max: 5000 },
            hashtags: HashtagLimit {
                max_count: 15,
                max_length: 50,
            },
            mentions: MentionLimit { max_count: 10 },
            links: LinkPolicy {
                allowed: true,
                max_count: 10,
            },
            media: MediaPolicy {
                required: true,
                max_count: 1,
            },
        },
    );

    limits.insert(
        Platform::Rutube,
        PlatformLimits {
            caption: CaptionRange { min: 10, max: 5000 },
            hashtags: HashtagLimit {
                max_count: 20,
                max_length: 50,
            },
            mentions: MentionLimit { max_count: 10 },
            links: LinkPolicy {
                allowed: true,
                max_count: 5,
            },
            media: MediaPolicy {
                required: true,
                max_count: 1,
            },
        },
    );

    limits
});

/// Look up publishing limits by string identifier.
///
/// Returns `None` for unrecognized identifiers so the caller can apply the
/// permissive unconstrained default.
pub fn limits_for(platform_id: &str) -> Option<&'static PlatformLimits> {
    Platform::from_id(platform_id).map(|p| p.limits())
}
