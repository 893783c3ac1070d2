use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::platforms::Platform;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default target platforms for new drafts
    #[serde(default = "default_platforms")]
    pub default_platforms: Vec<String>,

    /// Content validation settings
    #[serde(default)]
    pub validation: ValidationSettings,

    /// Cost estimation settings
    #[serde(default)]
    pub pricing: PricingSettings,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Content validation settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ValidationSettings {
    // @field: Master switch for all validation
    #[serde(default = "default_true")]
    pub enabled: bool,

    // @field: Caption length checks
    #[serde(default = "default_true")]
    pub caption_validation: bool,

    // @field: Hashtag count checks
    #[serde(default = "default_true")]
    pub hashtag_validation: bool,

    // @field: Mention count checks
    #[serde(default = "default_true")]
    pub mention_validation: bool,

    // @field: Link policy checks
    #[serde(default = "default_true")]
    pub link_validation: bool,

    // @field: Media attachment checks
    #[serde(default = "default_true")]
    pub media_validation: bool,

    // @field: Treat unknown platform ids as errors
    #[serde(default)]
    pub strict_platform_ids: bool,

    // @field: Enforce per-hashtag length limits
    #[serde(default)]
    pub enforce_hashtag_length: bool,
}

impl Default for ValidationSettings {
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

/// Cost estimation settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PricingSettings {
    /// RUB per USD conversion rate
    #[serde(default = "default_usd_to_rub")]
    pub usd_to_rub: f64,

    /// Hourly rate of a human SMM manager in USD, for the savings estimate
    #[serde(default = "default_smm_hourly_rate")]
    pub smm_hourly_rate: f64,

    /// Average hours to create and publish one post manually
    #[serde(default = "default_hours_per_post")]
    pub hours_per_post: f64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            usd_to_rub: default_usd_to_rub(),
            smm_hourly_rate: default_smm_hourly_rate(),
            hours_per_post: default_hours_per_post(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_true() -> bool {
    true
}

fn default_platforms() -> Vec<String> {
    // Initial dashboard selection
    vec![
        "telegram".to_string(),
        "vk".to_string(),
        "instagram".to_string(),
    ]
}

fn default_usd_to_rub() -> f64 {
    92.0
}

fn default_smm_hourly_rate() -> f64 {
    15.0
}

fn default_hours_per_post() -> f64 {
    2.0
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate default platforms against the registry
        for id in &self.default_platforms {
            if Platform::from_id(id).is_none() {
                return Err(anyhow!("Unknown platform in default_platforms: {}", id));
            }
        }

        // Validate pricing rates
        if self.pricing.usd_to_rub <= 0.0 {
            return Err(anyhow!("usd_to_rub must be positive"));
        }
        if self.pricing.smm_hourly_rate < 0.0 || self.pricing.hours_per_post < 0.0 {
            return Err(anyhow!("Pricing rates must not be negative"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            default_platforms: default_platforms(),
            validation: ValidationSettings::default(),
            pricing: PricingSettings::default(),
            log_level: LogLevel::default(),
        }
    }
}
