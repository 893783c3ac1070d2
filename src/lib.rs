/*!
 * # Crosspost Rules
 *
 * A Rust library implementing the client-side rules engine for the
 * Crosspost cross-posting service.
 *
 * ## Features
 *
 * - Publishing limits for seven platforms:
 *   - Telegram, VKontakte, Instagram, Facebook, TikTok, YouTube, RuTube
 * - Draft content compliance validation:
 *   - Caption length with automatic truncation
 *   - Hashtag, mention and link checks
 *   - Media attachment checks
 * - Media format adaptation specs and aspect-ratio classification
 * - Monthly cost estimation and subscription plan recommendation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `platforms`: Platform registry and publishing-limits table
 * - `validation`: Draft content compliance checks:
 *   - `validation::stats`: Content statistics extraction
 *   - `validation::caption`: Caption length and truncation
 *   - `validation::entities`: Hashtag and mention checks
 *   - `validation::links`: Link policy checks
 *   - `validation::media`: Media attachment checks
 *   - `validation::service`: Per-platform orchestration
 * - `media_specs`: Media format specifications per platform
 * - `pricing`: Cost estimation and plan recommendation
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the crate
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
// Add other lints you want to allow but not auto-fix

// Public modules
pub mod app_config;
pub mod errors;
pub mod media_specs;
pub mod platforms;
pub mod pricing;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ConfigError};
pub use platforms::{Platform, PlatformLimits, limits_for};
pub use pricing::{CostBreakdown, CostEstimator, EstimateParams, ImageProvider, Plan};
pub use validation::{
    ContentStats, ValidationConfig, ValidationReport, ValidationResult, ValidationService,
};
