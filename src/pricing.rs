/*!
 * Monthly cost estimation for cross-posting plans.
 *
 * Aggregates the per-post publishing cost of the selected platforms with
 * AI image and video generation costs, converts the total to rubles, and
 * recommends a subscription plan. All arithmetic is plain aggregation
 * over static price constants; nothing here talks to the billing API.
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::platforms::Platform;

/// Video generation cost per second of footage, USD (Runway ML Gen-3)
pub const VIDEO_COST_PER_SECOND: f64 = 0.15;

/// Default RUB per USD conversion rate
pub const DEFAULT_USD_TO_RUB: f64 = 92.0;

/// Default hourly rate of a human SMM manager, USD
pub const DEFAULT_SMM_HOURLY_RATE: f64 = 15.0;

/// Default hours to create and publish one post manually
pub const DEFAULT_HOURS_PER_POST: f64 = 2.0;

/// Publishing cost per post in USD (3x markup over raw provider cost)
pub fn publish_cost(platform: Platform) -> f64 {
    match platform {
        Platform::Telegram => 0.00,
        Platform::Vk => 0.00,
        Platform::Instagram => 0.03,
        Platform::Facebook => 0.03,
        Platform::Tiktok => 0.06,
        Platform::Youtube => 0.09,
        Platform::Rutube => 0.03,
    }
}

/// AI image generation provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageProvider {
    /// No generation, users upload their own images
    #[default]
    None,
    /// Budget-tier generation
    Nanobana,
    /// OpenAI DALL-E 3, realistic imagery
    OpenAI,
    /// Midjourney, best quality and artistic style
    Midjourney,
}

impl ImageProvider {
    /// Generation cost per image, USD
    pub fn cost_per_image(&self) -> f64 {
        match self {
            ImageProvider::None => 0.0,
            ImageProvider::Nanobana => 0.03,
            ImageProvider::OpenAI => 0.12,
            ImageProvider::Midjourney => 0.24,
        }
    }

    /// Human-readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            ImageProvider::None => "No generation",
            ImageProvider::Nanobana => "Nanobana",
            ImageProvider::OpenAI => "DALL-E 3",
            ImageProvider::Midjourney => "Midjourney",
        }
    }

    /// Quality tier shown next to the provider, `None` for no generation
    pub fn quality_tier(&self) -> Option<&'static str> {
        match self {
            ImageProvider::None => None,
            ImageProvider::Nanobana => Some("Basic"),
            ImageProvider::OpenAI => Some("High"),
            ImageProvider::Midjourney => Some("Premium"),
        }
    }
}

impl std::str::FromStr for ImageProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(ImageProvider::None),
            "nanobana" => Ok(ImageProvider::Nanobana),
            "openai" => Ok(ImageProvider::OpenAI),
            "midjourney" => Ok(ImageProvider::Midjourney),
            _ => Err(anyhow!("Invalid image provider: {}", s)),
        }
    }
}

/// Subscription plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Starter,
    Pro,
    Business,
}

impl Plan {
    /// Monthly price in rubles
    pub fn monthly_price_rub(&self) -> u32 {
        match self {
            Plan::Starter => 990,
            Plan::Pro => 2990,
            Plan::Business => 9990,
        }
    }

    /// Posts included per month, `None` for unlimited
    pub fn post_limit(&self) -> Option<u32> {
        match self {
            Plan::Starter => Some(30),
            Plan::Pro => Some(100),
            Plan::Business => None,
        }
    }

    /// Human-readable plan name
    pub fn display_name(&self) -> &'static str {
        match self {
            Plan::Starter => "Starter",
            Plan::Pro => "Pro",
            Plan::Business => "Business",
        }
    }

    /// Cheapest plan that covers an estimated monthly spend in rubles
    pub fn recommended_for(total_rub: i64) -> Plan {
        if total_rub <= 990 {
            Plan::Starter
        } else if total_rub <= 2990 {
            Plan::Pro
        } else {
            Plan::Business
        }
    }
}

/// Parameters for a monthly cost estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateParams {
    /// Target platforms for each post
    pub platforms: Vec<Platform>,
    /// Posts published per month
    pub posts_per_month: u32,
    /// AI image generation provider
    pub image_provider: ImageProvider,
    /// Generated images per post
    pub images_per_post: u32,
    /// Seconds of generated video per post, `None` when video is off
    pub video_seconds_per_post: Option<u32>,
}

/// Itemized monthly cost estimate
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    /// Publishing cost across all selected platforms, USD
    pub platform_cost: f64,
    /// Image generation cost, USD
    pub image_cost: f64,
    /// Video generation cost, USD
    pub video_cost: f64,
    /// Total, USD, rounded to cents
    pub total_usd: f64,
    /// Total, rubles, rounded to whole rubles
    pub total_rub: i64,
    /// Estimated cost of running the same plan manually, USD
    pub manual_cost: f64,
    /// Savings versus manual SMM work, percent
    pub savings_percent: u32,
    /// Recommended subscription plan for this spend
    pub recommended_plan: Plan,
}

/// Configuration for the cost estimator
#[derive(Debug, Clone)]
pub struct CostEstimatorConfig {
    /// RUB per USD conversion rate
    pub usd_to_rub: f64,
    /// Hourly rate of a human SMM manager, USD
    pub smm_hourly_rate: f64,
    /// Hours to create and publish one post manually
    pub hours_per_post: f64,
}

impl Default for CostEstimatorConfig {
    fn default() -> Self {
        Self {
            usd_to_rub: DEFAULT_USD_TO_RUB,
            smm_hourly_rate: DEFAULT_SMM_HOURLY_RATE,
            hours_per_post: DEFAULT_HOURS_PER_POST,
        }
    }
}

/// Cost estimator for cross-posting plans
pub struct CostEstimator {
    config: CostEstimatorConfig,
}

impl CostEstimator {
    /// Create a new estimator with default rates
    pub fn new() -> Self {
        Self {
            config: CostEstimatorConfig::default(),
        }
    }

    /// Create a new estimator with custom rates
    pub fn with_config(config: CostEstimatorConfig) -> Self {
        Self { config }
    }

    /// Compute the itemized monthly estimate for the given parameters
    pub fn estimate(&self, params: &EstimateParams) -> CostBreakdown {
        let posts = params.posts_per_month as f64;

        let platform_cost = params
            .platforms
            .iter()
            .map(|p| publish_cost(*p))
            .sum::<f64>()
            * posts;

        let image_cost =
            params.image_provider.cost_per_image() * params.images_per_post as f64 * posts;

        let video_cost = params
            .video_seconds_per_post
            .map_or(0.0, |seconds| VIDEO_COST_PER_SECOND * seconds as f64 * posts);

        let total = platform_cost + image_cost + video_cost;
        let total_rub = (total * self.config.usd_to_rub).round() as i64;

        // Manual baseline: an SMM manager covers roughly three platforms
        // per sitting, so the per-platform effort scales by count / 3
        let manual_cost = posts
            * self.config.hours_per_post
            * self.config.smm_hourly_rate
            * params.platforms.len() as f64
            / 3.0;

        let savings_percent = if manual_cost > 0.0 {
            (((1.0 - total / manual_cost) * 100.0).round()).max(0.0) as u32
        } else {
            0
        };

        CostBreakdown {
            platform_cost,
            image_cost,
            video_cost,
            total_usd: (total * 100.0).round() / 100.0,
            total_rub,
            manual_cost: manual_cost.round(),
            savings_percent,
            recommended_plan: Plan::recommended_for(total_rub),
        }
    }
}

impl Default for CostEstimator {
    fn default() -> Self {
        Self::new()
    }
}
