/*!
 * Tests for cost estimation and plan recommendation
 */

use crosspost_rules::platforms::Platform;
use crosspost_rules::pricing::{
    CostEstimator, CostEstimatorConfig, EstimateParams, ImageProvider, Plan, publish_cost,
};

fn base_params() -> EstimateParams {
    EstimateParams {
        platforms: vec![Platform::Telegram, Platform::Vk, Platform::Instagram],
        posts_per_month: 30,
        image_provider: ImageProvider::None,
        images_per_post: 1,
        video_seconds_per_post: None,
    }
}

/// Test the per-platform publish price list
#[test]
fn test_publishCost_shouldMatchPriceList() {
    assert_eq!(publish_cost(Platform::Telegram), 0.00);
    assert_eq!(publish_cost(Platform::Vk), 0.00);
    assert_eq!(publish_cost(Platform::Instagram), 0.03);
    assert_eq!(publish_cost(Platform::Facebook), 0.03);
    assert_eq!(publish_cost(Platform::Tiktok), 0.06);
    assert_eq!(publish_cost(Platform::Youtube), 0.09);
    assert_eq!(publish_cost(Platform::Rutube), 0.03);
}

/// Test the default dashboard scenario: three platforms, images via DALL-E
#[test]
fn test_estimate_withDefaultDashboardScenario_shouldMatch() {
    let estimator = CostEstimator::new();
    let mut params = base_params();
    params.image_provider = ImageProvider::OpenAI;

    let breakdown = estimator.estimate(&params);

    assert!((breakdown.platform_cost - 0.90).abs() < 1e-9);
    assert!((breakdown.image_cost - 3.60).abs() < 1e-9);
    assert_eq!(breakdown.video_cost, 0.0);
    assert!((breakdown.total_usd - 4.50).abs() < 1e-9);
    assert_eq!(breakdown.total_rub, 414);
    assert_eq!(breakdown.recommended_plan, Plan::Starter);
}

/// Test that video generation scales with seconds and posts
#[test]
fn test_estimate_withVideo_shouldScalePerSecond() {
    let estimator = CostEstimator::new();
    let mut params = base_params();
    params.platforms = vec![Platform::Youtube];
    params.posts_per_month = 20;
    params.video_seconds_per_post = Some(10);

    let breakdown = estimator.estimate(&params);

    // 0.15 * 10 s * 20 posts
    assert!((breakdown.video_cost - 30.0).abs() < 1e-9);
    // plus 0.09 * 20 publishing
    assert!((breakdown.total_usd - 31.8).abs() < 1e-9);
    assert_eq!(breakdown.total_rub, 2926);
    assert_eq!(breakdown.recommended_plan, Plan::Pro);
}

/// Test a heavy plan that lands in the Business tier
#[test]
fn test_estimate_withHeavyUsage_shouldRecommendBusiness() {
    let estimator = CostEstimator::new();
    let params = EstimateParams {
        platforms: Platform::all().to_vec(),
        posts_per_month: 100,
        image_provider: ImageProvider::Midjourney,
        images_per_post: 3,
        video_seconds_per_post: Some(5),
    };

    let breakdown = estimator.estimate(&params);

    // Publishing 0.24/post across all seven platforms, 72 images, 500 s video
    assert!(breakdown.total_usd > 100.0);
    assert_eq!(breakdown.recommended_plan, Plan::Business);
}

/// Test the custom exchange rate path
#[test]
fn test_estimate_withCustomRate_shouldConvertWithIt() {
    let estimator = CostEstimator::with_config(CostEstimatorConfig {
        usd_to_rub: 100.0,
        ..Default::default()
    });
    let mut params = base_params();
    params.image_provider = ImageProvider::OpenAI;

    let breakdown = estimator.estimate(&params);

    assert_eq!(breakdown.total_rub, 450);
}

/// Test the savings comparison against manual SMM work
#[test]
fn test_estimate_savingsComparison() {
    let estimator = CostEstimator::new();
    let mut params = base_params();
    params.image_provider = ImageProvider::OpenAI;

    let breakdown = estimator.estimate(&params);

    // 30 posts * 2 h * $15 * 3 platforms / 3
    assert_eq!(breakdown.manual_cost, 900.0);
    assert_eq!(breakdown.savings_percent, 100);
}

/// Test that savings never go negative and handle the empty selection
#[test]
fn test_estimate_savings_shouldClampAtZero() {
    let estimator = CostEstimator::new();

    // No platforms selected: no manual baseline to compare against
    let mut params = base_params();
    params.platforms = vec![];
    params.image_provider = ImageProvider::Midjourney;
    params.images_per_post = 5;

    let breakdown = estimator.estimate(&params);

    assert_eq!(breakdown.savings_percent, 0);
}

/// Test plan metadata
#[test]
fn test_plan_metadata_shouldMatchTariffs() {
    assert_eq!(Plan::Starter.monthly_price_rub(), 990);
    assert_eq!(Plan::Pro.monthly_price_rub(), 2990);
    assert_eq!(Plan::Business.monthly_price_rub(), 9990);

    assert_eq!(Plan::Starter.post_limit(), Some(30));
    assert_eq!(Plan::Pro.post_limit(), Some(100));
    assert_eq!(Plan::Business.post_limit(), None);
}

/// Test the plan recommendation boundaries
#[test]
fn test_recommendedFor_boundaries() {
    assert_eq!(Plan::recommended_for(990), Plan::Starter);
    assert_eq!(Plan::recommended_for(991), Plan::Pro);
    assert_eq!(Plan::recommended_for(2990), Plan::Pro);
    assert_eq!(Plan::recommended_for(2991), Plan::Business);
}

/// Test image provider display metadata
#[test]
fn test_imageProvider_displayMetadata() {
    assert_eq!(ImageProvider::OpenAI.display_name(), "DALL-E 3");
    assert_eq!(ImageProvider::Midjourney.quality_tier(), Some("Premium"));
    assert_eq!(ImageProvider::None.quality_tier(), None);
}
