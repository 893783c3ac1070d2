// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::pricing::{CostEstimator, CostEstimatorConfig, EstimateParams, ImageProvider};
use crate::validation::{ValidationConfig, ValidationService};

mod app_config;
mod errors;
mod media_specs;
mod platforms;
mod pricing;
mod validation;

use platforms::Platform;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a draft caption against target platforms (default command)
    #[command(alias = "validate")]
    Check(CheckArgs),

    /// Estimate the monthly cost of a posting plan
    Estimate(EstimateArgs),

    /// List supported platforms and their publishing limits
    Platforms {
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions for crosspost
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Draft caption text; omit to read from --file
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the draft caption from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Target platforms, comma-separated (defaults to the config's platforms)
    #[arg(short, long, value_delimiter = ',')]
    platforms: Vec<String>,

    /// Number of media attachments staged in the draft
    #[arg(short, long, default_value_t = 0)]
    media_count: usize,

    /// Treat unknown platform identifiers as errors
    #[arg(long)]
    strict: bool,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct EstimateArgs {
    /// Target platforms, comma-separated (defaults to the config's platforms)
    #[arg(short, long, value_delimiter = ',')]
    platforms: Vec<String>,

    /// Posts published per month
    #[arg(short = 'n', long, default_value_t = 30)]
    posts_per_month: u32,

    /// Image generation provider (none, nanobana, openai, midjourney)
    #[arg(short, long, default_value = "none")]
    image_provider: String,

    /// Generated images per post
    #[arg(long, default_value_t = 1)]
    images_per_post: u32,

    /// Seconds of generated video per post; omit to disable video
    #[arg(long)]
    video_seconds: Option<u32>,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Crosspost - content rules engine for the Crosspost publishing service
///
/// Validates draft captions against per-platform publishing limits and
/// estimates monthly plan costs.
#[derive(Parser, Debug)]
#[command(name = "crosspost")]
#[command(author = "Crosspost Team")]
#[command(version = "1.0.0")]
#[command(about = "Content compliance checks and cost estimates for cross-posting")]
#[command(long_about = "Crosspost validates draft captions against the publishing limits of each
target platform and estimates monthly plan costs.

EXAMPLES:
    crosspost \"Launch day! #launch\"                    # Check against default platforms
    crosspost -p tiktok,instagram -m 1 \"New video\"     # Specific platforms with one attachment
    crosspost check --file draft.txt --json            # Validate a file, JSON output
    crosspost estimate -p telegram,vk -n 30            # Monthly cost for 30 posts
    crosspost platforms                                # Show the limits table
    crosspost completions bash > crosspost.bash        # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SUPPORTED PLATFORMS:
    telegram, vk, instagram, facebook, tiktok, youtube, rutube")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Draft caption text; omit to read from --file
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the draft caption from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Target platforms, comma-separated (defaults to the config's platforms)
    #[arg(short, long, value_delimiter = ',')]
    platforms: Vec<String>,

    /// Number of media attachments staged in the draft
    #[arg(short, long, default_value_t = 0)]
    media_count: usize,

    /// Treat unknown platform identifiers as errors
    #[arg(long)]
    strict: bool,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");

            let mut stderr = std::io::stderr();
            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "crosspost", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Platforms { json }) => run_platforms(json),
        Some(Commands::Estimate(args)) => run_estimate(args),
        Some(Commands::Check(args)) => run_check(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let check_args = CheckArgs {
                text: cli.text,
                file: cli.file,
                platforms: cli.platforms,
                media_count: cli.media_count,
                strict: cli.strict,
                json: cli.json,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_check(check_args)
        }
    }
}

/// Load the config file, creating a default one when it does not exist
fn load_or_create_config(config_path: &str, log_level: &Option<CliLogLevel>) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(level) = log_level {
        config.log_level = level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(to_level_filter(&config.log_level));

    Ok(config)
}

fn run_check(options: CheckArgs) -> Result<()> {
    let config = load_or_create_config(&options.config_path, &options.log_level)?;

    // Resolve the draft text
    let text = match (&options.text, &options.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .context(format!("Failed to read draft from {:?}", path))?,
        (None, None) => {
            return Err(anyhow!("TEXT or --file is required"));
        }
    };

    // Resolve target platforms, falling back to the config defaults
    let platforms = if options.platforms.is_empty() {
        config.default_platforms.clone()
    } else {
        options.platforms.clone()
    };

    let mut validation_config: ValidationConfig = config.validation.into();
    if options.strict {
        validation_config.strict_platform_ids = true;
    }

    let service = ValidationService::with_config(validation_config);
    let report = service.validate_many(&text, &platforms, options.media_count);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &report.results {
            let status = if !result.valid {
                "BLOCKED"
            } else if result.warnings.is_empty() {
                "OK"
            } else {
                "WARN"
            };
            println!("{:<10} {}", result.platform_id, status);

            for issue in &result.errors {
                println!("    error: {}", issue.message);
            }
            for issue in &result.warnings {
                println!("    warning: {}", issue.message);
            }
            if result.was_truncated(&text) {
                println!(
                    "    note: caption will be truncated to {} characters",
                    result.stats.char_count
                );
            }
        }
        println!("{}", report.summary());
    }

    if !report.all_valid {
        std::process::exit(1);
    }

    Ok(())
}

fn run_estimate(options: EstimateArgs) -> Result<()> {
    let config = load_or_create_config(&options.config_path, &options.log_level)?;

    let platform_ids = if options.platforms.is_empty() {
        config.default_platforms.clone()
    } else {
        options.platforms.clone()
    };

    let platforms = platform_ids
        .iter()
        .map(|id| id.parse::<Platform>())
        .collect::<Result<Vec<_>>>()?;

    let image_provider: ImageProvider = options.image_provider.parse()?;

    let estimator = CostEstimator::with_config(CostEstimatorConfig {
        usd_to_rub: config.pricing.usd_to_rub,
        smm_hourly_rate: config.pricing.smm_hourly_rate,
        hours_per_post: config.pricing.hours_per_post,
    });

    let breakdown = estimator.estimate(&EstimateParams {
        platforms,
        posts_per_month: options.posts_per_month,
        image_provider,
        images_per_post: options.images_per_post,
        video_seconds_per_post: options.video_seconds,
    });

    if options.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("Publishing:        ${:.2}", breakdown.platform_cost);
        println!("Image generation:  ${:.2}", breakdown.image_cost);
        println!("Video generation:  ${:.2}", breakdown.video_cost);
        println!(
            "Total per month:   ${:.2} ({} RUB)",
            breakdown.total_usd, breakdown.total_rub
        );
        println!(
            "Manual SMM work:   ~${:.0} ({}% savings)",
            breakdown.manual_cost, breakdown.savings_percent
        );
        println!(
            "Recommended plan:  {} ({} RUB/month)",
            breakdown.recommended_plan.display_name(),
            breakdown.recommended_plan.monthly_price_rub()
        );
    }

    Ok(())
}

fn run_platforms(json: bool) -> Result<()> {
    if json {
        let limits: std::collections::BTreeMap<&str, &platforms::PlatformLimits> = Platform::all()
            .iter()
            .map(|p| (p.id(), p.limits()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&limits)?);
        return Ok(());
    }

    for platform in Platform::all() {
        let limits = platform.limits();
        println!("{} ({})", platform.display_name(), platform.id());
        println!(
            "    caption: {}-{} chars, hashtags: max {}, mentions: max {}",
            limits.caption.min,
            limits.caption.max,
            limits.hashtags.max_count,
            limits.mentions.max_count
        );
        println!(
            "    links: {}, media: {}up to {}",
            if limits.links.allowed {
                format!("up to {}", limits.links.max_count)
            } else {
                "not allowed".to_string()
            },
            if limits.media.required { "required, " } else { "" },
            limits.media.max_count
        );

        let formats: Vec<String> = media_specs::formats_for(*platform)
            .iter()
            .map(|f| format!("{} {}", f.name, f.aspect_ratio))
            .collect();
        println!("    formats: {}", formats.join(", "));
    }

    Ok(())
}
