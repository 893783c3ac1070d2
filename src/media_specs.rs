/*!
 * Platform media format specifications and aspect-ratio classification.
 *
 * Each platform accepts a fixed set of media formats; the first-listed
 * format is the adaptation target when an upload needs cropping. The
 * classifier maps raw pixel dimensions to the named aspect-ratio classes
 * the dashboard displays.
 */

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::platforms::Platform;

/// Preferred orientation of a media format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    Portrait,
    Square,
    /// Any orientation is accepted
    Flexible,
}

/// A media format accepted by a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaFormat {
    /// Placement name, e.g. "Feed" or "Story/Reels"
    pub name: &'static str,
    /// Aspect ratio label, e.g. "16:9"; "any" for flexible formats
    pub aspect_ratio: &'static str,
    /// Target dimensions in pixels (width, height); the upper bound for
    /// flexible formats
    pub dimensions: (u32, u32),
    /// Preferred orientation
    pub orientation: Orientation,
}

/// Media formats per platform, first entry is the adaptation target
static MEDIA_SPECS: Lazy<HashMap<Platform, Vec<MediaFormat>>> = Lazy::new(|| {
    let mut specs = HashMap::new();

    specs.insert(
        Platform::Telegram,
        vec![MediaFormat {
            name: "Post",
            aspect_ratio: "any",
            dimensions: (2560, 2560),
            orientation: Orientation::Flexible,
        }],
    );

    specs.insert(
        Platform::Vk,
        vec![
            MediaFormat {
                name: "Post",
                aspect_ratio: "16:9",
                dimensions: (1920, 1080),
                orientation: Orientation::Horizontal,
            },
            MediaFormat {
                name: "Story",
                aspect_ratio: "9:16",
                dimensions: (1080, 1920),
                orientation: Orientation::Vertical,
            },
        ],
    );

    specs.insert(
        Platform::Instagram,
        vec![
            MediaFormat {
                name: "Feed",
                aspect_ratio: "4:5",
                dimensions: (1080, 1350),
                orientation: Orientation::Portrait,
            },
            MediaFormat {
                name: "Story/Reels",
                aspect_ratio: "9:16",
                dimensions: (1080, 1920),
                orientation: Orientation::Vertical,
            },
            MediaFormat {
                name: "Square",
                aspect_ratio: "1:1",
                dimensions: (1080, 1080),
                orientation: Orientation::Square,
            },
        ],
    );

    specs.insert(
        Platform::Facebook,
        vec![
            MediaFormat {
                name: "Feed",
                aspect_ratio: "16:9",
                dimensions: (1920, 1080),
                orientation: Orientation::Horizontal,
            },
            MediaFormat {
                name: "Reels",
                aspect_ratio: "9:16",
                dimensions: (1080, 1920),
                orientation: Orientation::Vertical,
            },
            MediaFormat {
                name: "Square",
                aspect_ratio: "1:1",
                dimensions: (1080, 1080),
                orientation: Orientation::Square,
            },
        ],
    );

    specs.insert(
        Platform::Tiktok,
        vec![MediaFormat {
            name: "Video",
            aspect_ratio: "9:16",
            dimensions: (1080, 1920),
            orientation: Orientation::Vertical,
        }],
    );

    specs.insert(
        Platform::Youtube,
        vec![
            MediaFormat {
                name: "Video",
                aspect_ratio: "16:9",
                dimensions: (1920, 1080),
                orientation: Orientation::Horizontal,
            },
            MediaFormat {
                name: "Shorts",
                aspect_ratio: "9:16",
                dimensions: (1080, 1920),
                orientation: Orientation::Vertical,
            },
        ],
    );

    specs.insert(
        Platform::Rutube,
        vec![MediaFormat {
            name: "Video",
            aspect_ratio: "16:9",
            dimensions: (1920, 1080),
            orientation: Orientation::Horizontal,
        }],
    );

    specs
});

/// Media formats accepted by a platform
pub fn formats_for(platform: Platform) -> &'static [MediaFormat] {
    MEDIA_SPECS
        .get(&platform)
        .expect("every platform has a media spec entry")
}

/// The adaptation target format for a platform (first-listed)
pub fn primary_format(platform: Platform) -> &'static MediaFormat {
    &formats_for(platform)[0]
}

/// Named aspect-ratio class of an uploaded asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AspectClass {
    /// 1:1 within a 0.05 tolerance
    Square,
    /// 16:9 within a 0.1 tolerance
    Widescreen,
    /// 9:16 within a 0.1 tolerance
    Vertical,
    /// 4:5 within a 0.1 tolerance
    Portrait,
    /// 4:3 within a 0.1 tolerance
    FourThree,
    /// 3:4 within a 0.1 tolerance
    ThreeFour,
    /// Anything else, carrying the raw width/height ratio
    Custom(f64),
}

impl std::fmt::Display for AspectClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AspectClass::Square => write!(f, "1:1 (square)"),
            AspectClass::Widescreen => write!(f, "16:9 (horizontal)"),
            AspectClass::Vertical => write!(f, "9:16 (vertical)"),
            AspectClass::Portrait => write!(f, "4:5 (portrait)"),
            AspectClass::FourThree => write!(f, "4:3"),
            AspectClass::ThreeFour => write!(f, "3:4"),
            AspectClass::Custom(ratio) => write!(f, "{:.2}:1", ratio),
        }
    }
}

/// Classify pixel dimensions into the named aspect-ratio classes.
///
/// The square tolerance is tighter than the others, and the classes are
/// tested in a fixed precedence order, so ambiguous ratios resolve the
/// same way the dashboard resolves them.
pub fn classify_aspect_ratio(width: u32, height: u32) -> AspectClass {
    let ratio = width as f64 / height as f64;

    if (ratio - 1.0).abs() < 0.05 {
        AspectClass::Square
    } else if (ratio - 16.0 / 9.0).abs() < 0.1 {
        AspectClass::Widescreen
    } else if (ratio - 9.0 / 16.0).abs() < 0.1 {
        AspectClass::Vertical
    } else if (ratio - 4.0 / 5.0).abs() < 0.1 {
        AspectClass::Portrait
    } else if (ratio - 4.0 / 3.0).abs() < 0.1 {
        AspectClass::FourThree
    } else if (ratio - 3.0 / 4.0).abs() < 0.1 {
        AspectClass::ThreeFour
    } else {
        AspectClass::Custom(ratio)
    }
}
