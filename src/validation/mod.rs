/*!
 * Validation module for draft content compliance.
 *
 * This module decides whether a draft caption can be published as-is on
 * each target platform, and what automatic adaptation applies when it
 * cannot:
 * - Caption length checks with automatic truncation
 * - Hashtag and mention count checks
 * - Link policy checks
 * - Media attachment checks
 *
 * # Architecture
 *
 * - `stats`: Extracts content statistics via pattern scans
 * - `caption`: Validates caption length and produces adapted text
 * - `entities`: Validates hashtag and mention usage
 * - `links`: Validates link policy compliance
 * - `media`: Validates media attachment policy
 * - `service`: Orchestrates all validators per platform
 */

pub mod caption;
pub mod entities;
pub mod links;
pub mod media;
pub mod service;
pub mod stats;

// Re-export main types
pub use service::{
    IssueSeverity, ValidationConfig, ValidationIssue, ValidationReport, ValidationResult,
    ValidationService,
};
pub use stats::ContentStats;
