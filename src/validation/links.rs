/*!
 * Link policy validation for draft content.
 *
 * Links on a platform that forbids them block publishing entirely; link
 * counts above the recommended maximum only warn. The two branches are
 * mutually exclusive for a single invocation.
 */

use crate::platforms::LinkPolicy;

/// Types of link policy issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkIssue {
    /// The platform does not permit links at all
    NotAllowed,
    /// More links than the platform recommends
    TooMany { count: usize, max: usize },
}

impl std::fmt::Display for LinkIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkIssue::NotAllowed => {
                write!(f, "Links are not allowed on this platform")
            }
            LinkIssue::TooMany { count, max } => {
                write!(f, "Too many links ({}/{})", count, max)
            }
        }
    }
}

/// Link policy validator
pub struct LinkValidator;

impl LinkValidator {
    /// Validate a caption's link count against the platform policy
    pub fn validate(link_count: usize, policy: &LinkPolicy) -> Vec<LinkIssue> {
        if !policy.allowed && link_count > 0 {
            vec![LinkIssue::NotAllowed]
        } else if link_count > policy.max_count {
            vec![LinkIssue::TooMany {
                count: link_count,
                max: policy.max_count,
            }]
        } else {
            vec![]
        }
    }
}
