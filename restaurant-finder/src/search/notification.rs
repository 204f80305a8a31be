//! User-visible notifications about search outcomes.

use serde::Serialize;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A toast-style message shown after a search settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    /// Restaurants were found.
    pub fn found(count: usize) -> Self {
        Self {
            severity: Severity::Success,
            title: "Success".to_string(),
            description: format!("Found {count} restaurants matching your criteria."),
        }
    }

    /// The search succeeded but matched nothing.
    pub fn no_results() -> Self {
        Self {
            severity: Severity::Info,
            title: "No Results".to_string(),
            description: "No restaurants found matching your criteria.".to_string(),
        }
    }

    /// The search could not be completed.
    pub fn fetch_failed() -> Self {
        Self {
            severity: Severity::Error,
            title: "Error".to_string(),
            description: "Failed to fetch restaurants. Please try again.".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
