//! Time entry model shared by the API layer and the report composer.

use chrono::{DateTime, FixedOffset};

/// One tracked interval of work as returned by the detailed report.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    /// Project name, empty when the entry has no project.
    pub project: String,
    /// Tags in the order the API returned them.
    pub tags: Vec<String>,
    pub description: String,
    /// Duration in milliseconds.
    pub duration: i64,
    /// Start time, only used to order entries before grouping.
    pub start: DateTime<FixedOffset>,
}

impl TimeEntry {
    pub fn new(project: &str, tags: &[&str], description: &str, duration: i64, start: DateTime<FixedOffset>) -> Self {
        Self {
            project: project.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            description: description.to_string(),
            duration,
            start,
        }
    }
}
