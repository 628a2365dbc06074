//! Sign configuration.

use serde::{Deserialize, Serialize};

/// Which agency and stops the sign shows.
///
/// Stop order matters: it decides the order messages appear in and which
/// palette colour each stop gets. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub agency: String,
    #[serde(default)]
    pub stop_ids: Vec<String>,
}

impl Configuration {
    pub fn new(agency: impl Into<String>, stop_ids: Vec<String>) -> Self {
        Self {
            agency: agency.into(),
            stop_ids,
        }
    }

    /// Build a configuration from a whitespace-separated list of stop IDs.
    pub fn from_stop_list(agency: impl Into<String>, stops: &str) -> Self {
        Self::new(
            agency,
            stops.split_whitespace().map(str::to_string).collect(),
        )
    }
}
