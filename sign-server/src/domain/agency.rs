//! Transit agency reference data.

use serde::{Deserialize, Serialize};

/// A transit agency known to the prediction feed.
///
/// `tag` is the feed's identifier (e.g. `sf-muni`) and is unique within a
/// provider; `name` is the human-readable title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    pub tag: String,
    pub name: String,
}

impl Agency {
    pub fn new(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
        }
    }
}
