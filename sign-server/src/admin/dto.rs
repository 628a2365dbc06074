//! Request and response bodies for the admin server.

use serde::{Deserialize, Serialize};

use crate::domain::Configuration;

/// The configuration form on the index page.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigForm {
    #[serde(default)]
    pub agency: String,

    /// Whitespace-separated stop IDs
    #[serde(default, rename = "stopIds")]
    pub stop_ids: String,
}

impl ConfigForm {
    /// The configuration this form describes, or `None` without an agency.
    pub fn to_configuration(&self) -> Option<Configuration> {
        let agency = self.agency.trim();
        if agency.is_empty() {
            return None;
        }
        Some(Configuration::from_stop_list(agency, &self.stop_ids))
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_without_agency() {
        let form = ConfigForm {
            agency: "  ".into(),
            stop_ids: "1234".into(),
        };
        assert_eq!(form.to_configuration(), None);
    }

    #[test]
    fn form_with_stops() {
        let form = ConfigForm {
            agency: "sf-muni".into(),
            stop_ids: "1234 5678 9012".into(),
        };
        assert_eq!(
            form.to_configuration(),
            Some(Configuration::new(
                "sf-muni",
                vec!["1234".into(), "5678".into(), "9012".into()]
            ))
        );
    }
}
