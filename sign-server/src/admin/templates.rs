//! Askama templates for the admin page.

use askama::Template;

use crate::domain::{Agency, Configuration};

/// Configuration page with agency picker and stop list.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub agencies: Vec<AgencyOption>,
    pub stop_ids: String,
}

impl IndexTemplate {
    /// Build the page for the current configuration.
    ///
    /// A configured agency missing from the agency list is still offered, so
    /// resubmitting the form never silently drops it.
    pub fn new(config: &Configuration, agencies: &[Agency]) -> Self {
        let mut options: Vec<AgencyOption> = agencies
            .iter()
            .map(|a| AgencyOption {
                tag: a.tag.clone(),
                name: a.name.clone(),
                selected: a.tag == config.agency,
            })
            .collect();

        if !config.agency.is_empty() && !options.iter().any(|o| o.selected) {
            options.insert(
                0,
                AgencyOption {
                    tag: config.agency.clone(),
                    name: config.agency.clone(),
                    selected: true,
                },
            );
        }

        Self {
            agencies: options,
            stop_ids: config.stop_ids.join(" "),
        }
    }
}

/// One entry in the agency picker.
#[derive(Debug, Clone, PartialEq)]
pub struct AgencyOption {
    pub tag: String,
    pub name: String,
    pub selected: bool,
}
