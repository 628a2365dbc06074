//! Conversion from feed prediction groups to domain predictions.

use crate::domain::{DomainError, Prediction};

use super::types::RouteGroup;

/// Error during feed to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Arrival minutes were not a non-negative integer
    #[error("route {route}: invalid arrival minutes {value:?}")]
    InvalidMinutes { route: String, value: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Convert feed prediction groups into domain predictions.
///
/// Produces one `Prediction` per direction that has at least one arrival,
/// in feed order. Directions without arrivals are skipped. A single bad
/// arrival value fails the whole batch; nothing partial is returned.
pub fn normalize(groups: &[RouteGroup]) -> Result<Vec<Prediction>, ConversionError> {
    let mut predictions = Vec::new();

    for group in groups {
        for direction in &group.directions {
            if direction.arrivals.is_empty() {
                continue;
            }

            let minutes = direction
                .arrivals
                .iter()
                .map(|raw| parse_minutes(&group.route, raw))
                .collect::<Result<Vec<_>, _>>()?;

            predictions.push(Prediction::new(
                group.route.clone(),
                direction.title.clone(),
                minutes,
            )?);
        }
    }

    Ok(predictions)
}

fn parse_minutes(route: &str, raw: &str) -> Result<u32, ConversionError> {
    raw.parse().map_err(|_| ConversionError::InvalidMinutes {
        route: route.to_string(),
        value: raw.to_string(),
    })
}
