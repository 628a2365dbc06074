//! NextBus feed response DTOs.
//!
//! These types map directly to the public JSON feed. `RouteGroup` and
//! `DirectionGroup` are the transport-free shape the adapter works on.

use serde::Deserialize;

/// A feed list that may arrive as a single object or an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

/// Response to `command=agencyList`.
#[derive(Debug, Clone, Deserialize)]
pub struct AgencyListResponse {
    #[serde(default)]
    pub agency: OneOrMany<AgencyDto>,
}

/// One agency in the agency list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyDto {
    pub tag: String,
    pub title: String,
}

/// Response to `command=predictions`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionsResponse {
    #[serde(default)]
    pub predictions: OneOrMany<PredictionsDto>,
}

/// Predictions for one route at the requested stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionsDto {
    pub route_tag: String,

    /// Absent when the route has no predictions.
    #[serde(default)]
    pub direction: OneOrMany<DirectionDto>,
}

/// One direction of travel, e.g. "Outbound to Ocean Beach".
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionDto {
    pub title: String,

    #[serde(default)]
    pub prediction: OneOrMany<PredictionDto>,
}

/// A single predicted arrival.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDto {
    /// Minutes until arrival, as a string.
    pub minutes: String,
}

/// In-band error body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedErrorDto {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub should_retry: Option<String>,
}

/// Either the expected body or an in-band error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum FeedResponse<T> {
    Error {
        #[serde(rename = "Error")]
        error: FeedErrorDto,
    },
    Ok(T),
}

/// Predictions for one route, grouped by direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    pub route: String,
    pub directions: Vec<DirectionGroup>,
}

/// Raw arrival strings for one direction of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionGroup {
    pub title: String,
    pub arrivals: Vec<String>,
}

impl From<PredictionsDto> for RouteGroup {
    fn from(dto: PredictionsDto) -> Self {
        let directions = dto
            .direction
            .into_vec()
            .into_iter()
            .map(|d| DirectionGroup {
                title: d.title,
                arrivals: d
                    .prediction
                    .into_vec()
                    .into_iter()
                    .map(|p| p.minutes)
                    .collect(),
            })
            .collect();

        RouteGroup {
            route: dto.route_tag,
            directions,
        }
    }
}
