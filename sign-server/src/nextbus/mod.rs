//! NextBus prediction feed.
//!
//! This module provides an HTTP client for the NextBus public JSON feed and
//! the adapter that turns its prediction records into domain `Prediction`s.
//!
//! Feed quirks worth knowing:
//! - Every value is a string, including minutes until arrival
//! - A list with one element is sent as a bare object, not an array
//! - Errors come back in-band with a 200 status as `{"Error": {...}}`

mod client;
mod convert;
mod error;
mod service;
mod types;

pub use client::{NextbusClient, NextbusConfig};
pub use convert::{ConversionError, normalize};
pub use error::{ErrorCode, NextbusError, PredictionError};
pub use service::{PredictionFeed, PredictionService};
pub use types::{
    AgencyDto, AgencyListResponse, DirectionDto, DirectionGroup, OneOrMany, PredictionDto,
    PredictionsDto, PredictionsResponse, RouteGroup,
};
