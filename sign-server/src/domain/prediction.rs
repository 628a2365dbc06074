//! Arrival predictions.

use super::DomainError;

/// Upcoming arrivals of one route in one direction at a stop.
///
/// `next_arrivals` holds minutes until each arrival, in the order the feed
/// gave them. It is never empty: a direction with no arrivals produces no
/// `Prediction` at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    route: String,
    destination: String,
    next_arrivals: Vec<u32>,
}

impl Prediction {
    pub fn new(
        route: impl Into<String>,
        destination: impl Into<String>,
        next_arrivals: Vec<u32>,
    ) -> Result<Self, DomainError> {
        let route = route.into();
        let destination = destination.into();

        if next_arrivals.is_empty() {
            return Err(DomainError::EmptyArrivals { route, destination });
        }

        Ok(Self {
            route,
            destination,
            next_arrivals,
        })
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn next_arrivals(&self) -> &[u32] {
        &self.next_arrivals
    }

    /// Minutes until the next arrival.
    pub fn first_arrival(&self) -> u32 {
        self.next_arrivals[0]
    }

    /// Minutes until the arrival after next, if the feed reported one.
    pub fn second_arrival(&self) -> Option<u32> {
        self.next_arrivals.get(1).copied()
    }
}
