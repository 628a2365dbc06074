//! Transit sign relay.
//!
//! Polls NextBus for arrival predictions at a configured set of stops and
//! writes them, one line pair at a time, to a small colour display. An admin
//! web page chooses the agency and stops.

pub mod admin;
pub mod agencies;
pub mod display;
pub mod domain;
pub mod driver;
pub mod logging;
pub mod nextbus;
