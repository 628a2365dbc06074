//! The sign's display.
//!
//! `DisplayClient` sends write requests to the display server running next
//! to the LCD. `fake` is a stand-in server for development without hardware.

mod client;
mod error;
pub mod fake;

pub use client::{DisplayClient, DisplayConfig};
pub use error::DisplayError;
