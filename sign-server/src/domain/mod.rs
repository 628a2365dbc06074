//! Domain types for the sign relay.
//!
//! Values here are validated at construction, so the driver and the admin
//! layer can trust what they receive.

mod agency;
mod color;
mod config;
mod error;
mod prediction;
mod write;

pub use agency::Agency;
pub use color::{Color, Palette};
pub use config::Configuration;
pub use error::DomainError;
pub use prediction::Prediction;
pub use write::WriteRequest;
