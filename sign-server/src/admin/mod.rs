//! Admin web server.
//!
//! Lets the sign's owner pick the agency and stops to show, and serves the
//! chosen configuration as JSON for the driver.

mod dto;
mod routes;
mod state;
mod store;
pub mod templates;

pub use dto::{ConfigForm, ErrorResponse};
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use store::{ConfigStore, FileConfigStore, StoreError};
