//! The display driver loop.
//!
//! Each cycle reads the sign configuration, asks for predictions at every
//! configured stop in order, and writes one message per prediction to the
//! display, pausing after each write so it stays readable.
//!
//! Any failure inside a cycle is fatal and is returned to the caller; the
//! driver binary is the only place that decides to exit.

mod config_source;
mod error;
mod format;
mod runner;
mod settings;
mod shutdown;
mod sources;


pub use config_source::{AdminClientConfig, AdminConfigSource};
pub use error::{ConfigSourceError, DriverError};
pub use format::format_message;
pub use runner::{CycleOutcome, DisplayDriver};
pub use settings::DriverSettings;
pub use shutdown::{Shutdown, ShutdownTrigger, shutdown_channel};
pub use sources::{ConfigSource, DisplaySink, PredictionSource};
