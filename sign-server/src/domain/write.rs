//! Display write requests.

use serde::{Deserialize, Serialize};

use super::Color;

/// A message and backlight colour for the display.
///
/// This is the only thing the driver ever sends to the sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteRequest {
    pub message: String,
    pub color: Color,
}

impl WriteRequest {
    pub fn new(message: impl Into<String>, color: Color) -> Self {
        Self {
            message: message.into(),
            color,
        }
    }
}
