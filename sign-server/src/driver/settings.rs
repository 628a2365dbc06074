//! Driver settings.

use std::time::Duration;

use crate::domain::Palette;

/// Pacing and colour settings for the driver.
#[derive(Debug, Clone)]
pub struct DriverSettings {
    /// Colours cycled across stops by position.
    pub palette: Palette,

    /// Pause after every display write.
    pub write_interval: Duration,
}

impl DriverSettings {
    pub fn new(palette: Palette, write_interval: Duration) -> Self {
        Self {
            palette,
            write_interval,
        }
    }

    /// Set a custom palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the pause after each write.
    pub fn with_write_interval(mut self, interval: Duration) -> Self {
        self.write_interval = interval;
        self
    }
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            write_interval: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Color;

    #[test]
    fn default_settings() {
        let settings = DriverSettings::default();
        assert_eq!(settings.palette.len(), 5);
        assert_eq!(settings.write_interval, Duration::from_secs(5));
    }

    #[test]
    fn builder() {
        let palette = Palette::new(vec![Color::GREEN]).unwrap();
        let settings = DriverSettings::default()
            .with_palette(palette.clone())
            .with_write_interval(Duration::from_millis(500));
        assert_eq!(settings.palette, palette);
        assert_eq!(settings.write_interval, Duration::from_millis(500));
    }
}
