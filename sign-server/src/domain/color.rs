//! Display colours and the stop palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// An RGB backlight colour, each channel in `0.0..=1.0`.
///
/// Construction validates the range, including on deserialization, so a
/// `Color` is always safe to send to the display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColor")]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
}

#[derive(Deserialize)]
struct RawColor {
    #[serde(default)]
    red: f32,
    #[serde(default)]
    green: f32,
    #[serde(default)]
    blue: f32,
}

impl TryFrom<RawColor> for Color {
    type Error = DomainError;

    fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
        Color::new(raw.red, raw.green, raw.blue)
    }
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const PURPLE: Color = Color::rgb(0.6, 0.0, 0.8);

    const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Create a colour, rejecting channels outside `0.0..=1.0` (and NaN).
    pub fn new(red: f32, green: f32, blue: f32) -> Result<Self, DomainError> {
        check_channel("red", red)?;
        check_channel("green", green)?;
        check_channel("blue", blue)?;
        Ok(Self::rgb(red, green, blue))
    }
}

fn check_channel(channel: &'static str, value: f32) -> Result<(), DomainError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::ColorOutOfRange { channel, value })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}

/// Parses `"r,g,b"`, e.g. `"0.6,0,0.8"`.
impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidColor(s.to_string());

        let channels = s
            .split(',')
            .map(|c| c.trim().parse::<f32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match channels.as_slice() {
            [red, green, blue] => Color::new(*red, *green, *blue),
            _ => Err(invalid()),
        }
    }
}

/// Ordered, non-empty list of colours cycled across stops.
///
/// The colour for a stop is chosen by the stop's position in the
/// configuration, wrapping around once stops outnumber colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette(Vec<Color>);

#[allow(clippy::len_without_is_empty)]
impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, DomainError> {
        if colors.is_empty() {
            return Err(DomainError::EmptyPalette);
        }
        Ok(Self(colors))
    }

    /// Colour for the stop at `stop_index` (0-based).
    pub fn color_for_stop(&self, stop_index: usize) -> Color {
        self.0[stop_index % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Color::RED,
            Color::YELLOW,
            Color::GREEN,
            Color::BLUE,
            Color::PURPLE,
        ])
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn channel() -> impl Strategy<Value = f32> {
        0.0f32..=1.0
    }

    fn color() -> impl Strategy<Value = Color> {
        (channel(), channel(), channel()).prop_map(|(r, g, b)| Color::new(r, g, b).unwrap())
    }

    proptest! {
        #[test]
        fn stop_colour_repeats_every_palette_length(
            colors in prop::collection::vec(color(), 1..8),
            index in 0usize..1000,
        ) {
            let palette = Palette::new(colors.clone()).unwrap();
            let len = colors.len();
            prop_assert_eq!(palette.color_for_stop(index), colors[index % len]);
            prop_assert_eq!(palette.color_for_stop(index), palette.color_for_stop(index + len));
        }
    }
}
