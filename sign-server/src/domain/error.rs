//! Domain error types.

/// Validation failures when building domain values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A prediction needs at least one arrival time
    #[error("prediction for {route}-{destination} has no arrivals")]
    EmptyArrivals { route: String, destination: String },

    /// Colour channel outside 0.0..=1.0
    #[error("{channel} channel must be between 0.0 and 1.0, got {value}")]
    ColorOutOfRange { channel: &'static str, value: f32 },

    /// Colour string not in `r,g,b` form
    #[error("invalid colour {0:?}: expected \"r,g,b\"")]
    InvalidColor(String),

    /// A palette needs at least one colour
    #[error("palette must contain at least one colour")]
    EmptyPalette,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyArrivals {
            route: "38".into(),
            destination: "Geary".into(),
        };
        assert_eq!(err.to_string(), "prediction for 38-Geary has no arrivals");

        let err = DomainError::ColorOutOfRange {
            channel: "red",
            value: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "red channel must be between 0.0 and 1.0, got 1.5"
        );

        let err = DomainError::EmptyPalette;
        assert_eq!(err.to_string(), "palette must contain at least one colour");
    }
}
