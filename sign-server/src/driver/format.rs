//! Display message formatting.

use crate::domain::Prediction;

/// Two-line display text for a prediction.
///
/// The first line is `<route>-<destination>`. The second shows the next
/// arrival, or the next two joined by `&`; anything after that is dropped.
pub fn format_message(prediction: &Prediction) -> String {
    let route = prediction.route();
    let destination = prediction.destination();
    let first = prediction.first_arrival();

    match prediction.second_arrival() {
        Some(second) => format!("{route}-{destination}\n{first} & {second} mins"),
        None => format!("{route}-{destination}\n{first} mins"),
    }
}
