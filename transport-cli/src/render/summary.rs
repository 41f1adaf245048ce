//! One-line connection summaries.

use crate::domain::{Connection, StopRole, format_clock_time};

/// Render a connection on one line: origin and destination with their
/// times, then the travel time.
///
/// ```text
/// Bern (10:04) → Luzern (11:20), 1 hour 16 minutes
/// ```
pub fn render_summary(connection: &Connection) -> String {
    let departure = format_clock_time(connection.from.scheduled_time(StopRole::Departure));
    let arrival = format_clock_time(connection.to.scheduled_time(StopRole::Arrival));

    format!(
        "{} ({}) → {} ({}), {}",
        connection.from.station_name(),
        departure,
        connection.to.station_name(),
        arrival,
        connection.duration_phrase()
    )
}
