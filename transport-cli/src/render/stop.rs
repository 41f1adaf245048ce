//! Stop labels.

use crate::domain::{Stop, StopRole, format_clock_time};

/// Appended to a stop whose realtime forecast differs from the schedule.
pub const WARNING_MARKER: &str = " ⚠️";

/// Render a stop as `[ Name (HH:MM | Plat P) ]`.
///
/// The role picks the departure or arrival time, and a warning marker is
/// added when the forecast deviates.
///
/// # Examples
///
/// ```
/// use transport_cli::domain::{Stop, StopRole};
/// use transport_cli::render::render_stop;
///
/// let stop = Stop::new("Bern")
///     .with_departure("2024-03-15T10:02:00+0100")
///     .with_platform("7");
/// assert_eq!(render_stop(&stop, StopRole::Departure), "[ Bern (10:02 | Plat 7) ]");
/// ```
pub fn render_stop(stop: &Stop, role: StopRole) -> String {
    let time = format_clock_time(stop.scheduled_time(role));
    let marker = if stop.has_deviation(role) {
        WARNING_MARKER
    } else {
        ""
    };

    format!(
        "[ {} ({} | Plat {}{}) ]",
        stop.station_name(),
        time,
        stop.platform,
        marker
    )
}
