//! Stops, stations and realtime forecasts.

use std::fmt;

/// Whether a stop is being looked at as a departure or an arrival.
///
/// The role decides which of the stop's two scheduled times applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopRole {
    Departure,
    Arrival,
}

impl fmt::Display for StopRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopRole::Departure => f.write_str("departure"),
            StopRole::Arrival => f.write_str("arrival"),
        }
    }
}

/// A station or stop place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Station {
    pub name: String,
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Realtime forecast for a stop.
///
/// Empty strings mean the API reported no change for that field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Prognosis {
    pub platform: String,
    pub arrival: String,
    pub departure: String,
    /// First-class occupancy indicator, if reported.
    pub capacity_1st: Option<String>,
    /// Second-class occupancy indicator, if reported.
    pub capacity_2nd: Option<String>,
}

impl Prognosis {
    /// Returns the forecast time for the given role.
    pub fn time(&self, role: StopRole) -> &str {
        match role {
            StopRole::Departure => &self.departure,
            StopRole::Arrival => &self.arrival,
        }
    }
}

/// A single departure or arrival event at a station.
///
/// Times are kept as the raw ISO 8601 strings from the API so that the
/// deviation check compares exactly what was sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stop {
    /// Scheduled departure time, empty if none.
    pub departure: String,
    /// Scheduled arrival time, empty if none.
    pub arrival: String,
    /// Scheduled platform, empty if unknown.
    pub platform: String,
    pub station: Station,
    pub prognosis: Option<Prognosis>,
}

impl Stop {
    /// Create a stop at the named station with no times or platform.
    pub fn new(station_name: impl Into<String>) -> Self {
        Self {
            station: Station::new(station_name),
            ..Self::default()
        }
    }

    /// Set the scheduled departure time.
    pub fn with_departure(mut self, time: impl Into<String>) -> Self {
        self.departure = time.into();
        self
    }

    /// Set the scheduled arrival time.
    pub fn with_arrival(mut self, time: impl Into<String>) -> Self {
        self.arrival = time.into();
        self
    }

    /// Set the scheduled platform.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Attach a realtime forecast.
    pub fn with_prognosis(mut self, prognosis: Prognosis) -> Self {
        self.prognosis = Some(prognosis);
        self
    }

    /// Returns the station name.
    pub fn station_name(&self) -> &str {
        &self.station.name
    }

    /// Returns the scheduled time for the given role.
    pub fn scheduled_time(&self, role: StopRole) -> &str {
        match role {
            StopRole::Departure => &self.departure,
            StopRole::Arrival => &self.arrival,
        }
    }

    /// Whether the realtime forecast differs from the schedule.
    ///
    /// Compares the role's time and the platform. A forecast field only
    /// counts when it is non-empty. Comparison is by exact text, so the
    /// same instant written two different ways still counts as a change.
    pub fn has_deviation(&self, role: StopRole) -> bool {
        let Some(prognosis) = &self.prognosis else {
            return false;
        };

        let forecast_time = prognosis.time(role);
        let time_changed = !forecast_time.is_empty() && forecast_time != self.scheduled_time(role);
        let platform_changed =
            !prognosis.platform.is_empty() && prognosis.platform != self.platform;

        time_changed || platform_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULED_DEP: &str = "2024-03-15T10:02:00+0100";
    const SCHEDULED_ARR: &str = "2024-03-15T10:58:00+0100";

    fn bern() -> Stop {
        Stop::new("Bern")
            .with_departure(SCHEDULED_DEP)
            .with_arrival(SCHEDULED_ARR)
            .with_platform("7")
    }

    #[test]
    fn no_prognosis_never_warns() {
        let stop = bern();
        assert!(!stop.has_deviation(StopRole::Departure));
        assert!(!stop.has_deviation(StopRole::Arrival));
    }

    #[test]
    fn empty_prognosis_does_not_warn() {
        let stop = bern().with_prognosis(Prognosis::default());
        assert!(!stop.has_deviation(StopRole::Departure));
        assert!(!stop.has_deviation(StopRole::Arrival));
    }

    #[test]
    fn matching_departure_does_not_warn() {
        let stop = bern().with_prognosis(Prognosis {
            departure: SCHEDULED_DEP.into(),
            ..Prognosis::default()
        });
        assert!(!stop.has_deviation(StopRole::Departure));
    }

    #[test]
    fn delayed_departure_warns() {
        let stop = bern().with_prognosis(Prognosis {
            departure: "2024-03-15T10:05:00+0100".into(),
            ..Prognosis::default()
        });
        assert!(stop.has_deviation(StopRole::Departure));
        // Departure forecast is irrelevant to the arrival role.
        assert!(!stop.has_deviation(StopRole::Arrival));
    }

    #[test]
    fn formatting_only_difference_warns() {
        let stop = bern().with_prognosis(Prognosis {
            departure: "2024-03-15T10:02:00+01:00".into(),
            ..Prognosis::default()
        });
        assert!(stop.has_deviation(StopRole::Departure));
    }

    #[test]
    fn delayed_arrival_warns_only_for_arrival_role() {
        let stop = bern().with_prognosis(Prognosis {
            arrival: "2024-03-15T11:01:00+0100".into(),
            ..Prognosis::default()
        });
        assert!(stop.has_deviation(StopRole::Arrival));
        assert!(!stop.has_deviation(StopRole::Departure));
    }

    #[test]
    fn platform_change_warns_for_both_roles() {
        let stop = bern().with_prognosis(Prognosis {
            platform: "8".into(),
            ..Prognosis::default()
        });
        assert!(stop.has_deviation(StopRole::Departure));
        assert!(stop.has_deviation(StopRole::Arrival));
    }

    #[test]
    fn same_platform_does_not_warn() {
        let stop = bern().with_prognosis(Prognosis {
            platform: "7".into(),
            ..Prognosis::default()
        });
        assert!(!stop.has_deviation(StopRole::Departure));
    }

    #[test]
    fn platform_forecast_on_unknown_platform_warns() {
        let stop = Stop::new("Olten").with_prognosis(Prognosis {
            platform: "3".into(),
            ..Prognosis::default()
        });
        assert!(stop.has_deviation(StopRole::Arrival));
    }

    #[test]
    fn scheduled_time_by_role() {
        let stop = bern();
        assert_eq!(stop.scheduled_time(StopRole::Departure), SCHEDULED_DEP);
        assert_eq!(stop.scheduled_time(StopRole::Arrival), SCHEDULED_ARR);
    }

    #[test]
    fn role_display() {
        assert_eq!(StopRole::Departure.to_string(), "departure");
        assert_eq!(StopRole::Arrival.to_string(), "arrival");
    }
}
