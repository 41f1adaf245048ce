//! Connections and their sections.
//!
//! A `Connection` is one end-to-end option returned for a query. It is
//! made of ordered `Section`s, each either a ride on a vehicle or a walk
//! between stops.

use super::stop::Stop;
use super::time::format_duration;

/// The vehicle used for a ride.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Journey {
    /// Transport category code, e.g. "S" or "IR".
    pub category: String,
    /// Line number, e.g. "14".
    pub number: String,
    /// Operating company. Not shown in the timeline.
    pub operator: String,
    /// Final destination of this vehicle.
    pub to: String,
}

impl Journey {
    pub fn new(category: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            number: number.into(),
            ..Self::default()
        }
    }
}

/// How a section is travelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leg {
    /// On board a vehicle.
    Ride(Journey),
    /// On foot, transferring between stops.
    Walk,
}

impl Leg {
    /// Returns the journey if this is a ride.
    pub fn journey(&self) -> Option<&Journey> {
        match self {
            Leg::Ride(journey) => Some(journey),
            Leg::Walk => None,
        }
    }

    /// Returns true for a walking transfer.
    pub fn is_walk(&self) -> bool {
        matches!(self, Leg::Walk)
    }
}

/// One leg of a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub departure: Stop,
    pub arrival: Stop,
    pub leg: Leg,
}

impl Section {
    /// A ride from `departure` to `arrival`.
    pub fn ride(departure: Stop, arrival: Stop, journey: Journey) -> Self {
        Self {
            departure,
            arrival,
            leg: Leg::Ride(journey),
        }
    }

    /// A walking transfer from `departure` to `arrival`.
    pub fn walk(departure: Stop, arrival: Stop) -> Self {
        Self {
            departure,
            arrival,
            leg: Leg::Walk,
        }
    }
}

/// One journey option between the queried stops.
///
/// Sections are kept in the order the API returned them; consecutive
/// sections are assumed to meet at the same stop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Connection {
    pub from: Stop,
    pub to: Stop,
    /// Raw `DDdHH:MM:SS` travel time.
    pub duration: String,
    pub sections: Vec<Section>,
}

impl Connection {
    pub fn new(from: Stop, to: Stop, duration: impl Into<String>) -> Self {
        Self {
            from,
            to,
            duration: duration.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// The travel time as an English phrase, or the raw value if malformed.
    pub fn duration_phrase(&self) -> String {
        format_duration(&self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(from: &str, to: &str, leg: Leg) -> Section {
        Section {
            departure: Stop::new(from),
            arrival: Stop::new(to),
            leg,
        }
    }

    #[test]
    fn leg_accessors() {
        let ride = Leg::Ride(Journey::new("IC", "8"));
        assert_eq!(ride.journey().map(|j| j.number.as_str()), Some("8"));
        assert!(!ride.is_walk());

        assert!(Leg::Walk.journey().is_none());
        assert!(Leg::Walk.is_walk());
    }

    #[test]
    fn duration_phrase() {
        let conn = Connection::new(Stop::new("Bern"), Stop::new("Zürich HB"), "00d00:56:00");
        assert_eq!(conn.duration_phrase(), "56 minutes");

        let conn = Connection::new(Stop::new("Bern"), Stop::new("Zürich HB"), "");
        assert_eq!(conn.duration_phrase(), "");
    }

    #[test]
    fn sections_keep_insertion_order() {
        let conn = Connection::new(Stop::new("A"), Stop::new("C"), "00d00:20:00")
            .with_section(section("A", "B", Leg::Ride(Journey::new("S", "1"))))
            .with_section(section("B", "C", Leg::Walk));

        let names: Vec<&str> = conn
            .sections
            .iter()
            .map(|s| s.arrival.station_name())
            .collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn section_constructors() {
        let ride = Section::ride(Stop::new("A"), Stop::new("B"), Journey::new("S", "3"));
        assert_eq!(ride.leg, Leg::Ride(Journey::new("S", "3")));

        let walk = Section::walk(Stop::new("B"), Stop::new("C"));
        assert!(walk.leg.is_walk());
        assert_eq!(walk.arrival.station_name(), "C");
    }
}
