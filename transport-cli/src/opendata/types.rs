//! transport.opendata.ch response DTOs.
//!
//! These types map directly to the `/v1/connections` JSON response. Every
//! field is optional because the API sends `null` or omits fields freely;
//! conversion to domain types fills the gaps with empty values.

use serde::Deserialize;

/// Response from `GET /v1/connections`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionsResponse {
    /// Candidate connections, in the order the API ranks them.
    pub connections: Option<Vec<ConnectionDto>>,
}

/// One connection between the queried stops.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionDto {
    /// Origin checkpoint.
    pub from: Option<CheckpointDto>,

    /// Destination checkpoint.
    pub to: Option<CheckpointDto>,

    /// Travel time, e.g. "00d00:55:00".
    pub duration: Option<String>,

    /// Legs of the connection.
    pub sections: Option<Vec<SectionDto>>,
}

/// One leg of a connection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionDto {
    /// Where the leg starts.
    pub departure: Option<CheckpointDto>,

    /// Where the leg ends.
    pub arrival: Option<CheckpointDto>,

    /// Vehicle information. `null` for walking transfers.
    pub journey: Option<JourneyDto>,
}

/// Vehicle used for a section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JourneyDto {
    /// Category code, e.g. "S", "IC", "B".
    pub category: Option<String>,

    /// Line number.
    pub number: Option<String>,

    /// Operating company.
    pub operator: Option<String>,

    /// Final destination of the vehicle.
    pub to: Option<String>,
}

/// A stop event: arrival and/or departure at a station.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckpointDto {
    /// Scheduled arrival (ISO 8601).
    pub arrival: Option<String>,

    /// Scheduled departure (ISO 8601).
    pub departure: Option<String>,

    /// Scheduled platform.
    pub platform: Option<String>,

    /// The station itself.
    pub station: Option<LocationDto>,

    /// Realtime forecast, when the operator publishes one.
    pub prognosis: Option<PrognosisDto>,
}

/// A station or other location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationDto {
    /// Station identifier.
    pub id: Option<String>,

    /// Human-readable name.
    pub name: Option<String>,
}

/// Realtime forecast for a checkpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrognosisDto {
    /// Forecast platform.
    pub platform: Option<String>,

    /// Forecast arrival (ISO 8601).
    pub arrival: Option<String>,

    /// Forecast departure (ISO 8601).
    pub departure: Option<String>,

    /// First-class occupancy.
    #[serde(rename = "capacity1st")]
    pub capacity_1st: Option<CapacityDto>,

    /// Second-class occupancy.
    #[serde(rename = "capacity2nd")]
    pub capacity_2nd: Option<CapacityDto>,
}

/// Occupancy indicator. The API sends a small integer, older payloads a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CapacityDto {
    Level(i64),
    Text(String),
}

impl CapacityDto {
    /// The indicator as display text.
    pub fn as_text(&self) -> String {
        match self {
            CapacityDto::Level(level) => level.to_string(),
            CapacityDto::Text(text) => text.clone(),
        }
    }
}
