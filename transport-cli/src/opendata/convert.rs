//! Conversion from opendata DTOs to domain types.
//!
//! Decoding is tolerant: any field the API leaves out or sends as `null`
//! becomes an empty value. Only a body that is not JSON, or whose shape
//! contradicts the response structure, is an error.

use tracing::{debug, trace};

use crate::domain::{Connection, Journey, Leg, Prognosis, Section, Station, Stop};

use super::error::DecodeError;
use super::types::{
    CheckpointDto, ConnectionDto, ConnectionsResponse, JourneyDto, PrognosisDto, SectionDto,
};

/// Decode a raw `/v1/connections` response body.
///
/// Connections keep the order the API returned them in.
///
/// # Examples
///
/// ```
/// use transport_cli::opendata::decode_connections;
///
/// let body = br#"{"connections": [{"from": {"station": {"name": "Bern"}}, "duration": "00d00:55:00"}]}"#;
/// let connections = decode_connections(body).unwrap();
/// assert_eq!(connections[0].from.station_name(), "Bern");
/// assert!(connections[0].sections.is_empty());
///
/// assert!(decode_connections(b"<html>").is_err());
/// ```
pub fn decode_connections(body: &[u8]) -> Result<Vec<Connection>, DecodeError> {
    let response: ConnectionsResponse =
        serde_json::from_slice(body).map_err(|e| DecodeError::new(e, body))?;

    let connections = convert_response(response);
    debug!(count = connections.len(), "decoded connections");
    Ok(connections)
}

/// Convert a whole response to domain connections.
pub fn convert_response(response: ConnectionsResponse) -> Vec<Connection> {
    response
        .connections
        .unwrap_or_default()
        .into_iter()
        .map(convert_connection)
        .collect()
}

/// Convert a single connection.
pub fn convert_connection(dto: ConnectionDto) -> Connection {
    let sections: Vec<Section> = dto
        .sections
        .unwrap_or_default()
        .into_iter()
        .map(convert_section)
        .collect();

    trace!(sections = sections.len(), "converted connection");

    Connection {
        from: convert_stop(dto.from),
        to: convert_stop(dto.to),
        duration: dto.duration.unwrap_or_default(),
        sections,
    }
}

fn convert_section(dto: SectionDto) -> Section {
    Section {
        departure: convert_stop(dto.departure),
        arrival: convert_stop(dto.arrival),
        leg: convert_leg(dto.journey),
    }
}

/// A section without journey data is a walking transfer.
fn convert_leg(dto: Option<JourneyDto>) -> Leg {
    match dto {
        Some(journey) => Leg::Ride(Journey {
            category: journey.category.unwrap_or_default(),
            number: journey.number.unwrap_or_default(),
            operator: journey.operator.unwrap_or_default(),
            to: journey.to.unwrap_or_default(),
        }),
        None => Leg::Walk,
    }
}

fn convert_stop(dto: Option<CheckpointDto>) -> Stop {
    let Some(dto) = dto else {
        return Stop::default();
    };

    Stop {
        departure: dto.departure.unwrap_or_default(),
        arrival: dto.arrival.unwrap_or_default(),
        platform: dto.platform.unwrap_or_default(),
        station: Station {
            name: dto.station.and_then(|s| s.name).unwrap_or_default(),
        },
        prognosis: dto.prognosis.map(convert_prognosis),
    }
}

fn convert_prognosis(dto: PrognosisDto) -> Prognosis {
    Prognosis {
        platform: dto.platform.unwrap_or_default(),
        arrival: dto.arrival.unwrap_or_default(),
        departure: dto.departure.unwrap_or_default(),
        capacity_1st: dto.capacity_1st.map(|c| c.as_text()),
        capacity_2nd: dto.capacity_2nd.map(|c| c.as_text()),
    }
}
