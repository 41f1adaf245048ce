//! transport.opendata.ch connections client.
//!
//! This module provides an HTTP client for the Swiss public transport
//! API's `/v1/connections` endpoint, and the decoding of its responses
//! into domain types.
//!
//! Key characteristics of the API:
//! - No authentication
//! - Times are ISO 8601 with a `+0100`-style offset
//! - Durations are `DDdHH:MM:SS` strings
//! - Fields are frequently `null`; a `null` journey marks a walk

mod client;
mod convert;
mod error;
mod file;
mod types;

pub use client::{DEFAULT_BASE_URL, OpendataClient, OpendataConfig};
pub use convert::{convert_connection, convert_response, decode_connections};
pub use error::{DecodeError, OpendataError};
pub use file::read_response_file;
pub use types::{
    CapacityDto, CheckpointDto, ConnectionDto, ConnectionsResponse, JourneyDto, LocationDto,
    PrognosisDto, SectionDto,
};
