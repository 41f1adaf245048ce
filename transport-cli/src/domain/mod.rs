//! Domain types for connection lookups.
//!
//! This module holds the model that API responses are decoded into, plus
//! the pure formatting helpers used to display it. Nothing here performs
//! I/O.

mod connection;
mod stop;
mod time;

pub use connection::{Connection, Journey, Leg, Section};
pub use stop::{Prognosis, Station, Stop, StopRole};
pub use time::{DurationError, TravelDuration, format_clock_time, format_duration, parse_timestamp};
