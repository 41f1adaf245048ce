//! Public transport connection lookup.
//!
//! A command-line client that asks transport.opendata.ch for connections
//! between two stops and prints them as timelines, flagging realtime
//! changes to times and platforms.

pub mod domain;
pub mod opendata;
pub mod render;
