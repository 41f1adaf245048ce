//! Multi-leg timelines.
//!
//! A timeline lists the stops of a connection top to bottom, with the leg
//! used between each pair of stops drawn in between:
//!
//! ```text
//! [ Bern (10:04 | Plat 5) ]
//!     ──( IR 15 )──▶
//! [ Olten (10:30 | Plat 7 ⚠️) ]
//!     ──( S 9 )──▶
//! [ Luzern (11:20 | Plat 13) ]
//! ```

use crate::domain::{Connection, StopRole};

use super::leg::{WALK_LABEL, render_leg};
use super::stop::render_stop;

/// Indent for leg labels between sections.
const LEG_INDENT: &str = "    ";

/// Indent for the walk label of a connection without sections.
const DIRECT_WALK_INDENT: &str = "  ";

/// The lines of a connection's timeline, without trailing newlines.
///
/// With N sections this is 2N + 1 lines: the first departure, then a leg
/// label and an arrival per section. A connection without sections is
/// drawn as a walk between its own origin and destination.
pub fn timeline_lines(connection: &Connection) -> Vec<String> {
    let Some(first) = connection.sections.first() else {
        return vec![
            render_stop(&connection.from, StopRole::Departure),
            format!("{DIRECT_WALK_INDENT}{WALK_LABEL}"),
            render_stop(&connection.to, StopRole::Arrival),
        ];
    };

    let mut lines = Vec::with_capacity(2 * connection.sections.len() + 1);
    lines.push(render_stop(&first.departure, StopRole::Departure));

    for section in &connection.sections {
        lines.push(format!("{LEG_INDENT}{}", render_leg(&section.leg)));
        lines.push(render_stop(&section.arrival, StopRole::Arrival));
    }

    lines
}

/// The timeline as text, one line per entry, each ending in a newline.
pub fn render_timeline(connection: &Connection) -> String {
    let mut out = String::new();
    for line in timeline_lines(connection) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
