//! Leg labels drawn between stops.

use crate::domain::Leg;

/// Label for a walking transfer.
pub const WALK_LABEL: &str = "──( Walk )──▶";

/// Render a leg as an arrow label, e.g. `──( S 14 )──▶`.
pub fn render_leg(leg: &Leg) -> String {
    match leg {
        Leg::Ride(journey) => format!("──( {} {} )──▶", journey.category, journey.number),
        Leg::Walk => WALK_LABEL.to_string(),
    }
}
