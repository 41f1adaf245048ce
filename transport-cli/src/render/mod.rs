//! Terminal rendering of connections.
//!
//! Every function here is pure: it takes decoded domain values and
//! returns text. Printing is left to the caller.

mod leg;
mod report;
mod stop;
mod summary;
mod timeline;

pub use leg::{WALK_LABEL, render_leg};
pub use report::{BANNER, NO_CONNECTIONS, Report, SEPARATOR, Style};
pub use stop::{WARNING_MARKER, render_stop};
pub use summary::render_summary;
pub use timeline::{render_timeline, timeline_lines};
