//! Full report for a query result.

use std::fmt;

use crate::domain::Connection;

use super::summary::render_summary;
use super::timeline::render_timeline;

/// Printed once at startup unless disabled.
pub const BANNER: &str = r"
  _____                                       _
 |_   _| __ __ _ _ __  ___ _ __   ___  _ __| |_
   | || '__/ _` | '_ \/ __| '_ \ / _ \| '__| __|
   | || | | (_| | | | \__ \ |_) | (_) | |  | |_
   |_||_|  \__,_|_| |_|___/ .__/ \___/|_|   \__|
                          |_|

🚆  Welcome to Transport CLI 🚏
";

/// Printed when the query matched nothing.
pub const NO_CONNECTIONS: &str = "No connections found.";

/// Drawn after each connection in timeline style.
pub const SEPARATOR: &str = "--------------------------------";

/// How much detail to show per connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Every section with its stops, legs and realtime warnings.
    #[default]
    Timeline,
    /// One line per connection.
    Simple,
}

/// All connections of a query, ready for display.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    connections: &'a [Connection],
    style: Style,
}

impl<'a> Report<'a> {
    pub fn new(connections: &'a [Connection], style: Style) -> Self {
        Self { connections, style }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.connections.is_empty() {
            return writeln!(f, "{NO_CONNECTIONS}");
        }

        for (i, connection) in self.connections.iter().enumerate() {
            let number = i + 1;
            match self.style {
                Style::Timeline => {
                    writeln!(f)?;
                    writeln!(
                        f,
                        "Connection {number}: Overall Duration: {}",
                        connection.duration_phrase()
                    )?;
                    f.write_str(&render_timeline(connection))?;
                    writeln!(f, "{SEPARATOR}")?;
                }
                Style::Simple => {
                    writeln!(f, "{number}. {}", render_summary(connection))?;
                }
            }
        }

        Ok(())
    }
}
