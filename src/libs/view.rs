//! Console rendering of session tables.

use super::formatter::{format_cost, format_decimal_hours, FormattedSession};
use super::sessions::SessionCollection;
use crate::libs::messages::Message;
use crate::msg_print;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the session table without printing it.
    pub fn sessions_table(rows: &[FormattedSession]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["No.", "Start", "End", "Original Time", "Rounded Time", "Decimal Hours", "Cost"]);
        for session in rows {
            table.add_row(row![
                format!("{}.", session.number),
                session.start,
                session.end,
                session.original,
                session.rounded,
                session.decimal_hours,
                session.cost
            ]);
        }

        table
    }

    pub fn sessions(sessions: &SessionCollection) {
        if sessions.is_empty() {
            msg_print!(Message::NoSessions, true);
            return;
        }

        Self::sessions_table(&sessions.format()).printstd();
        msg_print!(Message::SessionsTotal {
            count: sessions.len(),
            hours: format_decimal_hours(sessions.total_hours()),
            cost: format_cost(sessions.total_cost()),
        });
    }
}
