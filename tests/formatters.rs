#[cfg(test)]
mod tests {
    use timebill::libs::billing::session_from_inputs;
    use timebill::libs::formatter::{format_cost, format_decimal_hours, format_hours_minutes, FormattedSession};
    use timebill::libs::sessions::SessionCollection;
    use timebill::libs::view::View;

    #[test]
    fn test_format_hours_minutes() {
        assert_eq!(format_hours_minutes(0, 0), "0h 0m");
        assert_eq!(format_hours_minutes(1, 30), "1h 30m");
        assert_eq!(format_hours_minutes(12, 5), "12h 5m");
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(330.0), "$330.00");
        assert_eq!(format_cost(0.0), "$0.00");
        assert_eq!(format_decimal_hours(3.5), "3.5");
    }

    #[test]
    fn test_collection_rows_are_numbered_from_one() {
        let mut sessions = SessionCollection::new();
        sessions.insert(session_from_inputs("09:00", "10:20").unwrap());
        sessions.insert(session_from_inputs("22:00", "01:30").unwrap());

        let rows: Vec<FormattedSession> = sessions.format();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[1].number, 2);
        assert_eq!(rows[1].original, "3h 30m");
        assert_eq!(rows[1].cost, "$770.00");
    }

    #[test]
    fn test_sessions_table_has_header_and_rows() {
        let mut sessions = SessionCollection::new();
        sessions.insert(session_from_inputs("09:00", "10:19").unwrap());

        let table = View::sessions_table(&sessions.format());
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("Rounded Time"));
        assert!(rendered.contains("1h 19m"));
        assert!(rendered.contains("$220.00"));
    }
}
