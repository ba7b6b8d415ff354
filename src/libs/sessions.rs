//! The ordered, editable collection of session records.

use crate::libs::billing::SessionRecord;
use crate::libs::error::BillingError;
use crate::libs::formatter::FormattedSession;

/// Sessions in insertion order, which is both display and storage order.
///
/// Indices taken by the public methods are 0-based; the shell converts the
/// 1-based numbers users type with [`parse_session_number`] and
/// [`parse_session_numbers`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionCollection {
    records: Vec<SessionRecord>,
}

impl SessionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SessionRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SessionRecord> {
        self.records.iter()
    }

    /// Appends a record at the end.
    pub fn insert(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    /// Replaces the record at `index` wholesale and returns the old one.
    ///
    /// Returns `None` and leaves the collection untouched when `index` is out
    /// of range.
    pub fn replace_at(&mut self, index: usize, record: SessionRecord) -> Option<SessionRecord> {
        let slot = self.records.get_mut(index)?;
        Some(std::mem::replace(slot, record))
    }

    /// Removes every record whose index appears in `indices`.
    ///
    /// Indices are deduplicated and applied from highest to lowest, so the
    /// caller may pass them in any order without earlier removals shifting
    /// later ones. Out-of-range indices are skipped. Returns the indices that
    /// were actually removed, highest first.
    pub fn remove_all<I>(&mut self, indices: I) -> Vec<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut sorted: Vec<usize> = indices.into_iter().collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        let mut removed = Vec::with_capacity(sorted.len());
        for index in sorted {
            if index < self.records.len() {
                self.records.remove(index);
                removed.push(index);
            } else {
                tracing::debug!(index, len = self.records.len(), "skipping out-of-range session index");
            }
        }
        removed
    }

    /// Sum of all session costs.
    pub fn total_cost(&self) -> f64 {
        self.records.iter().map(|r| r.cost).sum()
    }

    /// Sum of all rounded durations in decimal hours.
    pub fn total_hours(&self) -> f64 {
        self.records.iter().map(|r| r.decimal_hours).sum()
    }

    /// Rows ready for the table view, numbered from 1.
    pub fn format(&self) -> Vec<FormattedSession> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| FormattedSession::new(i + 1, r))
            .collect()
    }

    pub fn into_vec(self) -> Vec<SessionRecord> {
        self.records
    }
}

impl From<Vec<SessionRecord>> for SessionCollection {
    fn from(records: Vec<SessionRecord>) -> Self {
        SessionCollection { records }
    }
}

impl<'a> IntoIterator for &'a SessionCollection {
    type Item = &'a SessionRecord;
    type IntoIter = std::slice::Iter<'a, SessionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Converts a single 1-based session number into a 0-based index.
///
/// # Errors
///
/// [`BillingError::InvalidIndexInput`] if the input is not a positive integer
/// or does not name an existing session.
pub fn parse_session_number(input: &str, len: usize) -> Result<usize, BillingError> {
    let invalid = || BillingError::InvalidIndexInput { input: input.trim().to_string() };
    let number: usize = input.trim().parse().map_err(|_| invalid())?;
    if number == 0 || number > len {
        return Err(invalid());
    }
    Ok(number - 1)
}

/// Converts a comma-separated list of 1-based session numbers into 0-based
/// indices.
///
/// Every entry must name an existing session. One bad entry rejects the
/// whole list, so a removal either applies in full or not at all.
pub fn parse_session_numbers(input: &str, len: usize) -> Result<Vec<usize>, BillingError> {
    input.split(',').map(|part| parse_session_number(part, len)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::billing::session_from_inputs;

    fn three() -> SessionCollection {
        let mut sessions = SessionCollection::new();
        sessions.insert(session_from_inputs("08:00", "09:00").unwrap());
        sessions.insert(session_from_inputs("10:00", "11:30").unwrap());
        sessions.insert(session_from_inputs("13:00", "15:00").unwrap());
        sessions
    }

    #[test]
    fn remove_first_and_last_leaves_middle() {
        let mut sessions = three();
        let removed = sessions.remove_all([0, 2]);
        assert_eq!(removed, vec![2, 0]);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions.get(0).unwrap().start_time, "10:00");
    }

    #[test]
    fn remove_from_unsorted_user_input() {
        let mut sessions = three();
        let indices = parse_session_numbers("3,1", 3).unwrap();
        sessions.remove_all(indices);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions.get(0).unwrap().start_time, "10:00");
    }

    #[test]
    fn remove_ignores_duplicates_and_out_of_range() {
        let mut sessions = three();
        let removed = sessions.remove_all([1, 1, 7]);
        assert_eq!(removed, vec![1]);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions.get(1).unwrap().start_time, "13:00");
    }

    #[test]
    fn replace_at_swaps_whole_record() {
        let mut sessions = three();
        let new = session_from_inputs("22:00", "00:20").unwrap();
        let old = sessions.replace_at(1, new.clone()).unwrap();
        assert_eq!(old.start_time, "10:00");
        assert_eq!(sessions.get(1), Some(&new));
        assert!(sessions.replace_at(3, new).is_none());
        assert_eq!(sessions.len(), 3);
    }

    #[test]
    fn totals() {
        let sessions = three();
        assert_eq!(sessions.total_cost(), 220.0 + 330.0 + 440.0);
        assert_eq!(sessions.total_hours(), 4.5);
        assert_eq!(SessionCollection::new().total_cost(), 0.0);
    }

    #[test]
    fn session_number_parsing() {
        assert_eq!(parse_session_number(" 2 ", 3).unwrap(), 1);
        assert!(matches!(parse_session_number("0", 3), Err(BillingError::InvalidIndexInput { .. })));
        assert!(parse_session_number("4", 3).is_err());
        assert!(parse_session_number("two", 3).is_err());
        assert!(parse_session_number("", 3).is_err());
    }

    #[test]
    fn session_numbers_parsing() {
        assert_eq!(parse_session_numbers("1, 3", 3).unwrap(), vec![0, 2]);
        assert!(parse_session_numbers("1,x", 3).is_err());
        assert!(parse_session_numbers("0", 3).is_err());
        assert!(parse_session_numbers("", 3).is_err());
    }

    #[test]
    fn out_of_range_number_rejects_whole_list() {
        let sessions = three();
        for input in ["1,0", "1,7"] {
            match parse_session_numbers(input, sessions.len()) {
                Err(BillingError::InvalidIndexInput { input: bad }) => assert!(bad == "0" || bad == "7", "{}", bad),
                other => panic!("{:?} should be rejected, got {:?}", input, other),
            }
        }
        assert_eq!(sessions.len(), 3);
    }
}
