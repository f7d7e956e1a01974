//! Per-station reservation store.

use std::slice;

use crate::domain::Reservation;

/// One station's reservations, sorted ascending by start.
///
/// The store does not validate what it is given; reservations enter only
/// through [`Timeline::schedule`], which enforces the overlap and gap rules.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    reservations: Vec<Reservation>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the sorted position. Equal starts keep insertion order.
    pub(super) fn insert(&mut self, reservation: Reservation) {
        let idx = self
            .reservations
            .partition_point(|existing| existing.start() <= reservation.start());
        self.reservations.insert(idx, reservation);
    }

    /// Iterate over reservations in ascending start order.
    pub fn iter(&self) -> slice::Iter<'_, Reservation> {
        self.reservations.iter()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Reservation;
    type IntoIter = slice::Iter<'a, Reservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OperatingMode, TimeWindow, parse_timestamp};

    fn reservation(start: &str, end: &str, mission: &str) -> Reservation {
        let window =
            TimeWindow::new(parse_timestamp(start).unwrap(), parse_timestamp(end).unwrap())
                .unwrap();
        Reservation::new(window, OperatingMode::ScienceBusy, mission)
    }

    #[test]
    fn new_timeline_is_empty() {
        let timeline = Timeline::new();
        assert!(timeline.is_empty());
        assert_eq!(timeline.len(), 0);
        assert!(timeline.iter().next().is_none());
    }

    #[test]
    fn insert_keeps_start_order() {
        let mut timeline = Timeline::new();
        timeline.insert(reservation("2024-03-15T12:00:00", "2024-03-15T12:10:00", "c"));
        timeline.insert(reservation("2024-03-15T10:00:00", "2024-03-15T10:10:00", "a"));
        timeline.insert(reservation("2024-03-15T11:00:00", "2024-03-15T11:10:00", "b"));
        timeline.insert(reservation("2024-03-15T13:00:00", "2024-03-15T13:10:00", "d"));

        let missions: Vec<_> = timeline.iter().map(|r| r.mission()).collect();
        assert_eq!(missions, vec!["a", "b", "c", "d"]);
        assert_eq!(timeline.len(), 4);
    }

    #[test]
    fn equal_starts_keep_insertion_order() {
        let mut timeline = Timeline::new();
        timeline.insert(reservation("2024-03-15T10:00:00", "2024-03-15T10:10:00", "first"));
        timeline.insert(reservation("2024-03-15T10:00:00", "2024-03-15T10:20:00", "second"));

        let missions: Vec<_> = (&timeline).into_iter().map(|r| r.mission()).collect();
        assert_eq!(missions, vec!["first", "second"]);
    }
}
