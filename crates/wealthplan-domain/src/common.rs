//! Shared traits, calendar constants, and identifier helpers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of months covered by a planning horizon.
pub const MONTH_COUNT: usize = 12;

/// Short month labels, January first.
pub const MONTHS: [&str; MONTH_COUNT] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One amount per calendar month, January at index 0.
pub type MonthlyAmounts = [f64; MONTH_COUNT];

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Generates a fresh identifier for a ledger entity.
pub fn new_entity_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Zero-based month index within the planning year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(usize);

impl Month {
    pub const JANUARY: Month = Month(0);
    pub const DECEMBER: Month = Month(MONTH_COUNT - 1);

    /// Returns `None` when `index` falls outside `0..12`.
    pub fn new(index: usize) -> Option<Self> {
        (index < MONTH_COUNT).then_some(Self(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn label(self) -> &'static str {
        MONTHS[self.0]
    }

    /// Iterates January through December.
    pub fn all() -> impl Iterator<Item = Month> {
        (0..MONTH_COUNT).map(Month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_rejects_out_of_range_index() {
        assert!(Month::new(11).is_some());
        assert!(Month::new(12).is_none());
        assert_eq!(Month::DECEMBER.label(), "Dec");
    }

    #[test]
    fn month_iteration_is_chronological() {
        let labels: Vec<_> = Month::all().map(Month::label).collect();
        assert_eq!(labels, MONTHS.to_vec());
    }

    #[test]
    fn entity_ids_are_unique() {
        assert_ne!(new_entity_id(), new_entity_id());
    }
}
