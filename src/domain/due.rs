//! Due-date classification against the current calendar date.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tasks due within this many days (after today) count as due soon.
pub const SOON_WINDOW_DAYS: i64 = 3;

/// How a due date relates to today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    /// No due date, or due further out than the soon window
    None,
    /// Due before today
    Overdue,
    /// Due today
    Today,
    /// Due within the next `SOON_WINDOW_DAYS` days
    Soon,
}

impl DueStatus {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DueStatus::None => "none",
            DueStatus::Overdue => "overdue",
            DueStatus::Today => "today",
            DueStatus::Soon => "soon",
        }
    }

    /// Whether the status deserves attention in a listing.
    pub fn is_pressing(&self) -> bool {
        matches!(self, DueStatus::Overdue | DueStatus::Today)
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify `due` relative to `today` by whole calendar days.
pub fn due_status(due: Option<NaiveDate>, today: NaiveDate) -> DueStatus {
    let Some(due) = due else {
        return DueStatus::None;
    };

    match (due - today).num_days() {
        d if d < 0 => DueStatus::Overdue,
        0 => DueStatus::Today,
        d if d <= SOON_WINDOW_DAYS => DueStatus::Soon,
        _ => DueStatus::None,
    }
}
