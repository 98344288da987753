//! Task record and its edit operations.
//!
//! # Invariants
//! - `text` is trimmed and never empty once a create or edit commits.
//! - `updated_at >= created_at`, and every mutation moves `updated_at`
//!   strictly forward.
//! - `id` and `created_at` never change after construction.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::due::{DueStatus, due_status};
use crate::error::{Result, TaskError};

/// Integer task identifier, unique within one collection.
pub type TaskId = u64;

/// Category given to tasks that do not name one.
pub const DEFAULT_CATEGORY: &str = "personal";

/// Storage format for due dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single to-do item.
///
/// Serialized with camelCase field names; an absent due date is written as
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,

    pub text: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default, with = "due_date_format")]
    pub due_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Task {
    /// Create a pending, medium-priority task in the default category.
    ///
    /// Fails with `TaskError::Validation` if `text` trims to empty.
    pub fn new(id: TaskId, text: &str, now: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            id,
            text: normalize_text(text)?,
            completed: false,
            priority: Priority::default(),
            category: default_category(),
            due_date: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply every field present in `patch` and refresh `updated_at`.
    ///
    /// Validation happens before any field is written, so a rejected patch
    /// leaves the task untouched.
    pub fn apply(&mut self, patch: &TaskPatch, now: DateTime<Utc>) -> Result<()> {
        self.assign(patch)?;
        self.touch(now);
        Ok(())
    }

    /// Apply `patch` without touching timestamps. Used at creation time.
    pub fn assign(&mut self, patch: &TaskPatch) -> Result<()> {
        let text = match &patch.text {
            Some(text) => Some(normalize_text(text)?),
            None => None,
        };

        if let Some(text) = text {
            self.text = text;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category) = &patch.category {
            self.category = normalize_category(category);
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        Ok(())
    }

    /// Flip completion and refresh `updated_at`.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.completed = !self.completed;
        self.touch(now);
    }

    /// Move `updated_at` to `now`, or 1ms past its current value if the
    /// clock has not advanced.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::milliseconds(1)
        };
    }

    /// Whether the task is due on `date`.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date == Some(date)
    }

    /// Due status relative to `today`.
    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        due_status(self.due_date, today)
    }

    /// Lowercased text/category match used by search.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.text.to_lowercase().contains(needle_lower) || self.category.to_lowercase().contains(needle_lower)
    }
}

/// Partial edit of a task. `None` leaves a field unchanged.
///
/// `due_date` is doubly optional: `Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// True if applying this patch would change no field.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.priority.is_none() && self.category.is_none() && self.due_date.is_none()
    }
}

/// Task priority. Sorts high first.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Sort rank: 0 is most urgent.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" | "h" => Ok(Priority::High),
            "medium" | "med" | "m" => Ok(Priority::Medium),
            "low" | "l" => Ok(Priority::Low),
            other => Err(TaskError::InvalidValue(format!("unknown priority: {}", other))),
        }
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| TaskError::InvalidValue(format!("bad date '{}': {}", s, e)))
}

fn normalize_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskError::Validation("task description is empty".to_string()));
    }
    Ok(trimmed.to_string())
}

fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        default_category()
    } else {
        trimmed.to_string()
    }
}

/// Due date as `"YYYY-MM-DD"`, with `""` for absent.
mod due_date_format {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT).map(Some).map_err(de::Error::custom),
        }
    }
}
