//! Query engine: search, filter and sort over a task snapshot.
//!
//! [`view`] is a pure function of its inputs. "Today" is passed in rather
//! than read from a clock, so identical inputs always give identical output.
//!
//! The pipeline runs in a fixed order:
//! 1. search (case-insensitive substring of text or category)
//! 2. filter (all / pending / completed / today)
//! 3. sort (newest / oldest / name / priority), always stable

pub mod collate;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::Task;
use crate::error::{Result, TaskError};

/// Which tasks are eligible for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    /// Not completed
    Pending,
    Completed,
    /// Due today, completed or not
    Today,
}

impl FilterMode {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Pending => "pending",
            FilterMode::Completed => "completed",
            FilterMode::Today => "today",
        }
    }

    /// Whether `task` passes this filter on `today`.
    pub fn admits(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Pending => !task.completed,
            FilterMode::Completed => task.completed,
            FilterMode::Today => task.is_due_on(today),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "pending" => Ok(FilterMode::Pending),
            "completed" | "done" => Ok(FilterMode::Completed),
            "today" => Ok(FilterMode::Today),
            other => Err(TaskError::InvalidValue(format!("unknown filter: {}", other))),
        }
    }
}

/// Display order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recently created first
    #[default]
    Newest,
    Oldest,
    /// Text, ascending
    Name,
    /// High, medium, low; ties keep collection order
    Priority,
}

impl SortMode {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::Name => "name",
            SortMode::Priority => "priority",
        }
    }

    /// Sort `tasks` in place. Stable for every mode.
    pub fn apply(&self, tasks: &mut [&Task]) {
        match self {
            SortMode::Newest => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortMode::Oldest => tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortMode::Name => tasks.sort_by(|a, b| collate::compare(&a.text, &b.text)),
            SortMode::Priority => tasks.sort_by_key(|t| t.priority.rank()),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortMode::Newest),
            "oldest" => Ok(SortMode::Oldest),
            "name" => Ok(SortMode::Name),
            "priority" => Ok(SortMode::Priority),
            other => Err(TaskError::InvalidValue(format!("unknown sort: {}", other))),
        }
    }
}

/// Everything that shapes a view besides the tasks and the date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub filter: FilterMode,
    pub search: String,
    pub sort: SortMode,
}

impl ViewQuery {
    pub fn new(filter: FilterMode, search: impl Into<String>, sort: SortMode) -> Self {
        Self {
            filter,
            search: search.into(),
            sort,
        }
    }
}

/// Produce the ordered display sequence for `tasks`.
pub fn view<'a>(tasks: &'a [Task], query: &ViewQuery, today: NaiveDate) -> Vec<&'a Task> {
    let needle = query.search.to_lowercase();

    let mut selected: Vec<&Task> = tasks
        .iter()
        .filter(|t| needle.is_empty() || t.matches(&needle))
        .filter(|t| query.filter.admits(t, today))
        .collect();

    query.sort.apply(&mut selected);

    debug!(
        "view filter={} sort={} search={:?}: {} of {} tasks",
        query.filter,
        query.sort,
        query.search,
        selected.len(),
        tasks.len()
    );
    selected
}
