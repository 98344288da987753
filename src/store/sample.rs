//! Bootstrap tasks seeded into an empty collection.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::domain::{Priority, Task};

struct Seed {
    id: u64,
    text: &'static str,
    completed: bool,
    priority: Priority,
    category: &'static str,
    due_in_days: i64,
    created_days_ago: i64,
    updated_days_ago: i64,
}

const SEEDS: [Seed; 7] = [
    Seed {
        id: 1,
        text: "Create a to-do list application",
        completed: true,
        priority: Priority::High,
        category: "work",
        due_in_days: 0,
        created_days_ago: 3,
        updated_days_ago: 1,
    },
    Seed {
        id: 2,
        text: "Learn JavaScript ES6 features",
        completed: true,
        priority: Priority::Medium,
        category: "personal",
        due_in_days: 0,
        created_days_ago: 5,
        updated_days_ago: 2,
    },
    Seed {
        id: 3,
        text: "Build a personal portfolio website",
        completed: false,
        priority: Priority::High,
        category: "work",
        due_in_days: 7,
        created_days_ago: 2,
        updated_days_ago: 2,
    },
    Seed {
        id: 4,
        text: "Read a book for 30 minutes",
        completed: false,
        priority: Priority::Low,
        category: "personal",
        due_in_days: 1,
        created_days_ago: 1,
        updated_days_ago: 1,
    },
    Seed {
        id: 5,
        text: "Prepare for next week's meeting",
        completed: false,
        priority: Priority::Medium,
        category: "work",
        due_in_days: 7,
        created_days_ago: 0,
        updated_days_ago: 0,
    },
    Seed {
        id: 6,
        text: "Buy groceries for the week",
        completed: false,
        priority: Priority::Medium,
        category: "shopping",
        due_in_days: 1,
        created_days_ago: 2,
        updated_days_ago: 2,
    },
    Seed {
        id: 7,
        text: "Go for a morning run",
        completed: false,
        priority: Priority::Low,
        category: "health",
        due_in_days: 0,
        created_days_ago: 1,
        updated_days_ago: 1,
    },
];

/// The seven starter tasks, dated relative to `now` and `today`.
pub fn sample_tasks(now: DateTime<Utc>, today: NaiveDate) -> Vec<Task> {
    SEEDS
        .iter()
        .map(|seed| Task {
            id: seed.id,
            text: seed.text.to_string(),
            completed: seed.completed,
            priority: seed.priority,
            category: seed.category.to_string(),
            due_date: Some(today + Duration::days(seed.due_in_days)),
            created_at: now - Duration::days(seed.created_days_ago),
            updated_at: now - Duration::days(seed.updated_days_ago),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_seven_tasks_with_unique_ids() {
        let tasks = sample_tasks(now(), today());
        assert_eq!(tasks.len(), 7);
        let ids: HashSet<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_timestamps_are_ordered() {
        for task in sample_tasks(now(), today()) {
            assert!(task.updated_at >= task.created_at, "task {}", task.id);
            assert!(task.updated_at <= now());
        }
    }

    #[test]
    fn test_due_dates_relative_to_today() {
        let tasks = sample_tasks(now(), today());
        assert_eq!(tasks[0].due_date, Some(today()));
        assert_eq!(tasks[2].due_date, NaiveDate::from_ymd_opt(2026, 10, 24));
        assert_eq!(tasks[3].due_date, NaiveDate::from_ymd_opt(2026, 10, 18));
    }

    #[test]
    fn test_two_completed() {
        let tasks = sample_tasks(now(), today());
        assert_eq!(tasks.iter().filter(|t| t.completed).count(), 2);
    }
}
