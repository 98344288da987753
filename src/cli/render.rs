//! Terminal rendering of tasks, stats and user messages.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use colored::*;
use taskmaster::{DueStatus, Priority, Stats, Task};

/// Kind of message shown after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
    Info,
}

pub fn notice(kind: Notice, message: &str) -> String {
    match kind {
        Notice::Success => format!("{} {}", "✓".green(), message),
        Notice::Error => format!("{} {}", "✗".red(), message.red()),
        Notice::Info => format!("{} {}", "•".cyan(), message),
    }
}

/// `Oct 17, 2026`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Oct 17, 2026, 09:05 AM` in the local time zone.
pub fn format_date_time(at: DateTime<Utc>) -> String {
    format_date_time_in(at, &Local)
}

pub fn format_date_time_in<Tz: TimeZone>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%b %-d, %Y, %I:%M %p").to_string()
}

fn priority_marker(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "●".red(),
        Priority::Medium => "●".yellow(),
        Priority::Low => "●".green(),
    }
}

fn due_label(task: &Task, today: NaiveDate) -> Option<ColoredString> {
    let due = task.due_date?;
    let label = format!("due {}", format_date(due));
    let status = task.due_status(today);
    if !status.is_pressing() {
        return Some(label.normal());
    }
    Some(match status {
        DueStatus::Overdue => label.red().bold(),
        _ => label.yellow().bold(),
    })
}

/// One list row: box, id, text, then priority, category and due date.
pub fn task_line(task: &Task, today: NaiveDate) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let text = if task.completed {
        task.text.dimmed().strikethrough()
    } else {
        task.text.normal()
    };

    let mut meta = vec![
        format!("{} {}", priority_marker(task.priority), task.priority.label()),
        format!("#{}", task.category).blue().to_string(),
    ];
    if let Some(due) = due_label(task, today) {
        meta.push(due.to_string());
    }

    format!(
        "{} {} {}  {}",
        checkbox,
        task.id.to_string().dimmed(),
        text,
        meta.join("  ")
    )
}

/// The full list, or an empty-state line.
pub fn task_list(tasks: &[&Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return "No tasks found".dimmed().to_string();
    }
    tasks
        .iter()
        .map(|t| task_line(t, today))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every field of a task, one per line.
pub fn task_details(task: &Task) -> String {
    let due = task.due_date.map(format_date).unwrap_or_else(|| "Not set".to_string());
    [
        format!("{}", "Task Details".bold()),
        String::new(),
        format!("Description: {}", task.text),
        format!("Status: {}", if task.completed { "Completed" } else { "Pending" }),
        format!("Priority: {}", task.priority),
        format!("Category: {}", task.category),
        format!("Due Date: {}", due),
        format!("Created: {}", format_date_time(task.created_at)),
        format!("Last Updated: {}", format_date_time(task.updated_at)),
    ]
    .join("\n")
}

pub fn stats_block(stats: &Stats) -> String {
    format!(
        "Total: {}  Pending: {}  Completed: {}  Due today: {}",
        stats.total.to_string().bold(),
        stats.pending.to_string().yellow(),
        stats.completed.to_string().green(),
        stats.due_today.to_string().red()
    )
}
