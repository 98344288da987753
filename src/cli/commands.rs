//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - add/edit/toggle/rm: single-task operations
//! - clear/purge: bulk deletion, confirmed unless `--yes`
//! - list/show/stats: read-only views

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskmaster::domain::parse_date;
use taskmaster::{FilterMode, Priority, SortMode, TaskId};

/// taskmaster - a local task list manager
#[derive(Parser, Debug)]
#[command(name = "taskmaster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Priority (high, medium, low)
        #[arg(short, long)]
        priority: Option<Priority>,

        /// Category, e.g. work or shopping
        #[arg(long)]
        category: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        due: Option<NaiveDate>,
    },

    /// Edit an existing task
    Edit {
        /// Task ID to edit
        id: TaskId,

        /// New description
        #[arg(short, long)]
        text: Option<String>,

        /// New priority (high, medium, low)
        #[arg(short, long)]
        priority: Option<Priority>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date, conflicts_with = "clear_due")]
        due: Option<NaiveDate>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },

    /// Mark a task completed, or pending again
    #[command(visible_alias = "done")]
    Toggle {
        /// Task ID to toggle
        id: TaskId,
    },

    /// Delete a task
    Rm {
        /// Task ID to delete
        id: TaskId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all completed tasks
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every task
    Purge {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List tasks
    List {
        /// Filter (all, pending, completed, today)
        #[arg(short, long)]
        filter: Option<FilterMode>,

        /// Only tasks whose text or category contains this
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order (newest, oldest, name, priority)
        #[arg(short = 'o', long)]
        sort: Option<SortMode>,
    },

    /// Show every field of a task
    Show {
        /// Task ID to show
        id: TaskId,
    },

    /// Show task counters
    Stats,
}
