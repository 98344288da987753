use chrono::NaiveDate;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use cli::render::{self, Notice};
use config::Config;
use taskmaster::{
    Confirmation, FilterMode, JsonFileStorage, Priority, SortMode, TaskError, TaskId, TaskPatch, TaskStore, ViewQuery,
};

type Store = TaskStore<JsonFileStorage>;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskmaster")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("taskmaster.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Print a user-level rejection and carry on; anything else is a failure.
fn report<T>(result: taskmaster::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(TaskError::Validation(_)) => {
            println!("{}", render::notice(Notice::Error, "Please enter a task description"));
            Ok(None)
        }
        Err(TaskError::NotFound(id)) => {
            println!("{}", render::notice(Notice::Info, &format!("No task with id {}", id)));
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask on stdin unless `assume_yes`. `None` means the user declined.
fn confirm(prompt: &str, assume_yes: bool) -> Result<Option<Confirmation>> {
    if assume_yes {
        return Ok(Some(Confirmation::granted()));
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    if is_yes(&answer) {
        Ok(Some(Confirmation::granted()))
    } else {
        println!("{}", render::notice(Notice::Info, "Cancelled"));
        Ok(None)
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if !config.display.color {
        colored::control::set_override(false);
    }

    let storage = JsonFileStorage::new(&config.storage.path);
    let mut store = TaskStore::open(storage, config.storage.bootstrap()).context("Failed to open task store")?;

    if cli.is_verbose() {
        println!("{} {}", "Tasks file:".yellow(), store.storage().path().display());
    }

    match &cli.command {
        None => handle_list_command(&store, config.view.filter, None, config.view.sort),
        Some(Commands::Add {
            text,
            priority,
            category,
            due,
        }) => handle_add_command(&mut store, &text.join(" "), *priority, category.as_deref(), *due),
        Some(Commands::Edit {
            id,
            text,
            priority,
            category,
            due,
            clear_due,
        }) => {
            let mut patch = TaskPatch::new();
            patch.text = text.clone();
            patch.priority = *priority;
            patch.category = category.clone();
            if *clear_due {
                patch.due_date = Some(None);
            } else if let Some(due) = due {
                patch.due_date = Some(Some(*due));
            }
            handle_edit_command(&mut store, *id, &patch)
        }
        Some(Commands::Toggle { id }) => handle_toggle_command(&mut store, *id),
        Some(Commands::Rm { id, yes }) => handle_rm_command(&mut store, *id, *yes),
        Some(Commands::Clear { yes }) => handle_clear_command(&mut store, *yes),
        Some(Commands::Purge { yes }) => handle_purge_command(&mut store, *yes),
        Some(Commands::List { filter, search, sort }) => handle_list_command(
            &store,
            filter.unwrap_or(config.view.filter),
            search.as_deref(),
            sort.unwrap_or(config.view.sort),
        ),
        Some(Commands::Show { id }) => handle_show_command(&store, *id),
        Some(Commands::Stats) => handle_stats_command(&store),
    }
}

fn handle_add_command(
    store: &mut Store,
    text: &str,
    priority: Option<Priority>,
    category: Option<&str>,
    due: Option<NaiveDate>,
) -> Result<()> {
    let mut fields = TaskPatch::new();
    fields.priority = priority;
    fields.category = category.map(str::to_string);
    fields.due_date = due.map(Some);

    if let Some(task) = report(store.create_with(text, &fields))? {
        println!("{}", render::notice(Notice::Success, "Task added successfully!"));
        println!("{}", render::task_line(&task, store.today()));
    }
    Ok(())
}

fn handle_edit_command(store: &mut Store, id: TaskId, patch: &TaskPatch) -> Result<()> {
    if patch.is_empty() {
        println!("{}", render::notice(Notice::Info, "Nothing to change"));
        return Ok(());
    }
    if let Some(task) = report(store.update(id, patch))? {
        println!("{}", render::notice(Notice::Success, "Task updated successfully!"));
        println!("{}", render::task_line(&task, store.today()));
    }
    Ok(())
}

fn handle_toggle_command(store: &mut Store, id: TaskId) -> Result<()> {
    if let Some(task) = report(store.toggle_completion(id))? {
        let status = if task.completed { "completed" } else { "pending" };
        println!("{}", render::notice(Notice::Info, &format!("Task marked as {}", status)));
    }
    Ok(())
}

fn handle_rm_command(store: &mut Store, id: TaskId, yes: bool) -> Result<()> {
    if store.get(id).is_none() {
        return report(Err::<(), _>(TaskError::NotFound(id))).map(|_| ());
    }
    if confirm("Are you sure you want to delete this task?", yes)?.is_none() {
        return Ok(());
    }
    if report(store.delete(id))?.is_some() {
        println!("{}", render::notice(Notice::Info, "Task deleted successfully!"));
    }
    Ok(())
}

fn handle_clear_command(store: &mut Store, yes: bool) -> Result<()> {
    let completed = store.stats().completed;
    if completed == 0 {
        println!("{}", render::notice(Notice::Info, "No completed tasks to clear"));
        return Ok(());
    }

    let prompt = format!("Are you sure you want to clear all {} completed tasks?", completed);
    let Some(confirmed) = confirm(&prompt, yes)? else {
        return Ok(());
    };

    let removed = store.clear_completed(confirmed)?;
    println!(
        "{}",
        render::notice(Notice::Success, &format!("Cleared {} completed tasks", removed))
    );
    Ok(())
}

fn handle_purge_command(store: &mut Store, yes: bool) -> Result<()> {
    if store.is_empty() {
        println!("{}", render::notice(Notice::Info, "No tasks to delete"));
        return Ok(());
    }

    let prompt = format!(
        "Are you sure you want to delete all {} tasks? This action cannot be undone.",
        store.len()
    );
    let Some(confirmed) = confirm(&prompt, yes)? else {
        return Ok(());
    };

    store.delete_all(confirmed)?;
    println!("{}", render::notice(Notice::Info, "All tasks deleted"));
    Ok(())
}

fn handle_list_command(store: &Store, filter: FilterMode, search: Option<&str>, sort: SortMode) -> Result<()> {
    info!("Listing tasks - filter: {}, sort: {}, search: {:?}", filter, sort, search);
    let query = ViewQuery::new(filter, search.unwrap_or_default(), sort);
    let tasks = store.view(&query);
    println!("{}", render::task_list(&tasks, store.today()));
    println!();
    println!("{}", render::stats_block(&store.stats()));
    Ok(())
}

fn handle_show_command(store: &Store, id: TaskId) -> Result<()> {
    match store.get(id) {
        Some(task) => println!("{}", render::task_details(task)),
        None => {
            report(Err::<(), _>(TaskError::NotFound(id)))?;
        }
    }
    Ok(())
}

fn handle_stats_command(store: &Store) -> Result<()> {
    println!("{}", render::stats_block(&store.stats()));
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
