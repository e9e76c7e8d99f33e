//! tasktrack CLI entry point.
//!
//! Scripting access to the same task database the desktop app uses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tasktrack::application::{TaskDraft, format_effort, parse_effort};
use tasktrack::commands;
use tasktrack::domain::{Comment, Priority, Task, TaskDetails, TaskId, TaskStatus};
use tasktrack::infra::app_config::{config_path, load_config, save_config};
use tasktrack::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "tasktrack")]
#[command(version)]
#[command(about = "Track tasks and their history from the terminal", long_about = None)]
struct Args {
    /// Database file (defaults to the desktop app's database)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all tasks, newest first
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show one task with its comments
    Show {
        id: TaskId,
        #[arg(long)]
        json: bool,
    },

    /// Create a task
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short = 't', long)]
        task_type: Option<String>,
        /// 1 (critical) to 4 (low), or a name
        #[arg(short, long)]
        priority: Option<Priority>,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        start_date: String,
        #[arg(long, default_value = "")]
        link: String,
    },

    /// Set status and progress
    Status {
        id: TaskId,
        /// New, Work, "On Hold", Final, Cancelled
        status: TaskStatus,
        /// Percent done, 0-100
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: Option<u8>,
    },

    /// Set planned and actual effort in hours (non-numeric input counts as 0)
    Efforts {
        id: TaskId,
        planned: String,
        actual: String,
    },

    /// Edit task details; omitted flags keep their current value
    Edit {
        id: TaskId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        task_type: Option<String>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        effort_planned: Option<String>,
        /// Empty string clears the link
        #[arg(long)]
        link: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
    },

    /// Append a comment to a task's history
    Comment { id: TaskId, text: String },

    /// List a task's comments, newest first
    Comments {
        id: TaskId,
        #[arg(long)]
        json: bool,
    },

    /// Delete a task and its comments
    Delete { id: TaskId },

    /// Print the config file location, writing defaults if it does not exist
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if let Commands::Config = args.command {
        return init_config();
    }

    let state = AppState::open(args.db)?;
    run(&state, args.command)
}

fn run(state: &AppState, command: Commands) -> Result<()> {
    match command {
        Commands::List { json } => {
            let tasks = commands::get_all_tasks(state).map_err(anyhow::Error::msg)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks.");
            } else {
                for task in &tasks {
                    println!("{}", format_row(task));
                }
            }
        }
        Commands::Show { id, json } => {
            let task = commands::get_task(state, id).map_err(anyhow::Error::msg)?;
            let comments = commands::get_comments_for_task(state, id).map_err(anyhow::Error::msg)?;
            if json {
                let value = serde_json::json!({ "task": task, "comments": comments });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print_task(&task);
                print_comments(&comments);
            }
        }
        Commands::Add {
            title,
            description,
            category,
            task_type,
            priority,
            start_date,
            link,
        } => {
            let config = state.config.read().clone();
            let draft = TaskDraft {
                title,
                description,
                category: category
                    .or_else(|| config.categories.first().cloned())
                    .unwrap_or_default(),
                task_type: task_type
                    .or_else(|| config.task_types.first().cloned())
                    .unwrap_or_default(),
                priority: priority.unwrap_or(config.default_priority),
                start_date,
                external_link: link,
            };
            let task = commands::create_task(state, draft).map_err(anyhow::Error::msg)?;
            println!("Created task #{}: {}", task.id, task.title);
        }
        Commands::Status {
            id,
            status,
            percent,
        } => {
            let percent = match percent {
                Some(percent) => percent,
                None => commands::get_task(state, id)
                    .map_err(anyhow::Error::msg)?
                    .percent_done,
            };
            commands::update_task_status(state, id, status, percent)
                .map_err(anyhow::Error::msg)?;
            println!("Task #{id}: {status}, {percent}% done");
        }
        Commands::Efforts {
            id,
            planned,
            actual,
        } => {
            let (planned, actual) = (parse_effort(&planned), parse_effort(&actual));
            commands::update_task_efforts(state, id, planned, actual)
                .map_err(anyhow::Error::msg)?;
            println!(
                "Task #{id}: planned {}h, actual {}h",
                format_effort(planned),
                format_effort(actual)
            );
        }
        Commands::Edit {
            id,
            title,
            description,
            category,
            task_type,
            priority,
            effort_planned,
            link,
            status,
        } => {
            let task = commands::get_task(state, id).map_err(anyhow::Error::msg)?;
            let mut details = TaskDetails::from(&task);
            if let Some(title) = title {
                let title = title.trim().to_string();
                anyhow::ensure!(!title.is_empty(), "Task title must not be empty");
                details.title = title;
            }
            if let Some(description) = description {
                details.description = description;
            }
            if let Some(category) = category {
                details.category = category;
            }
            if let Some(task_type) = task_type {
                details.task_type = task_type;
            }
            if let Some(priority) = priority {
                details.priority = priority;
            }
            if let Some(effort) = effort_planned {
                details.effort_planned = parse_effort(&effort);
            }
            if let Some(link) = link {
                let link = link.trim();
                details.external_link = (!link.is_empty()).then(|| link.to_string());
            }
            if let Some(status) = status {
                details.status = status;
            }
            commands::update_task_details(state, id, &details).map_err(anyhow::Error::msg)?;
            println!("Task #{id} saved");
        }
        Commands::Comment { id, text } => {
            let text = text.trim();
            anyhow::ensure!(!text.is_empty(), "Comment text must not be empty");
            let comment = commands::add_comment(state, id, text).map_err(anyhow::Error::msg)?;
            println!("Added comment #{} to task #{id}", comment.id);
        }
        Commands::Comments { id, json } => {
            let comments = commands::get_comments_for_task(state, id).map_err(anyhow::Error::msg)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&comments)?);
            } else {
                print_comments(&comments);
            }
        }
        Commands::Delete { id } => {
            commands::delete_task(state, id).map_err(anyhow::Error::msg)?;
            println!("Deleted task #{id}");
        }
        Commands::Config => init_config()?,
    }
    Ok(())
}

fn init_config() -> Result<()> {
    let path = config_path();
    if !path.exists() {
        save_config(&load_config())
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Wrote default config to {}", path.display());
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

fn format_row(task: &Task) -> String {
    format!(
        "#{:<4} [{:<9}] P{} {:>3}%  {}",
        task.id,
        task.status.to_string(),
        task.priority.level(),
        task.percent_done,
        task.title
    )
}

fn print_task(task: &Task) {
    println!("#{} {}", task.id, task.title);
    println!("  Status:      {} ({}% done)", task.status, task.percent_done);
    println!("  Priority:    {}", task.priority);
    if !task.category.is_empty() {
        println!("  Category:    {}", task.category);
    }
    if !task.task_type.is_empty() {
        println!("  Type:        {}", task.task_type);
    }
    if let Some(date) = task.start_date {
        println!("  Start:       {date}");
    }
    println!(
        "  Effort:      {}h planned, {}h actual",
        format_effort(task.effort_planned),
        format_effort(task.effort_actual)
    );
    if let Some(link) = &task.external_link {
        println!("  Link:        {link}");
    }
    println!("  Created:     {}", task.created_at);
    if !task.description.is_empty() {
        println!();
        for line in task.description.lines() {
            println!("  {line}");
        }
    }
}

fn print_comments(comments: &[Comment]) {
    if comments.is_empty() {
        println!("No comments.");
        return;
    }
    println!();
    for comment in comments {
        println!("[{}] {}", comment.created_at, comment.comment_text);
    }
}
