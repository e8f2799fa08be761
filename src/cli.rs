//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `devtrack`.
#[derive(Debug, Parser)]
#[command(name = "devtrack", version, about = "Generate and track implementation work plans")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the task list, dependencies, and sprints from a
    /// specification file. Runs once per project.
    Generate {
        /// Path to the specification YAML file.
        #[arg(long)]
        spec: PathBuf,
        /// Snapshot output path (defaults to DEVTRACK_FILE or devtrack.yaml).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Fail on dependency cycles instead of reporting them.
        #[arg(long)]
        strict: bool,
        /// Discard an existing snapshot and regenerate.
        #[arg(long)]
        force: bool,
        /// Sprint length in calendar days.
        #[arg(long, default_value_t = 14)]
        sprint_duration: u32,
        /// Working hours per day.
        #[arg(long, default_value_t = 8)]
        hours_per_day: u32,
        /// Working days per week.
        #[arg(long, default_value_t = 5)]
        working_days: u32,
        /// Who triggered generation.
        #[arg(long, default_value = "consultant")]
        generated_by: String,
    },
    /// Show progress counters and project health.
    Status {
        /// Emit the rollup as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// List tasks, optionally filtered by sprint or status.
    Tasks {
        /// Only tasks in this sprint number.
        #[arg(long)]
        sprint: Option<u32>,
        /// Only tasks with this status (todo, in_progress, in_review, done, blocked).
        #[arg(long)]
        status: Option<String>,
    },
    /// Task mutations.
    Task {
        /// The task action to perform.
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Blocker mutations.
    Blocker {
        /// The blocker action to perform.
        #[command(subcommand)]
        action: BlockerAction,
    },
}

/// Actions on individual tasks.
#[derive(Debug, Subcommand)]
pub enum TaskAction {
    /// Edit fields of a task.
    Update {
        /// Task id (e.g. task-003).
        id: String,
        /// New status (todo, in_progress, in_review, done).
        #[arg(long)]
        status: Option<String>,
        /// New priority (critical, high, medium, low).
        #[arg(long)]
        priority: Option<String>,
        /// New estimated hours.
        #[arg(long)]
        estimated_hours: Option<f64>,
        /// New actual hours.
        #[arg(long)]
        actual_hours: Option<f64>,
        /// Replace the technical notes.
        #[arg(long)]
        notes: Option<String>,
    },
}

/// Actions on blockers.
#[derive(Debug, Subcommand)]
pub enum BlockerAction {
    /// Report a new blocker on a task.
    Add {
        /// The task being blocked.
        task_id: String,
        /// What is blocking the work.
        #[arg(long)]
        description: String,
        /// Severity (critical, high, medium, low).
        #[arg(long, default_value = "medium")]
        severity: String,
        /// Who is reporting the blocker.
        #[arg(long, default_value = "consultant")]
        reporter: String,
    },
    /// Resolve an existing blocker.
    Resolve {
        /// The blocker id.
        id: String,
        /// How it was resolved.
        #[arg(long)]
        resolution: String,
        /// Who resolved it.
        #[arg(long, default_value = "consultant")]
        resolver: String,
    },
}
