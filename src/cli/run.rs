//! todo run command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filter::{self, FilterMode};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::script::{self, ScriptCommand};
use crate::stats::{self, TaskStats};
use crate::task::{Task, TaskStore};

pub struct RunOptions {
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct AddedTask<'a> {
    id: u64,
    text: &'a str,
}

#[derive(Serialize)]
struct EditedTask<'a> {
    id: u64,
    text: &'a str,
}

#[derive(Serialize)]
struct ToggledTask {
    id: u64,
    is_complete: bool,
}

#[derive(Serialize)]
struct DeletedTask {
    id: u64,
    text: String,
}

#[derive(Serialize)]
struct ClearedTasks {
    removed: usize,
}

#[derive(Serialize)]
struct FilterChanged {
    filter: FilterMode,
}

#[derive(Serialize)]
struct ListView {
    filter: FilterMode,
    shown: usize,
    total: usize,
    tasks: Vec<Task>,
}

#[derive(Serialize)]
struct StatsReport {
    #[serde(flatten)]
    stats: TaskStats,
    percent_display: u32,
}

pub fn run(options: RunOptions) -> Result<()> {
    let config = match options.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::load_from_dir(Path::new(".")),
    };

    let output = OutputOptions {
        json: options.json || config.output.json,
        quiet: options.quiet || config.output.quiet,
    };

    let source = read_script(options.file.as_deref())?;
    let commands = script::parse_script(&source)?;

    let mut store = TaskStore::with_filter(config.tasks.default_filter_mode());
    for command in commands {
        apply(&mut store, &command, output)?;
    }

    Ok(())
}

fn read_script(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ScriptNotFound(path.to_path_buf()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn apply(store: &mut TaskStore, command: &ScriptCommand, output: OutputOptions) -> Result<()> {
    debug!(command = command.name(), "applying script command");

    match command {
        ScriptCommand::Add { text } => {
            let id = store.add_task(text.clone());
            let mut human = HumanOutput::new(format!("Added task {id}"));
            human.push_summary("Text", text.clone());
            if text.is_empty() {
                human.push_warning(format!("task {id} has empty text"));
            }
            confirm(output, "add", &AddedTask { id, text }, &human)
        }
        ScriptCommand::Edit { id, text } => {
            store.edit_task_text(*id, text.clone())?;
            let mut human = HumanOutput::new(format!("Updated task {id}"));
            human.push_summary("Text", text.clone());
            confirm(output, "edit", &EditedTask { id: *id, text }, &human)
        }
        ScriptCommand::Toggle { id } => {
            let is_complete = store.toggle_complete(*id)?;
            let mut human = HumanOutput::new(format!("Toggled task {id}"));
            human.push_summary("Complete", if is_complete { "yes" } else { "no" });
            confirm(
                output,
                "toggle",
                &ToggledTask {
                    id: *id,
                    is_complete,
                },
                &human,
            )
        }
        ScriptCommand::Delete { id } => {
            let removed = store.delete_task(*id)?;
            let mut human = HumanOutput::new(format!("Deleted task {id}"));
            human.push_summary("Text", removed.text.clone());
            confirm(
                output,
                "delete",
                &DeletedTask {
                    id: *id,
                    text: removed.text,
                },
                &human,
            )
        }
        ScriptCommand::Clear => {
            let removed = store.len();
            store.clear_all();
            let human = HumanOutput::new(format!("Cleared {removed} tasks"));
            confirm(output, "clear", &ClearedTasks { removed }, &human)
        }
        ScriptCommand::Filter { mode } => {
            store.set_filter(*mode);
            let mut human = HumanOutput::new("Filter set");
            human.push_summary("Mode", mode.as_str());
            confirm(output, "filter", &FilterChanged { filter: *mode }, &human)
        }
        ScriptCommand::List => {
            let snapshot = store.snapshot();
            let tasks = filter::filtered(&snapshot);

            let mut human = HumanOutput::new("Tasks");
            human.push_summary("Filter", snapshot.filter.as_str());
            human.push_summary("Shown", format!("{} of {}", tasks.len(), store.len()));
            for task in &tasks {
                human.push_detail(format_task_line(task));
            }

            let view = ListView {
                filter: snapshot.filter,
                shown: tasks.len(),
                total: store.len(),
                tasks,
            };
            emit_success(always_emit(output), "list", &view, Some(&human))
        }
        ScriptCommand::Stats => {
            let stats = stats::compute(&store.snapshot());
            let percent_display = stats::display_percent(stats.percent_completed);

            let mut human = HumanOutput::new("Stats");
            human.push_summary("Total", stats.total.to_string());
            human.push_summary("Completed", stats.completed.to_string());
            human.push_summary("Uncompleted", stats.uncompleted.to_string());
            human.push_summary("Percent completed", format!("{percent_display}%"));

            let report = StatsReport {
                stats,
                percent_display,
            };
            emit_success(always_emit(output), "stats", &report, Some(&human))
        }
    }
}

/// Mutation confirmations honor --quiet in both output formats.
fn confirm<T: Serialize>(
    output: OutputOptions,
    command: &str,
    data: &T,
    human: &HumanOutput,
) -> Result<()> {
    if output.quiet {
        return Ok(());
    }
    emit_success(output, command, data, Some(human))
}

/// Reads (list, stats) are the point of the script; emit them even when quiet.
fn always_emit(output: OutputOptions) -> OutputOptions {
    OutputOptions {
        json: output.json,
        quiet: false,
    }
}

fn format_task_line(task: &Task) -> String {
    let mark = if task.is_complete { 'x' } else { ' ' };
    format!("{} [{}] {}", task.id, mark, task.text)
}
