//! 명령줄 인자
//!
//! 하위 명령 없이 실행하면 터미널 화면을 연다. `routine` 하위 명령은 화면 없이 실행된다.

use crate::config::Config;
use crate::models::{FilterCriteria, OperationType, RoutineTask};
use crate::system::{run_routine, FileSystem, LocalFileService, RoutineStore};
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// filesift – browse a folder, filter its files and move, copy, delete or rename them in bulk
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder to open at startup (overrides `start_dir` in the config)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage and run saved organizing routines
    #[command(subcommand)]
    Routine(RoutineCommand),
}

#[derive(Subcommand, Debug)]
pub enum RoutineCommand {
    /// List saved routines
    List,
    /// Print a routine's tasks
    Show { name: String },
    /// Run every task of a routine
    Run { name: String },
    /// Append a task to a routine (created when missing)
    Add {
        name: String,
        /// move, copy, delete or rename
        #[arg(long, value_parser = parse_action)]
        action: OperationType,
        /// Folder to search
        #[arg(long)]
        dir: PathBuf,
        /// Destination folder (move / copy)
        #[arg(long)]
        dest: Option<PathBuf>,
        /// New base name (rename)
        #[arg(long)]
        stem: Option<String>,
        /// Comma-separated tags to match in file names
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Comma-separated extensions, without the dot
        #[arg(long = "ext", value_delimiter = ',')]
        extensions: Vec<String>,
        /// Minimum size, e.g. 10KB
        #[arg(long)]
        min: Option<String>,
        /// Maximum size, e.g. 2MB
        #[arg(long)]
        max: Option<String>,
    },
}

fn parse_action(value: &str) -> Result<OperationType, String> {
    value.parse()
}

/// `routine` 하위 명령 실행
pub fn run_routine_command(
    command: RoutineCommand,
    config: &Config,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let store = RoutineStore::new(config.routines_dir());

    match command {
        RoutineCommand::List => {
            let names = store.list().context("cannot list routines")?;
            if names.is_empty() {
                writeln!(out, "no routines in {}", store.dir().display())?;
            }
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        RoutineCommand::Show { name } => {
            let routine = store.load(&name)?;
            writeln!(out, "{}", toml::to_string_pretty(&routine)?)?;
        }
        RoutineCommand::Run { name } => {
            let mut routine = store.load(&name)?;
            let service =
                LocalFileService::new(FileSystem::with_delete_mode(config.delete_mode));
            let reports = run_routine(&routine, &service)?;
            for (i, report) in reports.iter().enumerate() {
                writeln!(out, "task {}: {}", i + 1, report.summary())?;
                for failure in &report.failures {
                    writeln!(out, "  {}: {}", failure.path.display(), failure.reason)?;
                }
            }
            routine.mark_run(chrono::Local::now());
            store.save(&routine)?;
            if reports.iter().any(|r| !r.is_success()) {
                bail!("routine '{name}' finished with failures");
            }
        }
        RoutineCommand::Add {
            name,
            action,
            dir,
            dest,
            stem,
            tags,
            extensions,
            min,
            max,
        } => {
            let task = RoutineTask {
                action,
                dir,
                filters: FilterCriteria {
                    tags,
                    extensions,
                    size_min: min.unwrap_or_default(),
                    size_max: max.unwrap_or_default(),
                },
                destination: dest,
                stem,
            };
            let routine = store.add_task(&name, task)?;
            writeln!(
                out,
                "routine '{}' now has {} task(s)",
                routine.name,
                routine.tasks.len()
            )?;
        }
    }
    Ok(())
}
