use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};

pub use crate::cli_ops::*;

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightCyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::BrightMagenta.on_default())
}

#[derive(Debug, Parser)]
#[command(name = "liftlog")]
#[command(bin_name = "liftlog")]
#[command(version)]
#[command(about = "A local workout log: weeks, training days, workouts and sets")]
#[command(styles = cli_styles())]
pub struct Cli {
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "LIFTLOG_DB_PATH",
        help = "Path to the SQLite training log (default .liftlog/state.sqlite)."
    )]
    pub db: Option<String>,

    #[arg(
        short = 'c',
        long,
        global = true,
        env = "LIFTLOG_CONFIG",
        help = "Path to a config.toml (default .liftlog/config.toml when present)."
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = "LIFTLOG_LOG",
        help = "Log level or filter directive, for example debug or liftlog=trace."
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Create, list, show, edit and delete training weeks.")]
    Week(WeekArgs),
    #[command(about = "Plan the workout days of a week.")]
    Day(DayArgs),
    #[command(about = "Log workouts on a day.")]
    Workout(WorkoutArgs),
    #[command(about = "Record weight/sets/reps rows of a workout.")]
    Set(SetArgs),
    #[command(about = "Print the weight or volume series of one exercise.")]
    Progress(ProgressArgs),
    #[command(about = "Manage remembered exercise names.")]
    Names(NamesArgs),
    #[command(about = "Fold legacy weight/sets/reps columns into set rows.")]
    MigrateLegacy,
    #[command(about = "Generate or install shell completions.")]
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
#[command(about = "Generate or install shell completions.")]
pub struct CompletionsArgs {
    #[arg(help = "Shell name (bash, zsh, fish). Auto-detected if omitted.")]
    pub shell: Option<String>,

    #[arg(
        short = 'i',
        long = "install",
        help = "Write completions to the canonical path for the shell."
    )]
    pub install: bool,
}

#[derive(Debug, Args)]
#[command(about = "Print an exercise's progress series.")]
pub struct ProgressArgs {
    #[arg(help = "Exact exercise name. Omit to list chartable names.")]
    pub name: Option<String>,

    #[arg(
        short = 'm',
        long,
        default_value = "weight",
        help = "Metric to chart: weight (mean set weight) or volume (sets x reps x weight)."
    )]
    pub metric: String,

    #[arg(long, help = "Render JSON output.")]
    pub json: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
