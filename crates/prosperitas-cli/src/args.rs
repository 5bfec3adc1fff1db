use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{LessonCommands, ListLibraryArgs, ResetArgs, SimulateArgs};

/// Terminal front-end for the Prosperitas learning tracker
///
/// Prosperitas walks a learner through a catalog of financial-education
/// modules. Lessons unlock one after another as they are completed, earning
/// points and levels along the way. A compound-growth simulator projects how
/// savings grow over the years.
#[derive(Parser)]
#[command(version, about, name = "prosperitas")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/prosperitas/prosperitas.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Never contact the content service; use built-in texts instead
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Prosperitas CLI
///
/// Running without a subcommand shows the dashboard.
#[derive(Subcommand)]
pub enum Commands {
    /// Show progress, points and the next lesson
    #[command(alias = "d")]
    Dashboard,
    /// Browse the module library
    #[command(alias = "lib")]
    Library(ListLibraryArgs),
    /// Read, complete or favorite lessons
    #[command(alias = "l")]
    Lesson {
        #[command(subcommand)]
        command: LessonCommands,
    },
    /// List favorite lessons
    #[command(alias = "fav")]
    Favorites,
    /// Project compound growth of savings
    #[command(alias = "sim")]
    Simulate(SimulateArgs),
    /// Show a motivational quote
    Quote,
    /// Wipe all progress and start over
    Reset(ResetArgs),
}
