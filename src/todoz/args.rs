use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todoz::model::Filter;

#[derive(Parser, Debug)]
#[command(name = "todoz")]
#[command(about = "A persisted to-do list for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Store directory (defaults to $TODOZ_DATA_DIR, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task
    #[command(alias = "a")]
    Add {
        /// Task text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List visible tasks under the current filter (the default command)
    #[command(alias = "ls")]
    List,

    /// Toggle the n-th visible task done/undone
    #[command(alias = "d")]
    Done {
        /// 1-based position in the visible list
        n: usize,
    },

    /// Rewrite the text of the n-th visible task
    #[command(alias = "e")]
    Edit {
        /// 1-based position in the visible list
        n: usize,

        /// New text; leaving it empty deletes the task
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },

    /// Delete the n-th visible task
    #[command(alias = "rm")]
    Delete {
        /// 1-based position in the visible list
        n: usize,
    },

    /// Remove every completed task
    Clear,

    /// Set the display filter (persists across runs)
    #[command(alias = "f")]
    Filter {
        /// One of: all, active, completed
        which: Filter,
    },
}
