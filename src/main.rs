use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use task_tracker::{Filter, Mark, TaskStore};

const DATA_FILE: &str = "tasks.json";
const ID_FILE: &str = "id.txt";

/// A CLI application to track and manage your tasks.
#[derive(Parser, Debug)]
struct Cli {
    /// Directory where tasks are saved.
    #[arg(long, default_value = ".tasks")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a new task with a description.
    Add {
        /// The description of the task.
        description: String,
    },
    /// Delete a task by its ID.
    Delete {
        /// ID of the task to delete.
        id: u32,
    },
    /// Update the description of an existing task.
    Update {
        /// ID of the task to update.
        id: u32,
        /// New description for the task.
        description: String,
    },
    /// Mark a task with a new status.
    Mark {
        /// ID of the task to update.
        id: u32,
        /// New status to set for the task.
        status: MarkArg,
    },
    /// List tasks filtered by status.
    List {
        /// Filter tasks by status.
        #[arg(default_value = "all")]
        status: FilterArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    InProgress,
    Done,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::InProgress => Mark::InProgress,
            MarkArg::Done => Mark::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Todo,
    InProgress,
    Done,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Filter::All,
            FilterArg::Todo => Filter::Todo,
            FilterArg::InProgress => Filter::InProgress,
            FilterArg::Done => Filter::Done,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut store = TaskStore::load(&args.dir, DATA_FILE, ID_FILE);

    match args.command {
        Commands::Add { description } => {
            let id = store.add(description);
            println!("Task added successfully (ID: {id})");
        }
        Commands::Delete { id } => store.delete(id)?,
        Commands::Update { id, description } => store.update(id, description)?,
        Commands::Mark { id, status } => store.mark(id, status.into())?,
        Commands::List { status } => {
            // Read-only, so no save needed; print and return early.
            print_listing(&store, status.into());
            return Ok(());
        }
    }

    store.save()?;
    Ok(())
}

fn print_listing(store: &TaskStore, filter: Filter) {
    let mut tasks = store.list(filter).peekable();
    if tasks.peek().is_none() {
        println!("No items to display.");
        return;
    }

    println!(
        "{:<6} {:<40} {:<12} {:<20} {:<20}",
        "ID", "Description", "Status", "Created At", "Updated At"
    );
    for task in tasks {
        println!(
            "{:<6} {:<40} {:<12} {:<20} {:<20}",
            task.id,
            task.description,
            task.status.to_string(),
            task.created_at_display(),
            task.updated_at_display(),
        );
    }
}
