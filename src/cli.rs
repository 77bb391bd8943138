use clap::{Parser, Subcommand};

/// PetFoodTracker — tracks pet food supplies, projects depletion dates,
/// and reconciles feeding history when a package runs out.
#[derive(Parser, Debug)]
#[command(name = "pet_food_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food entries JSON file.
    #[arg(short, long, default_value = "food_entries.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show supply projections for active entries.
    Status {
        /// Only show entries for this pet.
        #[arg(long)]
        pet: Option<String>,
    },

    /// List all entries, active and finished.
    List,

    /// Add a new food entry interactively.
    Add,

    /// Mark an entry finished and show its feeding report.
    Finish {
        /// Entry id (fuzzy-matched against known entries).
        id: String,

        /// Finish date (YYYY-MM-DD, defaults to today).
        #[arg(long)]
        date: Option<String>,
    },

    /// Correct the finish date of a finished entry.
    SetFinishDate {
        /// Entry id (fuzzy-matched against known entries).
        id: String,

        /// Corrected finish date (YYYY-MM-DD).
        #[arg(long)]
        date: String,
    },

    /// Show the feeding report for a finished entry.
    Report {
        /// Entry id (fuzzy-matched against known entries).
        id: String,
    },

    /// Delete an entry.
    Remove {
        /// Entry id (fuzzy-matched against known entries).
        id: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Status { pet: None }
    }
}
