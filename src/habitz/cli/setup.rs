use clap::{Parser, Subcommand};
use habitz::model::{SortMode, StatusFilter};

#[derive(Parser, Debug)]
#[command(name = "habitz", version)]
#[command(about = "Keep a short list of daily habits and tick them off", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new habit
    #[command(alias = "a")]
    Add {
        /// Name of the habit (several words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List habits (the default command)
    #[command(alias = "ls")]
    List {
        /// Only show habits whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Status filter: all, completed, pending
        #[arg(short, long)]
        filter: Option<StatusFilter>,

        /// Sort: newest, oldest, alphabetical, reverse-alphabetical,
        /// completed-first, pending-first
        #[arg(short = 'o', long)]
        sort: Option<SortMode>,
    },

    /// Mark habits completed, or back to pending
    #[command(alias = "t", alias = "done")]
    Toggle {
        /// Positions from `list`, #ids, or a habit name
        #[arg(required = true, num_args = 1..)]
        habits: Vec<String>,
    },

    /// Remove habits
    #[command(alias = "rm")]
    Remove {
        /// Positions from `list`, #ids, or a habit name
        #[arg(required = true, num_args = 1..)]
        habits: Vec<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove every completed habit
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show totals and completion rate
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, default-sort, default-filter)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_flags() {
        let cli = Cli::try_parse_from([
            "habitz",
            "ls",
            "-s",
            "read",
            "-f",
            "pending",
            "-o",
            "reverse-alphabetical",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::List {
                search,
                filter,
                sort,
            }) => {
                assert_eq!(search.as_deref(), Some("read"));
                assert_eq!(filter, Some(StatusFilter::Pending));
                assert_eq!(sort, Some(SortMode::ReverseAlphabetical));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["habitz", "list", "--sort", "sideways"]).is_err());
    }

    #[test]
    fn add_collects_words() {
        let cli = Cli::try_parse_from(["habitz", "add", "Drink", "Water"]).unwrap();
        match cli.command {
            Some(Commands::Add { name }) => assert_eq!(name, vec!["Drink", "Water"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["habitz", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }
}
