//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  solvenote analyze photo.jpg             Solve a photographed problem and save it
  solvenote analyze photo.jpg --no-save   Solve without recording history
  solvenote show solution.md              Split a saved Markdown solution into steps
  pbpaste | solvenote show -              Read the solution from stdin
  solvenote add --type 수학-방정식 sol.md   Record a solution you already have
  solvenote history list --limit 5        Most recent problems
  solvenote history show 3f2a 9c1b        Review two problems one after the other
  solvenote stats                         Problem types, 7-day trend, subjects
  solvenote goal set 15                   Change the daily goal
  solvenote config set-api-key            Store the API key (reads stdin)
  solvenote completions bash              Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Step-by-step solutions for photographed exam problems",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Wrap width for rendered solutions
    #[arg(long, default_value_t = 80, global = true)]
    pub width: usize,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a problem image with the vision model
    Analyze {
        /// Image file (jpg, png, webp, gif)
        image: PathBuf,
        /// Override the problem type reported by the model
        #[arg(long = "type")]
        problem_type: Option<String>,
        /// Print the solution without adding it to history
        #[arg(long)]
        no_save: bool,
        /// Print steps and answer as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse a Markdown solution into steps and a final answer
    Show {
        /// Solution file ('-' or omitted reads stdin)
        file: Option<PathBuf>,
        /// Print steps and answer as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a problem from an existing solution text
    Add {
        /// Problem type, e.g. 수학-방정식
        #[arg(long = "type")]
        problem_type: String,
        /// Subject, e.g. 수학
        #[arg(long)]
        subject: Option<String>,
        /// Where the original image lives
        #[arg(long)]
        image: Option<String>,
        /// Solution file ('-' or omitted reads stdin)
        file: Option<PathBuf>,
    },
    /// Browse and manage solved problems
    History {
        #[command(subcommand)]
        subcommand: HistorySubcommand,
    },
    /// Show statistics over solved problems
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Show today's progress, or change the daily goal
    Goal {
        #[command(subcommand)]
        subcommand: Option<GoalSubcommand>,
    },
    /// Show config paths, model, and API key status
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum HistorySubcommand {
    /// List problems, newest first
    List {
        /// Maximum number of problems to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one or more problems by id (a unique prefix is enough)
    Show {
        #[arg(required = true)]
        ids: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Delete a problem by id
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum GoalSubcommand {
    /// Set the number of problems to solve per day
    Set { daily_goal: u32 },
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Store the API key in the config directory (reads stdin when omitted)
    SetApiKey { key: Option<String> },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn log_level_follows_flags() {
        let args = Args::parse_from(["solvenote", "stats"]);
        assert_eq!(args.log_level(), "warn");
        let args = Args::parse_from(["solvenote", "-vv", "stats"]);
        assert_eq!(args.log_level(), "debug");
        let args = Args::parse_from(["solvenote", "stats", "-q"]);
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn analyze_flags() {
        let args = Args::parse_from(["solvenote", "analyze", "p.jpg", "--type", "수학", "--no-save"]);
        match args.command {
            Commands::Analyze {
                image,
                problem_type,
                no_save,
                json,
            } => {
                assert_eq!(image, PathBuf::from("p.jpg"));
                assert_eq!(problem_type.as_deref(), Some("수학"));
                assert!(no_save);
                assert!(!json);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn history_show_needs_an_id() {
        assert!(Args::try_parse_from(["solvenote", "history", "show"]).is_err());
    }
}
