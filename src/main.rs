//! # solvenote
//!
//! Turns photographed exam problems into step-by-step solutions and keeps a
//! history of what was solved.
//!
//! ## Features
//! - `analyze`: send an image to a vision model and render its solution
//! - `show`: split any Markdown solution into numbered steps and a final answer
//! - History, statistics, and a daily goal over solved problems

mod cli;
mod core;
mod run;

use std::io;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands, ConfigSubcommand, GoalSubcommand, HistorySubcommand};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Err(e) = dispatch(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn dispatch(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let width = args.width;
    match args.command {
        Commands::Analyze {
            image,
            problem_type,
            no_save,
            json,
        } => run::run_analyze(&image, problem_type.as_deref(), no_save, json, width).await,
        Commands::Show { file, json } => core::cli::run_show(file.as_deref(), json, width),
        Commands::Add {
            problem_type,
            subject,
            image,
            file,
        } => core::cli::run_add(
            &problem_type,
            subject.as_deref(),
            image.as_deref(),
            file.as_deref(),
        ),
        Commands::History { subcommand } => match subcommand {
            HistorySubcommand::List { limit } => core::cli::run_history_list(limit),
            HistorySubcommand::Show { ids, json } => core::cli::run_history_show(&ids, json, width),
            HistorySubcommand::Delete { id } => core::cli::run_history_delete(&id),
        },
        Commands::Stats { json } => core::cli::run_stats(json),
        Commands::Goal { subcommand } => match subcommand {
            None => core::cli::run_goal(),
            Some(GoalSubcommand::Set { daily_goal }) => core::cli::run_goal_set(daily_goal),
        },
        Commands::Config { subcommand } => match subcommand {
            None => {
                core::cli::run_config();
                Ok(())
            }
            Some(ConfigSubcommand::SetApiKey { key }) => {
                core::cli::run_config_set_api_key(key.as_deref())
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            cli::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
