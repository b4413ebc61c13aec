//! Application run modes: logger init and the vision analysis command.

use std::path::Path;

use crate::cli::Args;
use crate::core;
use crate::core::problems::{Problem, ProblemStore};

/// Initialize env_logger. Logs go to stderr so stdout stays clean for piping.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Analyze an image, print the rendered solution, and record it unless `no_save`.
pub async fn run_analyze(
    image: &Path,
    problem_type: Option<&str>,
    no_save: bool,
    json: bool,
    width: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = core::config::load()?;
    let mut result = core::analyze::analyze_image(&config, image).await?;
    if let Some(t) = problem_type.filter(|t| !t.trim().is_empty()) {
        result.problem_type = t.to_string();
    }

    if !json {
        match result.subject.trim() {
            "" => println!("{}\n", result.problem_type),
            subject => println!("{} / {}\n", subject, result.problem_type),
        }
    }
    core::cli::print_solution(&result.solution, json, width)?;

    if no_save {
        return Ok(());
    }
    let problem = Problem::new(image.display().to_string(), result);
    ProblemStore::open()?.save(&problem)?;
    if !json {
        eprintln!("Saved {}", problem.short_id());
    }
    Ok(())
}
