//! Command implementations: show, add, history, stats, goal, config.
//!
//! Each runs to completion and prints plain text (or JSON) to stdout.

use std::error::Error;
use std::io::{self, Read};
use std::path::Path;

use chrono::{Local, Utc};

use crate::core::analyze::AnalysisResult;
use crate::core::api_key;
use crate::core::config::{self, KeySource};
use crate::core::goal;
use crate::core::paths;
use crate::core::problems::{Problem, ProblemStore};
use crate::core::render::{self, SolutionReport};
use crate::core::solution::parse_solution;
use crate::core::stats;

pub type CmdResult = Result<(), Box<dyn Error>>;

/// Read text from a file, or from stdin when `path` is `None` or `-`.
fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Print one raw solution as steps plus final answer.
pub fn print_solution(raw: &str, json: bool, width: usize) -> CmdResult {
    let parsed = parse_solution(raw);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&SolutionReport::new(&parsed))?
        );
    } else {
        print!("{}", render::render_solution(&parsed, width));
    }
    Ok(())
}

/// Run the `show` command: parse a raw solution from a file or stdin.
pub fn run_show(input: Option<&Path>, json: bool, width: usize) -> CmdResult {
    let raw = read_input(input)?;
    print_solution(&raw, json, width)
}

/// Run the `add` command: record a problem whose solution text is already at hand.
pub fn run_add(
    problem_type: &str,
    subject: Option<&str>,
    image: Option<&str>,
    input: Option<&Path>,
) -> CmdResult {
    let solution = read_input(input)?;
    if solution.trim().is_empty() {
        return Err("solution text is empty".into());
    }
    let problem = Problem::new(
        image.unwrap_or("-"),
        AnalysisResult {
            problem_type: problem_type.to_string(),
            subject: subject.unwrap_or_default().to_string(),
            solution,
        },
    );
    ProblemStore::open()?.save(&problem)?;
    println!("Saved {}", problem.id);
    Ok(())
}

fn header(problem: &Problem) -> String {
    let created = problem
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M");
    let kind = match &problem.subject {
        Some(subject) => format!("{} / {}", subject, problem.problem_type),
        None => problem.problem_type.clone(),
    };
    format!("{}  {}  {}", problem.short_id(), created, kind)
}

/// Run `history list`: newest first, one line per problem with its answer.
pub fn run_history_list(limit: Option<usize>) -> CmdResult {
    let problems = ProblemStore::open()?.list()?;
    if problems.is_empty() {
        println!("No problems yet.");
        return Ok(());
    }
    let limit = limit.unwrap_or(usize::MAX);
    for problem in problems.iter().take(limit) {
        let answer = parse_solution(&problem.solution)
            .final_answer()
            .unwrap_or_else(|| render::ANSWER_NOT_FOUND.to_string());
        println!("{}  →  {}", header(problem), answer);
    }
    Ok(())
}

/// Run `history show`: render each problem in turn, for side-by-side review.
pub fn run_history_show(ids: &[String], json: bool, width: usize) -> CmdResult {
    let store = ProblemStore::open()?;
    let problems = ids
        .iter()
        .map(|id| store.get(id))
        .collect::<Result<Vec<_>, _>>()?;

    for (i, problem) in problems.iter().enumerate() {
        if i > 0 && !json {
            println!("{}", "─".repeat(width.min(60)));
        }
        if !json {
            println!("{}\n", header(problem));
        }
        print_solution(&problem.solution, json, width)?;
    }
    Ok(())
}

/// Run `history delete`.
pub fn run_history_delete(id: &str) -> CmdResult {
    let removed = ProblemStore::open()?.delete(id)?;
    println!("Deleted {}", removed.id);
    Ok(())
}

/// Run `stats`.
pub fn run_stats(json: bool) -> CmdResult {
    let problems = ProblemStore::open()?.list()?;
    let stats = stats::compute(&problems, Utc::now());
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Total problems: {}", stats.total_problems);
    let sections = [
        ("Top problem types", &stats.top_problem_types),
        ("Last 7 days", &stats.recent_trend),
        ("Subjects", &stats.subject_distribution),
    ];
    for (title, counts) in sections {
        println!("\n{}:", title);
        if counts.is_empty() {
            println!("  —");
        }
        for c in counts {
            println!("  {:<20} {}", c.label, c.count);
        }
    }
    Ok(())
}

/// Run `goal`: today's progress against the daily goal.
pub fn run_goal() -> CmdResult {
    let store = ProblemStore::open()?;
    let goal = goal::load_goal(store.dir())?;
    let progress = goal::progress(&goal, &store.list()?, Local::now().date_naive());
    println!(
        "Today: {}/{} ({}%){}",
        progress.completed,
        progress.goal,
        progress.percentage,
        if progress.achieved { " ✓ goal reached" } else { "" }
    );
    Ok(())
}

/// Run `goal set N`.
pub fn run_goal_set(daily_goal: u32) -> CmdResult {
    let store = ProblemStore::open()?;
    let goal = goal::set_goal(store.dir(), daily_goal)?;
    println!("Daily goal set to {}", goal.daily_goal);
    Ok(())
}

/// Run the `config` command: display paths, model, and API key status.
pub fn run_config() {
    let config_dir = paths::config_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let data_dir = paths::data_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let key_status = match config::key_source() {
        KeySource::Env => "set ✓ (environment)",
        KeySource::Stored => "set ✓ (stored)",
        KeySource::Missing => "not set",
    };

    println!("Config:   {}", config_dir);
    println!("Data:     {}", data_dir);
    println!("Model:    {}", config::model_id());
    println!("API key:  {}", key_status);
}

/// Run `config set-api-key`: store the key given, or read it from stdin.
pub fn run_config_set_api_key(api_key: Option<&str>) -> CmdResult {
    let key = match api_key {
        Some(k) if !k.trim().is_empty() => k.to_string(),
        _ => read_input(None)?,
    };
    let path = api_key::store_api_key(&key)?;
    println!("API key saved to {}", path.display());
    Ok(())
}
