//! Statistics over stored problems: top types, 7-day trend, subject distribution.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::core::problems::Problem;

const TOP_TYPES: usize = 5;
const TREND_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_problems: usize,
    pub top_problem_types: Vec<Count>,
    pub recent_trend: Vec<Count>,
    pub subject_distribution: Vec<Count>,
}

/// A label (problem type, `YYYY-MM-DD` day, or subject) and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub label: String,
    pub count: usize,
}

pub fn compute(problems: &[Problem], now: DateTime<Utc>) -> Statistics {
    let mut top_problem_types = count_by(problems.iter().map(|p| p.problem_type.as_str()));
    sort_by_count_desc(&mut top_problem_types);
    top_problem_types.truncate(TOP_TYPES);

    let since = now - Duration::days(TREND_DAYS);
    let days: Vec<String> = problems
        .iter()
        .filter(|p| p.created_at >= since)
        .map(|p| p.created_at.format("%Y-%m-%d").to_string())
        .collect();
    let mut recent_trend = count_by(days.iter().map(String::as_str));
    recent_trend.sort_by(|a, b| a.label.cmp(&b.label));

    let mut subject_distribution =
        count_by(problems.iter().filter_map(|p| p.subject.as_deref()));
    sort_by_count_desc(&mut subject_distribution);

    Statistics {
        total_problems: problems.len(),
        top_problem_types,
        recent_trend,
        subject_distribution,
    }
}

/// Counts in first-seen order.
fn count_by<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<Count> {
    let mut counts: Vec<Count> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|c| c.label == label) {
            Some(c) => c.count += 1,
            None => counts.push(Count {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

/// Stable, so ties keep first-seen order.
fn sort_by_count_desc(counts: &mut [Count]) {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
}
