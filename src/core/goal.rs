//! Daily learning goal: how many problems to work through per day.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::persistence::{self, StoreError};
use crate::core::problems::Problem;

pub const DEFAULT_DAILY_GOAL: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningGoal {
    pub daily_goal: u32,
    pub last_updated: DateTime<Utc>,
}

impl Default for LearningGoal {
    fn default() -> Self {
        Self {
            daily_goal: DEFAULT_DAILY_GOAL,
            last_updated: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub goal: u32,
    pub completed: u32,
    /// Rounded, capped at 100.
    pub percentage: u32,
    pub achieved: bool,
}

fn goal_path(dir: &Path) -> PathBuf {
    dir.join("goal.json")
}

/// Stored goal, or the default when none has been set.
pub fn load_goal(dir: &Path) -> Result<LearningGoal, StoreError> {
    Ok(persistence::read_json(&goal_path(dir))?.unwrap_or_default())
}

pub fn set_goal(dir: &Path, daily_goal: u32) -> Result<LearningGoal, StoreError> {
    if daily_goal == 0 {
        return Err(StoreError::InvalidGoal(daily_goal));
    }
    let goal = LearningGoal {
        daily_goal,
        last_updated: Utc::now(),
    };
    persistence::write_json(&goal_path(dir), &goal)?;
    Ok(goal)
}

/// Progress for `today`, counting problems created on that local calendar day.
pub fn progress(goal: &LearningGoal, problems: &[Problem], today: NaiveDate) -> GoalProgress {
    let completed = problems
        .iter()
        .filter(|p| p.created_at.with_timezone(&Local).date_naive() == today)
        .count();
    let completed = u32::try_from(completed).unwrap_or(u32::MAX);

    let percentage = match goal.daily_goal {
        // Only reachable through a hand-edited goal.json.
        0 => 100,
        target => {
            let target = u64::from(target);
            let rounded = (u64::from(completed) * 100 + target / 2) / target;
            rounded.min(100) as u32
        }
    };

    GoalProgress {
        goal: goal.daily_goal,
        completed,
        percentage,
        achieved: completed >= goal.daily_goal,
    }
}
