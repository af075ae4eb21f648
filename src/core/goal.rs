use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::db::Database;
use crate::models::goal::{Goal, GoalType, GoalView};

#[derive(Debug)]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub goal_type: GoalType,
    pub target: f64,
    pub unit: Option<String>,
    pub deadline: Option<NaiveDate>,
}

pub fn create_goal(db: &Database, input: NewGoal) -> Result<Goal> {
    let title = input.title.trim();
    if title.is_empty() {
        anyhow::bail!("goal title must not be empty");
    }
    if !input.target.is_finite() || input.target <= 0.0 {
        anyhow::bail!("goal target must be a positive number, got {}", input.target);
    }

    let mut goal = Goal::new(title.to_string(), input.goal_type, input.target);
    goal.description = input.description;
    goal.unit = input.unit;
    goal.deadline = input.deadline;
    db.insert_goal(&goal)?;
    tracing::info!(id = %goal.id, goal_type = %goal.goal_type, "goal created");
    Ok(goal)
}

/// All goals, newest first, with progress and days left as of `today`.
pub fn list_goals(db: &Database, today: NaiveDate) -> Result<Vec<GoalView>> {
    Ok(db
        .list_goals()?
        .into_iter()
        .map(|g| GoalView::new(g, today))
        .collect())
}

fn find_goal(db: &Database, id: &str) -> Result<Goal> {
    db.get_goal(id)?
        .ok_or_else(|| anyhow::anyhow!("goal not found: {}", id))
}

/// Set the current value. Reaching the target marks the goal completed; a
/// lower value never clears a completion.
pub fn update_progress(db: &Database, id: &str, current: f64) -> Result<Goal> {
    if !current.is_finite() || current < 0.0 {
        anyhow::bail!("progress must be a non-negative number, got {}", current);
    }
    let mut goal = find_goal(db, id)?;
    goal.current = current;
    if goal.current >= goal.target {
        goal.is_completed = true;
    }
    goal.updated_at = Utc::now();
    db.update_goal_progress(&goal)?;
    tracing::info!(id = %goal.id, current, completed = goal.is_completed, "goal progress updated");
    Ok(goal)
}

pub fn toggle_complete(db: &Database, id: &str) -> Result<Goal> {
    let mut goal = find_goal(db, id)?;
    goal.is_completed = !goal.is_completed;
    goal.updated_at = Utc::now();
    db.update_goal_progress(&goal)?;
    tracing::info!(id = %goal.id, completed = goal.is_completed, "goal toggled");
    Ok(goal)
}

pub fn delete_goal(db: &Database, id: &str) -> Result<bool> {
    db.delete_goal(id)
}

#[derive(Debug, PartialEq, Serialize)]
pub struct GoalStats {
    pub total: u64,
    pub completed: u64,
    pub in_progress: u64,
}

pub fn stats(db: &Database) -> Result<GoalStats> {
    let (total, completed) = db.goal_counts()?;
    Ok(GoalStats {
        total,
        completed,
        in_progress: total - completed,
    })
}
