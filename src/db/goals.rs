use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Row, params};

use crate::models::goal::Goal;

use super::Database;

const COLUMNS: &str =
    "id, title, description, goal_type, target, current, unit, deadline, is_completed, created_at, updated_at";

impl Database {
    pub fn insert_goal(&self, g: &Goal) -> Result<()> {
        self.conn.execute(
            "INSERT INTO goals (id, title, description, goal_type, target, current, unit, deadline, is_completed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                g.id,
                g.title,
                g.description,
                g.goal_type.as_str(),
                g.target,
                g.current,
                g.unit,
                g.deadline.map(|d| d.format("%Y-%m-%d").to_string()),
                g.is_completed,
                g.created_at.to_rfc3339(),
                g.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Newest first.
    pub fn list_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM goals ORDER BY created_at DESC",
            COLUMNS
        ))?;
        let rows = stmt.query_map([], GoalRow::from_row)?;

        let mut goals = Vec::new();
        for row in rows {
            goals.push(row_to_goal(row?)?);
        }
        Ok(goals)
    }

    pub fn get_goal(&self, id: &str) -> Result<Option<Goal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM goals WHERE id = ?1", COLUMNS))?;
        let mut rows = stmt.query_map(params![id], GoalRow::from_row)?;
        match rows.next() {
            Some(row) => Ok(Some(row_to_goal(row?)?)),
            None => Ok(None),
        }
    }

    /// Persist progress and completion. Returns false when the id is unknown.
    pub fn update_goal_progress(&self, g: &Goal) -> Result<bool> {
        let count = self.conn.execute(
            "UPDATE goals SET current = ?2, is_completed = ?3, updated_at = ?4 WHERE id = ?1",
            params![g.id, g.current, g.is_completed, g.updated_at.to_rfc3339()],
        )?;
        Ok(count > 0)
    }

    pub fn delete_goal(&self, id: &str) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM goals WHERE id = ?1", params![id])?;
        Ok(count > 0)
    }

    /// `(total, completed)`.
    pub fn goal_counts(&self) -> Result<(u64, u64)> {
        let (total, completed): (i64, i64) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(is_completed), 0) FROM goals",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok((total as u64, completed as u64))
    }
}

struct GoalRow {
    id: String,
    title: String,
    description: Option<String>,
    goal_type: String,
    target: f64,
    current: f64,
    unit: Option<String>,
    deadline: Option<String>,
    is_completed: bool,
    created_at: String,
    updated_at: String,
}

impl GoalRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            goal_type: row.get(3)?,
            target: row.get(4)?,
            current: row.get(5)?,
            unit: row.get(6)?,
            deadline: row.get(7)?,
            is_completed: row.get(8)?,
            created_at: row.get(9)?,
            updated_at: row.get(10)?,
        })
    }
}

fn row_to_goal(r: GoalRow) -> Result<Goal> {
    let deadline = r
        .deadline
        .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d"))
        .transpose()?;
    let created_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.created_at)?.with_timezone(&Utc);
    let updated_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.updated_at)?.with_timezone(&Utc);
    Ok(Goal {
        id: r.id,
        title: r.title,
        description: r.description,
        goal_type: r.goal_type.parse()?,
        target: r.target,
        current: r.current,
        unit: r.unit,
        deadline,
        is_completed: r.is_completed,
        created_at,
        updated_at,
    })
}
