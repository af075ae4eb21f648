use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{OptionalExtension, Row, params};

use crate::models::water::WaterIntake;

use super::Database;

struct WaterRow {
    date: String,
    glasses: i64,
    goal: i64,
    updated_at: String,
}

impl WaterRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            date: row.get(0)?,
            glasses: row.get(1)?,
            goal: row.get(2)?,
            updated_at: row.get(3)?,
        })
    }
}

fn row_to_intake(r: WaterRow) -> Result<WaterIntake> {
    let updated_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.updated_at)?.with_timezone(&Utc);
    Ok(WaterIntake {
        date: NaiveDate::parse_from_str(&r.date, "%Y-%m-%d")?,
        glasses: u32::try_from(r.glasses)?,
        goal: u32::try_from(r.goal)?,
        updated_at,
    })
}

impl Database {
    pub fn water_for_date(&self, date: NaiveDate) -> Result<Option<WaterIntake>> {
        let row = self
            .conn
            .query_row(
                "SELECT date, glasses, goal, updated_at FROM water_intake WHERE date = ?1",
                params![date.format("%Y-%m-%d").to_string()],
                WaterRow::from_row,
            )
            .optional()?;
        row.map(row_to_intake).transpose()
    }

    /// Insert the day's row or overwrite its counts.
    pub fn upsert_water(&self, w: &WaterIntake) -> Result<()> {
        self.conn.execute(
            "INSERT INTO water_intake (date, glasses, goal, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(date) DO UPDATE SET
                glasses = excluded.glasses,
                goal = excluded.goal,
                updated_at = excluded.updated_at",
            params![
                w.date.format("%Y-%m-%d").to_string(),
                w.glasses as i64,
                w.goal as i64,
                w.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Most recent day first.
    pub fn water_history(&self, limit: u32) -> Result<Vec<WaterIntake>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, glasses, goal, updated_at FROM water_intake
             ORDER BY date DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], WaterRow::from_row)?;

        let mut days = Vec::new();
        for row in rows {
            days.push(row_to_intake(row?)?);
        }
        Ok(days)
    }
}
