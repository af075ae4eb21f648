use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, Row, params};

use crate::models::health::HealthRecord;

use super::Database;

const COLUMNS: &str = "id, recorded_at, weight_kg, height_cm, bmi, activity_level, emotional_state, daily_schedule, notes";

struct HealthRow {
    id: String,
    recorded_at: String,
    weight_kg: f64,
    height_cm: f64,
    bmi: f64,
    activity_level: String,
    emotional_state: String,
    daily_schedule: Option<String>,
    notes: Option<String>,
}

impl HealthRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            recorded_at: row.get(1)?,
            weight_kg: row.get(2)?,
            height_cm: row.get(3)?,
            bmi: row.get(4)?,
            activity_level: row.get(5)?,
            emotional_state: row.get(6)?,
            daily_schedule: row.get(7)?,
            notes: row.get(8)?,
        })
    }
}

fn row_to_record(r: HealthRow) -> Result<HealthRecord> {
    let recorded_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.recorded_at)?.with_timezone(&Utc);
    // Older rows may carry values outside the known set; read them as unspecified.
    Ok(HealthRecord {
        id: r.id,
        recorded_at,
        weight_kg: r.weight_kg,
        height_cm: r.height_cm,
        bmi: r.bmi,
        activity_level: r.activity_level.parse().unwrap_or_default(),
        emotional_state: r.emotional_state.parse().unwrap_or_default(),
        daily_schedule: r.daily_schedule,
        notes: r.notes,
    })
}

impl Database {
    pub fn insert_health_record(&self, h: &HealthRecord) -> Result<()> {
        self.conn.execute(
            "INSERT INTO health_records (id, recorded_at, weight_kg, height_cm, bmi, activity_level, emotional_state, daily_schedule, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                h.id,
                h.recorded_at.to_rfc3339(),
                h.weight_kg,
                h.height_cm,
                h.bmi,
                h.activity_level.as_str(),
                h.emotional_state.as_str(),
                h.daily_schedule,
                h.notes,
            ],
        )?;
        Ok(())
    }

    pub fn latest_health_record(&self) -> Result<Option<HealthRecord>> {
        let sql = format!(
            "SELECT {} FROM health_records ORDER BY recorded_at DESC LIMIT 1",
            COLUMNS
        );
        let row = self
            .conn
            .query_row(&sql, [], HealthRow::from_row)
            .optional()?;
        row.map(row_to_record).transpose()
    }

    /// Most recent first.
    pub fn list_health_records(&self, limit: u32) -> Result<Vec<HealthRecord>> {
        let sql = format!(
            "SELECT {} FROM health_records ORDER BY recorded_at DESC LIMIT ?1",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![limit as i64], HealthRow::from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row_to_record(row?)?);
        }
        Ok(records)
    }

    /// Records at or after `since`, oldest first.
    pub fn health_records_since(&self, since: DateTime<Utc>) -> Result<Vec<HealthRecord>> {
        let sql = format!(
            "SELECT {} FROM health_records WHERE recorded_at >= ?1 ORDER BY recorded_at ASC",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![since.to_rfc3339()], HealthRow::from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row_to_record(row?)?);
        }
        Ok(records)
    }

    pub fn count_health_records(&self) -> Result<u64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM health_records", [], |row| row.get(0))?;
        Ok(n as u64)
    }
}
