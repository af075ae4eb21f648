use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, Row, params};

use crate::models::reminder::Reminder;

use super::Database;

struct ReminderRow {
    id: String,
    reminder_type: String,
    label: String,
    time: String,
    is_active: bool,
    created_at: String,
}

impl ReminderRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            reminder_type: row.get(1)?,
            label: row.get(2)?,
            time: row.get(3)?,
            is_active: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

fn row_to_reminder(r: ReminderRow) -> Result<Reminder> {
    let created_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.created_at)?.with_timezone(&Utc);
    Ok(Reminder {
        id: r.id,
        reminder_type: r.reminder_type.parse()?,
        label: r.label,
        time: r.time,
        is_active: r.is_active,
        created_at,
    })
}

impl Database {
    /// Insert all reminders in one transaction.
    pub fn insert_reminders(&mut self, reminders: &[Reminder]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for r in reminders {
            tx.execute(
                "INSERT INTO reminders (id, reminder_type, label, time, is_active, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    r.id,
                    r.reminder_type.as_str(),
                    r.label,
                    r.time,
                    r.is_active,
                    r.created_at.to_rfc3339(),
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Earliest time of day first.
    pub fn list_reminders(&self) -> Result<Vec<Reminder>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, reminder_type, label, time, is_active, created_at
             FROM reminders ORDER BY time ASC, created_at ASC",
        )?;
        let rows = stmt.query_map([], ReminderRow::from_row)?;

        let mut reminders = Vec::new();
        for row in rows {
            reminders.push(row_to_reminder(row?)?);
        }
        Ok(reminders)
    }

    pub fn get_reminder(&self, id: &str) -> Result<Option<Reminder>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, reminder_type, label, time, is_active, created_at
                 FROM reminders WHERE id = ?1",
                params![id],
                ReminderRow::from_row,
            )
            .optional()?;
        row.map(row_to_reminder).transpose()
    }

    /// Overwrite the editable fields. Returns false when the id is unknown.
    pub fn update_reminder(&self, r: &Reminder) -> Result<bool> {
        let count = self.conn.execute(
            "UPDATE reminders SET reminder_type = ?2, label = ?3, time = ?4, is_active = ?5
             WHERE id = ?1",
            params![
                r.id,
                r.reminder_type.as_str(),
                r.label,
                r.time,
                r.is_active
            ],
        )?;
        Ok(count > 0)
    }

    pub fn delete_reminder(&self, id: &str) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM reminders WHERE id = ?1", params![id])?;
        Ok(count > 0)
    }

    pub fn count_reminders(&self) -> Result<u64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reminders", [], |row| row.get(0))?;
        Ok(n as u64)
    }
}
