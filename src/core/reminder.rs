use anyhow::Result;

use crate::db::Database;
use crate::models::reminder::{DEFAULT_REMINDERS, Reminder, ReminderType, normalize_time};

/// All reminders ordered by time of day. The default schedule is stored the
/// first time this runs against an empty table.
pub fn list(db: &mut Database) -> Result<Vec<Reminder>> {
    if db.count_reminders()? == 0 {
        let defaults: Vec<Reminder> = DEFAULT_REMINDERS
            .iter()
            .map(|&(t, label, time)| Reminder::new(t, label.to_string(), time.to_string()))
            .collect();
        db.insert_reminders(&defaults)?;
        tracing::info!(count = defaults.len(), "default reminders seeded");
    }
    db.list_reminders()
}

fn checked_label(label: &str) -> Result<String> {
    let label = label.trim();
    if label.is_empty() {
        anyhow::bail!("reminder label must not be empty");
    }
    Ok(label.to_string())
}

pub fn create(
    db: &mut Database,
    reminder_type: ReminderType,
    label: &str,
    time: &str,
) -> Result<Reminder> {
    let r = Reminder::new(reminder_type, checked_label(label)?, normalize_time(time)?);
    db.insert_reminders(std::slice::from_ref(&r))?;
    tracing::info!(id = %r.id, time = %r.time, "reminder created");
    Ok(r)
}

/// Fields left `None` keep their stored value.
#[derive(Debug, Default)]
pub struct ReminderUpdate<'a> {
    pub reminder_type: Option<ReminderType>,
    pub label: Option<&'a str>,
    pub time: Option<&'a str>,
    pub is_active: Option<bool>,
}

fn find_reminder(db: &Database, id: &str) -> Result<Reminder> {
    db.get_reminder(id)?
        .ok_or_else(|| anyhow::anyhow!("reminder not found: {}", id))
}

pub fn update(db: &Database, id: &str, changes: ReminderUpdate) -> Result<Reminder> {
    let mut r = find_reminder(db, id)?;
    if let Some(t) = changes.reminder_type {
        r.reminder_type = t;
    }
    if let Some(label) = changes.label {
        r.label = checked_label(label)?;
    }
    if let Some(time) = changes.time {
        r.time = normalize_time(time)?;
    }
    if let Some(active) = changes.is_active {
        r.is_active = active;
    }
    db.update_reminder(&r)?;
    tracing::info!(id = %r.id, "reminder updated");
    Ok(r)
}

pub fn toggle(db: &Database, id: &str) -> Result<Reminder> {
    let mut r = find_reminder(db, id)?;
    r.is_active = !r.is_active;
    db.update_reminder(&r)?;
    tracing::info!(id = %r.id, active = r.is_active, "reminder toggled");
    Ok(r)
}

pub fn delete(db: &Database, id: &str) -> Result<bool> {
    db.delete_reminder(id)
}
