#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use healthtracker::core::matcher::{MatchContext, PresenceSet};
use healthtracker::db::Database;
use healthtracker::models::health::{ActivityLevel, EmotionalState, HealthRecord, HealthSnapshot};
use healthtracker::models::symptom::{Symptom, SymptomType};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

fn noon(date: NaiveDate) -> chrono::DateTime<Utc> {
    let dt = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    Utc.from_utc_datetime(&dt)
}

/// Health record dated at noon UTC.
pub fn make_record(weight_kg: f64, height_cm: f64, date: NaiveDate) -> HealthRecord {
    let mut h = HealthRecord::new(weight_kg, height_cm);
    h.recorded_at = noon(date);
    h
}

/// Symptom dated at noon UTC.
pub fn make_symptom(symptom_type: SymptomType, name: &str, severity: u8, date: NaiveDate) -> Symptom {
    let mut s = Symptom::new(symptom_type, name.to_string(), severity);
    s.logged_at = noon(date);
    s
}

pub fn snapshot(
    weight_kg: f64,
    height_cm: f64,
    activity_level: ActivityLevel,
    emotional_state: EmotionalState,
) -> HealthSnapshot {
    HealthSnapshot {
        activity_level,
        emotional_state,
        ..HealthSnapshot::new(weight_kg, height_cm)
    }
}

/// Match context for a 170 cm person of `weight_kg` with the named symptoms.
pub fn ctx(weight_kg: f64, names: &[&str]) -> MatchContext {
    MatchContext::new(
        &HealthSnapshot::new(weight_kg, 170.0),
        PresenceSet::from_names(names.iter().copied()),
    )
}

pub fn ctx_with(snapshot: &HealthSnapshot, names: &[&str]) -> MatchContext {
    MatchContext::new(snapshot, PresenceSet::from_names(names.iter().copied()))
}
