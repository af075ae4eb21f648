mod common;

use chrono::{Duration, Utc};
use healthtracker::db::HealthRepository;
use healthtracker::models::health::{ActivityLevel, EmotionalState};
use healthtracker::models::symptom::{Symptom, SymptomType};

#[test]
fn test_open_creates_schema_and_is_reopenable() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data.db");
    {
        let db = healthtracker::db::Database::open(&path).unwrap();
        db.insert_health_record(&healthtracker::models::HealthRecord::new(70.0, 175.0))
            .unwrap();
    }
    let db = healthtracker::db::Database::open(&path).unwrap();
    assert_eq!(db.count_health_records().unwrap(), 1);
}

#[cfg(unix)]
#[test]
fn test_database_file_is_private() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("data.db");
    healthtracker::db::Database::open(&path).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_health_record_roundtrip_fields() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    let mut h = common::make_record(72.0, 170.0, today - Duration::days(1));
    h.activity_level = ActivityLevel::Moderate;
    h.emotional_state = EmotionalState::Anxious;
    h.daily_schedule = Some("kerja 9-5".into());
    db.insert_health_record(&h).unwrap();

    let got = db.latest_health_record().unwrap().unwrap();
    assert_eq!(got.id, h.id);
    assert_eq!(got.activity_level, ActivityLevel::Moderate);
    assert_eq!(got.emotional_state, EmotionalState::Anxious);
    assert_eq!(got.daily_schedule.as_deref(), Some("kerja 9-5"));
    assert!(got.notes.is_none());
    assert!((got.bmi - h.bmi).abs() < 1e-9);
}

#[test]
fn test_latest_health_record_empty() {
    let (_dir, db) = common::setup_db();
    assert!(db.latest_health_record().unwrap().is_none());
    assert!(db.latest_health_snapshot().unwrap().is_none());
}

#[test]
fn test_latest_is_by_recorded_at() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    db.insert_health_record(&common::make_record(70.0, 170.0, today - Duration::days(1)))
        .unwrap();
    // Inserted later but dated earlier.
    db.insert_health_record(&common::make_record(90.0, 170.0, today - Duration::days(5)))
        .unwrap();

    let latest = db.latest_health_record().unwrap().unwrap();
    assert_eq!(latest.weight_kg, 70.0);

    let list = db.list_health_records(10).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].weight_kg, 70.0);
    assert_eq!(list[1].weight_kg, 90.0);
}

#[test]
fn test_list_symptoms_filter_and_limit() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    for (i, (t, name)) in [
        (SymptomType::Physical, "Demam"),
        (SymptomType::Mental, "Stres"),
        (SymptomType::Physical, "Batuk"),
        (SymptomType::Mental, "Burnout"),
    ]
    .into_iter()
    .enumerate()
    {
        db.insert_symptom(&common::make_symptom(t, name, 4, today - Duration::days(i as i64 + 1)))
            .unwrap();
    }

    let all = db.list_symptoms(10, None).unwrap();
    let names: Vec<&str> = all.iter().map(|s| s.symptom_name.as_str()).collect();
    assert_eq!(names, vec!["Demam", "Stres", "Batuk", "Burnout"]);

    let mental = db.recent_symptoms(1, Some(SymptomType::Mental)).unwrap();
    assert_eq!(mental.len(), 1);
    assert_eq!(mental[0].symptom_name, "Stres");
}

#[test]
fn test_severity_check_constraint() {
    let (_dir, db) = common::setup_db();
    let bad = Symptom::new(SymptomType::Physical, "Demam".into(), 11);
    assert!(db.insert_symptom(&bad).is_err());
}

#[test]
fn test_insert_symptoms_is_atomic() {
    let (_dir, mut db) = common::setup_db();
    let ok = Symptom::new(SymptomType::Physical, "Demam".into(), 5);
    let bad = Symptom::new(SymptomType::Physical, "Batuk".into(), 0);
    assert!(db.insert_symptoms(&[ok, bad]).is_err());
    assert!(db.list_symptoms(10, None).unwrap().is_empty());
}

#[test]
fn test_frequency_and_average() {
    let (_dir, db) = common::setup_db();
    assert_eq!(db.average_severity().unwrap(), 0.0);
    assert!(db.most_frequent_symptoms(5).unwrap().is_empty());

    for (name, sev) in [("Pusing", 2), ("Demam", 4), ("Demam", 6), ("Batuk", 8)] {
        db.insert_symptom(&Symptom::new(SymptomType::Physical, name.into(), sev))
            .unwrap();
    }

    let top = db.most_frequent_symptoms(2).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].symptom_name, "Demam");
    assert_eq!(top[0].count, 2);
    // Tie between Batuk and Pusing breaks by name.
    assert_eq!(top[1].symptom_name, "Batuk");

    assert!((db.average_severity().unwrap() - 5.0).abs() < 1e-9);
}

#[test]
fn test_count_symptoms_since() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    db.insert_symptom(&common::make_symptom(SymptomType::Physical, "Flu", 3, today - Duration::days(30)))
        .unwrap();
    db.insert_symptom(&Symptom::new(SymptomType::Physical, "Demam".into(), 3))
        .unwrap();

    let week_ago = Utc::now() - Duration::days(7);
    assert_eq!(db.count_symptoms_since(week_ago).unwrap(), 1);
    assert_eq!(db.symptoms_since(week_ago).unwrap()[0].symptom_name, "Demam");
}
