mod common;

use chrono::{Duration, Utc};
use healthtracker::core::context;
use healthtracker::core::recommend::Axis;
use healthtracker::models::config::Config;
use healthtracker::models::health::{ActivityLevel, BmiCategory, EmotionalState};
use healthtracker::models::symptom::{SymptomKind, SymptomType};

#[test]
fn test_context_empty_db() {
    let (_dir, db) = common::setup_db();
    let ctx = context::for_axis(&db, &Config::default(), Axis::Food).unwrap();
    assert_eq!(ctx.bmi_category, BmiCategory::Underweight);
    assert_eq!(ctx.activity_level, ActivityLevel::Unspecified);
    assert_eq!(ctx.emotional_state, EmotionalState::Unspecified);
    assert!(ctx.presence.is_empty());
}

#[test]
fn test_emotional_axis_reads_mental_only() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    db.insert_symptom(&common::make_symptom(SymptomType::Physical, "Demam", 5, today - Duration::days(1)))
        .unwrap();
    db.insert_symptom(&common::make_symptom(SymptomType::Mental, "Stres", 5, today - Duration::days(2)))
        .unwrap();

    let config = Config::default();
    let emotional = context::for_axis(&db, &config, Axis::Emotional).unwrap();
    assert!(emotional.presence.is_present(SymptomKind::Stress));
    assert!(!emotional.presence.is_present(SymptomKind::Fever));

    let food = context::for_axis(&db, &config, Axis::Food).unwrap();
    assert_eq!(food.presence.len(), 2);
}

#[test]
fn test_recency_limit() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    db.insert_symptom(&common::make_symptom(SymptomType::Physical, "Flu", 5, today - Duration::days(1)))
        .unwrap();
    db.insert_symptom(&common::make_symptom(SymptomType::Physical, "Diare", 5, today - Duration::days(9)))
        .unwrap();

    let mut config = Config::default();
    config.limits.recommendation_symptoms = 1;
    let ctx = context::for_menu(&db, &config).unwrap();
    assert!(ctx.presence.is_present(SymptomKind::Flu));
    assert!(!ctx.presence.is_present(SymptomKind::Diarrhea));
}

#[test]
fn test_exercise_axis_uses_profile_activity() {
    let (_dir, db) = common::setup_db();
    db.insert_health_record(&healthtracker::models::HealthRecord::new(65.0, 170.0))
        .unwrap();

    let mut config = Config::default();
    config.profile.activity_level = ActivityLevel::Active;

    let exercise = context::for_axis(&db, &config, Axis::Exercise).unwrap();
    assert_eq!(exercise.activity_level, ActivityLevel::Active);
    let food = context::for_axis(&db, &config, Axis::Food).unwrap();
    assert_eq!(food.activity_level, ActivityLevel::Unspecified);
}

#[test]
fn test_latest_snapshot_uses_newest_record() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    let mut h = common::make_record(95.0, 170.0, today - Duration::days(1));
    h.emotional_state = EmotionalState::Sad;
    db.insert_health_record(&h).unwrap();
    db.insert_health_record(&common::make_record(60.0, 170.0, today - Duration::days(3)))
        .unwrap();

    let snap = context::latest_snapshot(&db).unwrap();
    assert_eq!(snap.weight_kg, 95.0);
    assert_eq!(snap.emotional_state, EmotionalState::Sad);
}
