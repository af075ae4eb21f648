mod common;

use chrono::{Duration, Utc};
use healthtracker::core::dashboard;
use healthtracker::models::config::Config;
use healthtracker::models::health::{BmiCategory, EmotionalState, HealthSnapshot};
use healthtracker::models::symptom::{Symptom, SymptomType};

fn titles(items: &[healthtracker::models::recommendation::RecommendationItem]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

#[test]
fn test_dashboard_empty_db() {
    let (_dir, db) = common::setup_db();
    let data = dashboard::compute(&db, &Config::default()).unwrap();

    assert!(data.latest_health.is_none());
    assert_eq!(data.total_records, 0);
    assert_eq!(data.bmi_category, BmiCategory::Underweight);
    assert_eq!(data.health_score, 85);
    assert!(data.recent_symptoms.is_empty());
    assert!(data.weekly_progress.is_empty());
    assert_eq!(titles(&data.recommendations), vec!["Perhatikan BMI Anda"]);
}

#[test]
fn test_dashboard_stressed_with_many_symptoms() {
    let (_dir, db) = common::setup_db();
    let mut h = healthtracker::models::HealthRecord::new(65.0, 170.0);
    h.emotional_state = EmotionalState::Stressed;
    db.insert_health_record(&h).unwrap();
    for name in ["Demam", "Batuk", "Pilek", "Pusing"] {
        db.insert_symptom(&Symptom::new(SymptomType::Physical, name.into(), 3))
            .unwrap();
    }

    let data = dashboard::compute(&db, &Config::default()).unwrap();
    assert_eq!(data.bmi_category, BmiCategory::Normal);
    assert_eq!(data.health_score, 70);
    assert_eq!(data.recent_symptoms.len(), 4);
    assert_eq!(
        titles(&data.recommendations),
        vec!["Kelola Stres Anda", "Banyak Gejala Terdeteksi"]
    );
    assert_eq!(data.recommendations[1].priority, "high");
}

#[test]
fn test_dashboard_ignores_old_symptoms() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    db.insert_health_record(&healthtracker::models::HealthRecord::new(65.0, 170.0))
        .unwrap();
    db.insert_symptom(&common::make_symptom(SymptomType::Physical, "Demam", 5, today - Duration::days(20)))
        .unwrap();

    let data = dashboard::compute(&db, &Config::default()).unwrap();
    assert!(data.recent_symptoms.is_empty());
    assert_eq!(data.health_score, 100);
    assert!(data.recommendations.is_empty());
}

#[test]
fn test_weekly_progress_capped_at_seven() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    for i in 1..=10 {
        db.insert_health_record(&common::make_record(70.0 - i as f64 * 0.1, 170.0, today - Duration::days(i)))
            .unwrap();
    }
    let data = dashboard::compute(&db, &Config::default()).unwrap();
    assert_eq!(data.total_records, 10);
    assert_eq!(data.weekly_progress.len(), 7);
    assert_eq!(data.weekly_progress[0].recorded_at.date_naive(), today - Duration::days(1));
}

#[test]
fn test_quick_recommendations_thresholds() {
    let snap = HealthSnapshot::new(65.0, 170.0);
    assert!(dashboard::quick_recommendations(&snap, 3).is_empty());
    assert_eq!(dashboard::quick_recommendations(&snap, 4).len(), 1);

    let mut anxious = HealthSnapshot::new(95.0, 170.0);
    anxious.emotional_state = EmotionalState::Anxious;
    let items = dashboard::quick_recommendations(&anxious, 0);
    assert_eq!(titles(&items), vec!["Perhatikan BMI Anda", "Kelola Stres Anda"]);
    assert!(items[0].description.contains("Obese"));
}

#[test]
fn test_item_serializes_type_key() {
    let items = dashboard::quick_recommendations(&HealthSnapshot::default(), 0);
    let json = serde_json::to_value(&items[0]).unwrap();
    assert_eq!(json["type"], "health");
    assert!(json.get("item_type").is_none());
}
