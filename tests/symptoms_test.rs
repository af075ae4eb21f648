mod common;

use chrono::{Duration, Utc};
use healthtracker::core::symptoms;
use healthtracker::models::symptom::{Symptom, SymptomKind, SymptomType};

#[test]
fn test_catalog_lists() {
    let c = symptoms::catalog();
    assert_eq!(c.physical.len(), 15);
    assert_eq!(c.mental.len(), 10);
    assert_eq!(c.physical[0], "Demam");
    assert!(c.mental.contains(&"Gangguan Tidur"));
    for name in c.physical.iter().chain(c.mental.iter()) {
        assert!(SymptomKind::from_display_name(name).is_some(), "{}", name);
    }
}

#[test]
fn test_history_grouped_by_day() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    let d1 = today - Duration::days(1);
    let d3 = today - Duration::days(3);
    db.insert_symptom(&common::make_symptom(SymptomType::Physical, "Demam", 6, d1))
        .unwrap();
    db.insert_symptom(&common::make_symptom(SymptomType::Mental, "Stres", 4, d1))
        .unwrap();
    db.insert_symptom(&common::make_symptom(SymptomType::Physical, "Batuk", 2, d3))
        .unwrap();

    let h = symptoms::history(&db, 50).unwrap();
    assert_eq!(h.symptoms.len(), 3);
    assert_eq!(h.grouped.len(), 2);
    assert_eq!(h.grouped[&d1.format("%Y-%m-%d").to_string()].len(), 2);
    assert_eq!(h.grouped[&d3.format("%Y-%m-%d").to_string()].len(), 1);
}

#[test]
fn test_history_respects_limit() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    for i in 1..=5 {
        db.insert_symptom(&common::make_symptom(SymptomType::Physical, "Pusing", 3, today - Duration::days(i)))
            .unwrap();
    }
    let h = symptoms::history(&db, 2).unwrap();
    assert_eq!(h.symptoms.len(), 2);
    assert_eq!(h.symptoms[0].logged_at.date_naive(), today - Duration::days(1));
}

#[test]
fn test_stats() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    for (name, sev) in [("Demam", 6), ("Demam", 4), ("Demam", 5), ("Stres", 3), ("Stres", 7), ("Batuk", 2)] {
        db.insert_symptom(&Symptom::new(SymptomType::Physical, name.into(), sev))
            .unwrap();
    }
    db.insert_symptom(&common::make_symptom(SymptomType::Physical, "Flu", 2, today - Duration::days(30)))
        .unwrap();

    let s = symptoms::stats(&db).unwrap();
    assert_eq!(s.symptoms_this_week, 6);
    let names: Vec<&str> = s.frequent_symptoms.iter().map(|c| c.symptom_name.as_str()).collect();
    assert_eq!(names, vec!["Demam", "Stres", "Batuk", "Flu"]);
    assert!((s.average_severity - 29.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_stats_empty() {
    let (_dir, db) = common::setup_db();
    let s = symptoms::stats(&db).unwrap();
    assert!(s.frequent_symptoms.is_empty());
    assert_eq!(s.symptoms_this_week, 0);
    assert_eq!(s.average_severity, 0.0);
}
