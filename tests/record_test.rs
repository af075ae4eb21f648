mod common;

use chrono::{NaiveDate, Timelike};
use healthtracker::core::record::{self, HealthInput, SymptomInput};
use healthtracker::models::health::{ActivityLevel, BmiCategory, EmotionalState};
use healthtracker::models::symptom::SymptomType;

fn input(name: &str, severity: i64) -> SymptomInput {
    SymptomInput {
        symptom_type: SymptomType::Physical,
        symptom_name: name.to_string(),
        severity,
        notes: None,
    }
}

// ── health records ───────────────────────────────────────────────────────────

#[test]
fn test_record_health_computes_bmi() {
    let (_dir, db) = common::setup_db();
    let recorded = record::record_health(
        &db,
        HealthInput {
            weight_kg: 80.0,
            height_cm: 170.0,
            activity_level: ActivityLevel::Light,
            emotional_state: EmotionalState::Happy,
            ..HealthInput::default()
        },
        None,
    )
    .unwrap();

    assert_eq!(recorded.bmi_category, BmiCategory::Overweight);
    assert!((recorded.health_data.bmi - 27.68).abs() < 0.01);
    assert_eq!(db.count_health_records().unwrap(), 1);
}

#[test]
fn test_record_health_rejects_non_positive() {
    let (_dir, db) = common::setup_db();
    for (w, h) in [(0.0, 170.0), (-5.0, 170.0), (70.0, 0.0), (70.0, -1.0)] {
        let res = record::record_health(
            &db,
            HealthInput {
                weight_kg: w,
                height_cm: h,
                ..HealthInput::default()
            },
            None,
        );
        assert!(res.is_err(), "{} / {} should be rejected", w, h);
    }
    assert_eq!(db.count_health_records().unwrap(), 0);
}

#[test]
fn test_record_health_rejects_non_finite() {
    let (_dir, db) = common::setup_db();
    let cases = [
        (f64::INFINITY, 170.0),
        (f64::NEG_INFINITY, 170.0),
        (f64::NAN, 170.0),
        (70.0, f64::INFINITY),
        (70.0, f64::NEG_INFINITY),
        (70.0, f64::NAN),
    ];
    for (w, h) in cases {
        let err = record::record_health(
            &db,
            HealthInput {
                weight_kg: w,
                height_cm: h,
                ..HealthInput::default()
            },
            None,
        )
        .unwrap_err();
        assert!(
            err.to_string().contains("must be a positive number"),
            "{} / {}: {}",
            w,
            h,
            err
        );
    }
    assert_eq!(db.count_health_records().unwrap(), 0);
}

#[test]
fn test_record_health_backdated_to_noon() {
    let (_dir, db) = common::setup_db();
    let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    let recorded = record::record_health(
        &db,
        HealthInput {
            weight_kg: 60.0,
            height_cm: 165.0,
            ..HealthInput::default()
        },
        Some(date),
    )
    .unwrap();
    assert_eq!(recorded.health_data.recorded_at.date_naive(), date);
    assert_eq!(recorded.health_data.recorded_at.hour(), 12);
}

// ── single symptom ───────────────────────────────────────────────────────────

#[test]
fn test_log_symptom_severity_bounds() {
    let (_dir, db) = common::setup_db();
    assert!(record::log_symptom(&db, input("Demam", 1)).is_ok());
    assert!(record::log_symptom(&db, input("Demam", 10)).is_ok());

    let err = record::log_symptom(&db, input("Demam", 0)).unwrap_err();
    assert!(err.to_string().contains("severity must be between 1 and 10, got 0"));
    assert!(record::log_symptom(&db, input("Demam", 11)).is_err());
    assert!(record::log_symptom(&db, input("Demam", -3)).is_err());

    assert_eq!(db.list_symptoms(10, None).unwrap().len(), 2);
}

#[test]
fn test_log_symptom_rejects_blank_name() {
    let (_dir, db) = common::setup_db();
    assert!(record::log_symptom(&db, input("   ", 5)).is_err());
}

#[test]
fn test_log_symptom_trims_name_and_keeps_unknown() {
    let (_dir, db) = common::setup_db();
    let s = record::log_symptom(&db, input("  Sakit Gigi ", 4)).unwrap();
    assert_eq!(s.symptom_name, "Sakit Gigi");
    assert!(s.kind().is_none());
}

// ── batch ────────────────────────────────────────────────────────────────────

#[test]
fn test_parse_batch_short_form() {
    let parsed = record::parse_batch("Demam=7, mental:Stres = 5,Sakit Kepala=2").unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0].symptom_type, SymptomType::Physical);
    assert_eq!(parsed[0].symptom_name, "Demam");
    assert_eq!(parsed[0].severity, 7);
    assert_eq!(parsed[1].symptom_type, SymptomType::Mental);
    assert_eq!(parsed[1].symptom_name, "Stres");
    assert_eq!(parsed[2].symptom_name, "Sakit Kepala");
}

#[test]
fn test_parse_batch_json() {
    let parsed = record::parse_batch(
        r#"[{"symptom_type":"mental","symptom_name":"Burnout","severity":6,"notes":"deadline"}]"#,
    )
    .unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].symptom_type, SymptomType::Mental);
    assert_eq!(parsed[0].notes.as_deref(), Some("deadline"));
}

#[test]
fn test_parse_batch_rejects_garbage() {
    assert!(record::parse_batch("Demam").is_err());
    assert!(record::parse_batch("Demam=tinggi").is_err());
    assert!(record::parse_batch("[{\"symptom_name\":\"x\"}]").is_err());
}

#[test]
fn test_batch_shares_timestamp() {
    let (_dir, mut db) = common::setup_db();
    let logged = record::log_symptom_batch(&mut db, "Demam=7, Batuk=3, mental:Stres=4").unwrap();
    assert_eq!(logged.len(), 3);
    assert!(logged.iter().all(|s| s.logged_at == logged[0].logged_at));
    assert_eq!(db.list_symptoms(10, None).unwrap().len(), 3);
}

#[test]
fn test_batch_all_or_nothing() {
    let (_dir, mut db) = common::setup_db();
    assert!(record::log_symptom_batch(&mut db, "Demam=7, Batuk=12").is_err());
    assert!(db.list_symptoms(10, None).unwrap().is_empty());
}

#[test]
fn test_batch_empty_rejected() {
    let (_dir, mut db) = common::setup_db();
    assert!(record::log_symptom_batch(&mut db, " , ").is_err());
    assert!(record::log_symptom_batch(&mut db, "[]").is_err());
}
