mod common;

use healthtracker::core::matcher::{MatchContext, PresenceSet, Trigger};
use healthtracker::models::health::{ActivityLevel, BmiCategory, EmotionalState, HealthSnapshot};
use healthtracker::models::symptom::{SymptomKind, SymptomType};

#[test]
fn test_presence_ignores_unknown_names() {
    let p = PresenceSet::from_names(["Demam", "Sakit Gigi", "Stres"]);
    assert_eq!(p.len(), 2);
    assert!(p.is_present(SymptomKind::Fever));
    assert!(p.is_present(SymptomKind::Stress));
}

#[test]
fn test_presence_is_case_sensitive() {
    let p = PresenceSet::from_names(["demam", " Demam"]);
    assert!(p.is_empty());
}

#[test]
fn test_presence_collapses_duplicates() {
    let today = chrono::Utc::now().date_naive();
    let symptoms = vec![
        common::make_symptom(SymptomType::Physical, "Demam", 3, today),
        common::make_symptom(SymptomType::Physical, "Demam", 8, today),
        common::make_symptom(SymptomType::Mental, "Stres", 5, today),
    ];
    let p = PresenceSet::from_symptoms(&symptoms);
    assert_eq!(p.len(), 2);
}

#[test]
fn test_presence_ignores_symptom_type() {
    let today = chrono::Utc::now().date_naive();
    let symptoms = vec![common::make_symptom(SymptomType::Mental, "Demam", 2, today)];
    assert!(PresenceSet::from_symptoms(&symptoms).is_present(SymptomKind::Fever));
}

#[test]
fn test_symptom_any_of() {
    let ctx = common::ctx(65.0, &["Flu"]);
    assert!(Trigger::SymptomPresentAnyOf(&[SymptomKind::Fever, SymptomKind::Flu]).matches(&ctx));
    assert!(!Trigger::SymptomPresent(SymptomKind::Fever).matches(&ctx));
}

#[test]
fn test_bmi_trigger() {
    let ctx = common::ctx(95.0, &[]);
    assert_eq!(ctx.bmi_category, BmiCategory::Obese);
    assert!(Trigger::BmiCategoryIn(&[BmiCategory::Overweight, BmiCategory::Obese]).matches(&ctx));
    assert!(!Trigger::BmiCategoryIn(&[BmiCategory::Normal]).matches(&ctx));
}

#[test]
fn test_unspecified_activity_never_matches() {
    let ctx = common::ctx(65.0, &[]);
    for level in [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Unspecified,
    ] {
        assert!(!Trigger::ActivityLevelIs(level).matches(&ctx));
    }
}

#[test]
fn test_activity_fallback_only_when_unspecified() {
    let ctx = common::ctx(65.0, &[]).with_activity_fallback(ActivityLevel::Light);
    assert_eq!(ctx.activity_level, ActivityLevel::Light);

    let snap = common::snapshot(65.0, 170.0, ActivityLevel::Active, EmotionalState::Unspecified);
    let ctx = common::ctx_with(&snap, &[]).with_activity_fallback(ActivityLevel::Light);
    assert_eq!(ctx.activity_level, ActivityLevel::Active);
}

#[test]
fn test_empty_snapshot_is_underweight() {
    let ctx = MatchContext::new(&HealthSnapshot::default(), PresenceSet::default());
    assert_eq!(ctx.bmi_category, BmiCategory::Underweight);
    assert!(Trigger::EmotionalStateIs(EmotionalState::Unspecified).matches(&ctx));
}
