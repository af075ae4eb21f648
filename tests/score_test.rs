mod common;

use healthtracker::core::score::health_score;
use healthtracker::models::health::{ActivityLevel, EmotionalState, HealthSnapshot};

#[test]
fn test_score_empty_snapshot() {
    // BMI 0 reads as underweight.
    assert_eq!(health_score(&HealthSnapshot::default(), 0), 85);
}

#[test]
fn test_score_perfect() {
    let snap = common::snapshot(65.0, 170.0, ActivityLevel::Active, EmotionalState::Happy);
    assert_eq!(health_score(&snap, 0), 100);
}

#[test]
fn test_score_penalties_add_up() {
    let snap = common::snapshot(65.0, 170.0, ActivityLevel::Unspecified, EmotionalState::Stressed);
    assert_eq!(health_score(&snap, 3), 75);

    let snap = common::snapshot(80.0, 170.0, ActivityLevel::Unspecified, EmotionalState::Sad);
    assert_eq!(health_score(&snap, 2), 65);
}

#[test]
fn test_score_clamped_at_zero() {
    let snap = common::snapshot(95.0, 170.0, ActivityLevel::Unspecified, EmotionalState::Sad);
    assert_eq!(health_score(&snap, 25), 0);
    assert_eq!(health_score(&snap, usize::MAX), 0);
}
