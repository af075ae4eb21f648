use crate::core::bmi;
use crate::models::health::{BmiCategory, EmotionalState, HealthSnapshot};

const SYMPTOM_PENALTY: i64 = 5;

fn bmi_penalty(category: BmiCategory) -> i64 {
    match category {
        BmiCategory::Normal => 0,
        BmiCategory::Underweight => 15,
        BmiCategory::Overweight => 10,
        BmiCategory::Obese => 25,
    }
}

fn emotional_penalty(state: EmotionalState) -> i64 {
    match state {
        EmotionalState::Stressed | EmotionalState::Anxious => 10,
        EmotionalState::Sad => 15,
        _ => 0,
    }
}

/// Score in [0, 100] from BMI band, recent symptom count and mood.
pub fn health_score(snapshot: &HealthSnapshot, symptom_count: usize) -> u8 {
    let symptoms = i64::try_from(symptom_count)
        .unwrap_or(i64::MAX)
        .saturating_mul(SYMPTOM_PENALTY);
    let score = 100
        - bmi_penalty(bmi::classify(snapshot.bmi))
        - emotional_penalty(snapshot.emotional_state)
        - symptoms.min(100);
    score.clamp(0, 100) as u8
}
