use anyhow::Result;
use chrono::{Duration, Utc};
use serde::Serialize;

use crate::core::score;
use crate::db::Database;
use crate::models::config::Config;
use crate::models::health::{BmiCategory, EmotionalState, HealthRecord, HealthSnapshot};
use crate::models::recommendation::RecommendationItem;
use crate::models::symptom::Symptom;

/// More recent symptoms than this triggers the "see a doctor" hint.
const MANY_SYMPTOMS: usize = 3;
const WEEKLY_PROGRESS_RECORDS: u32 = 7;

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub latest_health: Option<HealthRecord>,
    pub bmi_category: BmiCategory,
    pub health_score: u8,
    pub total_records: u64,
    pub recent_symptoms: Vec<Symptom>,
    pub weekly_progress: Vec<HealthRecord>,
    pub recommendations: Vec<RecommendationItem>,
}

/// Summary of the latest record, recent symptoms and quick hints.
pub fn compute(db: &Database, config: &Config) -> Result<DashboardData> {
    let latest = db.latest_health_record()?;
    let snapshot = latest
        .as_ref()
        .map(HealthRecord::snapshot)
        .unwrap_or_default();

    let since = Utc::now() - Duration::days(config.limits.dashboard_days as i64);
    let recent_symptoms = db.symptoms_since(since)?;

    Ok(DashboardData {
        bmi_category: snapshot.bmi_category(),
        health_score: score::health_score(&snapshot, recent_symptoms.len()),
        total_records: db.count_health_records()?,
        weekly_progress: db.list_health_records(WEEKLY_PROGRESS_RECORDS)?,
        recommendations: quick_recommendations(&snapshot, recent_symptoms.len()),
        latest_health: latest,
        recent_symptoms,
    })
}

pub fn quick_recommendations(
    snapshot: &HealthSnapshot,
    symptom_count: usize,
) -> Vec<RecommendationItem> {
    let mut items = Vec::new();

    let category = snapshot.bmi_category();
    if category != BmiCategory::Normal {
        items.push(RecommendationItem {
            item_type: "health".to_string(),
            title: "Perhatikan BMI Anda".to_string(),
            description: format!(
                "BMI Anda termasuk {}. Pertimbangkan untuk menyesuaikan pola makan dan olahraga.",
                category
            ),
            priority: "high".to_string(),
        });
    }

    if matches!(
        snapshot.emotional_state,
        EmotionalState::Stressed | EmotionalState::Anxious
    ) {
        items.push(RecommendationItem {
            item_type: "emotional".to_string(),
            title: "Kelola Stres Anda".to_string(),
            description: "Coba teknik relaksasi seperti meditasi atau pernapasan dalam.".to_string(),
            priority: "medium".to_string(),
        });
    }

    if symptom_count > MANY_SYMPTOMS {
        items.push(RecommendationItem {
            item_type: "health".to_string(),
            title: "Banyak Gejala Terdeteksi".to_string(),
            description: "Anda memiliki beberapa gejala. Pertimbangkan untuk berkonsultasi dengan dokter."
                .to_string(),
            priority: "high".to_string(),
        });
    }

    items
}
