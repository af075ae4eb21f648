use anyhow::Result;

use crate::core::matcher::{MatchContext, PresenceSet};
use crate::core::recommend::Axis;
use crate::db::HealthRepository;
use crate::models::config::Config;
use crate::models::health::HealthSnapshot;
use crate::models::symptom::SymptomType;

/// Fetch the latest snapshot plus up to `limit` recent symptoms and resolve
/// them into a match context. With no record yet the snapshot is empty
/// (bmi 0, no activity level, no mood).
pub fn load(
    repo: &impl HealthRepository,
    limit: u32,
    symptom_type: Option<SymptomType>,
) -> Result<MatchContext> {
    let snapshot = latest_snapshot(repo)?;
    let symptoms = repo.recent_symptoms(limit, symptom_type)?;
    tracing::debug!(
        bmi = snapshot.bmi,
        symptoms = symptoms.len(),
        "recommendation inputs loaded"
    );
    Ok(MatchContext::new(
        &snapshot,
        PresenceSet::from_symptoms(&symptoms),
    ))
}

/// Inputs for one recommendation axis, with the recency caps from config.
///
/// The emotional axis only looks at mental symptoms; exercise falls back to
/// the profile's activity level when the snapshot has none.
pub fn for_axis(repo: &impl HealthRepository, config: &Config, axis: Axis) -> Result<MatchContext> {
    match axis {
        Axis::Food => load(repo, config.limits.recommendation_symptoms, None),
        Axis::Exercise => Ok(load(repo, config.limits.recommendation_symptoms, None)?
            .with_activity_fallback(config.profile.activity_level)),
        Axis::Emotional => load(
            repo,
            config.limits.emotional_symptoms,
            Some(SymptomType::Mental),
        ),
    }
}

pub fn for_menu(repo: &impl HealthRepository, config: &Config) -> Result<MatchContext> {
    load(repo, config.limits.recommendation_symptoms, None)
}

/// Snapshot for scoring, or the empty one when nothing is recorded.
pub fn latest_snapshot(repo: &impl HealthRepository) -> Result<HealthSnapshot> {
    Ok(repo
        .latest_health_snapshot()?
        .map(|r| r.snapshot())
        .unwrap_or_default())
}
