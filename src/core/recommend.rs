use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::catalog::{emotional, exercise, food};
use crate::core::matcher::MatchContext;
use crate::core::rules::{Matched, scan};
use crate::models::recommendation::{
    EmotionalRecommendation, ExerciseRecommendation, FoodRecommendation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Food,
    Exercise,
    Emotional,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Exercise => "exercise",
            Self::Emotional => "emotional",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "exercise" => Ok(Self::Exercise),
            "emotional" => Ok(Self::Emotional),
            _ => anyhow::bail!("unknown recommendation axis: {} (expected food, exercise or emotional)", s),
        }
    }
}

/// Result of [`generate`]; serializes as a bare array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Recommendations {
    Food(Vec<FoodRecommendation>),
    Exercise(Vec<ExerciseRecommendation>),
    Emotional(Vec<EmotionalRecommendation>),
}

impl Recommendations {
    pub fn len(&self) -> usize {
        match self {
            Self::Food(v) => v.len(),
            Self::Exercise(v) => v.len(),
            Self::Emotional(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn generate(axis: Axis, ctx: &MatchContext) -> Recommendations {
    match axis {
        Axis::Food => Recommendations::Food(food(ctx)),
        Axis::Exercise => Recommendations::Exercise(exercise(ctx)),
        Axis::Emotional => Recommendations::Emotional(emotional(ctx)),
    }
}

/// One BMI entry, then every matching symptom entry.
pub fn food(ctx: &MatchContext) -> Vec<FoodRecommendation> {
    let mut out = Matched::default();
    scan(food::BMI_RULES, ctx, &mut out);
    scan(food::SYMPTOM_RULES, ctx, &mut out);
    out.into_entries()
}

/// Activity entry (when a level is known), the weight-loss entry for
/// Overweight/Obese, then symptom entries.
///
/// The caller resolves the profile fallback with
/// [`MatchContext::with_activity_fallback`].
pub fn exercise(ctx: &MatchContext) -> Vec<ExerciseRecommendation> {
    let mut out = Matched::default();
    scan(exercise::ACTIVITY_RULES, ctx, &mut out);
    scan(exercise::BMI_RULES, ctx, &mut out);
    scan(exercise::SYMPTOM_RULES, ctx, &mut out);
    out.into_entries()
}

/// Emotional-state entry, then one entry per recognized mental symptom.
pub fn emotional(ctx: &MatchContext) -> Vec<EmotionalRecommendation> {
    let mut out = Matched::default();
    scan(emotional::STATE_RULES, ctx, &mut out);
    scan(emotional::SYMPTOM_RULES, ctx, &mut out);
    out.into_entries()
}
