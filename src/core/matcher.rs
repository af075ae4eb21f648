use std::collections::BTreeSet;

use crate::core::bmi;
use crate::models::health::{ActivityLevel, BmiCategory, EmotionalState, HealthSnapshot};
use crate::models::symptom::{Symptom, SymptomKind};

/// Distinct symptom identifiers currently relevant for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceSet(BTreeSet<SymptomKind>);

impl PresenceSet {
    /// Collapse logged symptoms to their identifiers. Type and severity are
    /// ignored; names outside the catalog never match a rule and are dropped.
    pub fn from_symptoms(symptoms: &[Symptom]) -> Self {
        let mut set = BTreeSet::new();
        for s in symptoms {
            match s.kind() {
                Some(kind) => {
                    set.insert(kind);
                }
                None => tracing::debug!(name = %s.symptom_name, "symptom not in catalog, ignored"),
            }
        }
        Self(set)
    }

    /// Resolve display names exactly as logged. Unknown names are skipped.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            names
                .into_iter()
                .filter_map(SymptomKind::from_display_name)
                .collect(),
        )
    }

    pub fn is_present(&self, kind: SymptomKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn is_present_any(&self, kinds: &[SymptomKind]) -> bool {
        kinds.iter().any(|k| self.0.contains(k))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Condition gating a rule.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    BmiCategoryIn(&'static [BmiCategory]),
    ActivityLevelIs(ActivityLevel),
    EmotionalStateIs(EmotionalState),
    SymptomPresent(SymptomKind),
    SymptomPresentAnyOf(&'static [SymptomKind]),
}

impl Trigger {
    pub fn matches(&self, ctx: &MatchContext) -> bool {
        match *self {
            Self::BmiCategoryIn(categories) => categories.contains(&ctx.bmi_category),
            Self::ActivityLevelIs(level) => {
                ctx.activity_level.is_specified() && ctx.activity_level == level
            }
            Self::EmotionalStateIs(state) => ctx.emotional_state == state,
            Self::SymptomPresent(kind) => ctx.presence.is_present(kind),
            Self::SymptomPresentAnyOf(kinds) => ctx.presence.is_present_any(kinds),
        }
    }
}

/// Everything a trigger can look at, resolved once per request.
#[derive(Debug, Clone)]
pub struct MatchContext {
    pub bmi_category: BmiCategory,
    pub activity_level: ActivityLevel,
    pub emotional_state: EmotionalState,
    pub presence: PresenceSet,
}

impl MatchContext {
    pub fn new(snapshot: &HealthSnapshot, presence: PresenceSet) -> Self {
        Self {
            bmi_category: bmi::classify(snapshot.bmi),
            activity_level: snapshot.activity_level,
            emotional_state: snapshot.emotional_state,
            presence,
        }
    }

    /// Use `fallback` when the snapshot carries no activity level.
    pub fn with_activity_fallback(mut self, fallback: ActivityLevel) -> Self {
        if !self.activity_level.is_specified() {
            self.activity_level = fallback;
        }
        self
    }
}
