use anyhow::Result;
use chrono::{Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::db::{Database, SymptomCount};
use crate::models::symptom::{MENTAL_CATALOG, PHYSICAL_CATALOG, Symptom};

#[derive(Debug, Serialize)]
pub struct History {
    pub symptoms: Vec<Symptom>,
    /// Keyed by `YYYY-MM-DD` of `logged_at`.
    pub grouped: BTreeMap<String, Vec<Symptom>>,
}

pub fn history(db: &Database, limit: u32) -> Result<History> {
    let symptoms = db.list_symptoms(limit, None)?;
    let mut grouped: BTreeMap<String, Vec<Symptom>> = BTreeMap::new();
    for s in &symptoms {
        grouped
            .entry(s.logged_at.format("%Y-%m-%d").to_string())
            .or_default()
            .push(s.clone());
    }
    Ok(History { symptoms, grouped })
}

#[derive(Debug, Serialize)]
pub struct Stats {
    pub frequent_symptoms: Vec<SymptomCount>,
    pub symptoms_this_week: u64,
    pub average_severity: f64,
}

pub fn stats(db: &Database) -> Result<Stats> {
    let week_ago = Utc::now() - Duration::days(7);
    Ok(Stats {
        frequent_symptoms: db.most_frequent_symptoms(5)?,
        symptoms_this_week: db.count_symptoms_since(week_ago)?,
        average_severity: db.average_severity()?,
    })
}

#[derive(Debug, Serialize)]
pub struct Catalog {
    pub physical: Vec<&'static str>,
    pub mental: Vec<&'static str>,
}

/// Symptom names offered when logging.
pub fn catalog() -> Catalog {
    Catalog {
        physical: PHYSICAL_CATALOG.iter().map(|k| k.display_name()).collect(),
        mental: MENTAL_CATALOG.iter().map(|k| k.display_name()).collect(),
    }
}

