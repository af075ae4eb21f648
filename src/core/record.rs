use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::models::health::{ActivityLevel, BmiCategory, EmotionalState, HealthRecord};
use crate::models::symptom::{MAX_SEVERITY, MIN_SEVERITY, Symptom, SymptomType};

#[derive(Debug, Default)]
pub struct HealthInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub emotional_state: EmotionalState,
    pub daily_schedule: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Recorded {
    pub health_data: HealthRecord,
    pub bmi_category: BmiCategory,
}

/// Compute BMI and store a new health record. `date` backdates it to noon UTC.
pub fn record_health(db: &Database, input: HealthInput, date: Option<NaiveDate>) -> Result<Recorded> {
    if !input.weight_kg.is_finite() || input.weight_kg <= 0.0 {
        anyhow::bail!("weight must be a positive number, got {}", input.weight_kg);
    }
    if !input.height_cm.is_finite() || input.height_cm <= 0.0 {
        anyhow::bail!("height must be a positive number, got {}", input.height_cm);
    }

    let mut h = HealthRecord::new(input.weight_kg, input.height_cm);
    h.activity_level = input.activity_level;
    h.emotional_state = input.emotional_state;
    h.daily_schedule = input.daily_schedule;
    h.notes = input.notes;
    if let Some(d) = date
        && let Some(dt) = d.and_hms_opt(12, 0, 0)
    {
        h.recorded_at = Utc.from_utc_datetime(&dt);
    }

    db.insert_health_record(&h)?;
    tracing::info!(id = %h.id, bmi = h.bmi, "health record stored");
    let bmi_category = h.bmi_category();
    Ok(Recorded {
        health_data: h,
        bmi_category,
    })
}

/// One symptom as submitted, before validation.
#[derive(Debug, Deserialize)]
pub struct SymptomInput {
    pub symptom_type: SymptomType,
    pub symptom_name: String,
    pub severity: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Check severity bounds and build the symptom. Surrounding whitespace is
/// trimmed from the name before it is stored; rule matching on the stored
/// name stays exact.
fn validate(input: SymptomInput) -> Result<Symptom> {
    let name = input.symptom_name.trim();
    if name.is_empty() {
        anyhow::bail!("symptom name must not be empty");
    }
    if input.severity < MIN_SEVERITY as i64 || input.severity > MAX_SEVERITY as i64 {
        anyhow::bail!(
            "severity must be between {} and {}, got {}",
            MIN_SEVERITY,
            MAX_SEVERITY,
            input.severity
        );
    }
    let mut s = Symptom::new(input.symptom_type, name.to_string(), input.severity as u8);
    s.notes = input.notes;
    if s.kind().is_none() {
        tracing::debug!(name = %s.symptom_name, "free-form symptom name, no rule will match it");
    }
    Ok(s)
}

pub fn log_symptom(db: &Database, input: SymptomInput) -> Result<Symptom> {
    let s = validate(input)?;
    db.insert_symptom(&s)?;
    tracing::info!(id = %s.id, name = %s.symptom_name, "symptom logged");
    Ok(s)
}

/// Log several symptoms at once, all with the same timestamp. Accepts a JSON
/// array of `{symptom_type, symptom_name, severity, notes?}` objects or the
/// short form `Demam=7, mental:Stres=5` (type defaults to physical).
///
/// Every entry is validated before anything is written.
pub fn log_symptom_batch(db: &mut Database, batch: &str) -> Result<Vec<Symptom>> {
    let inputs = parse_batch(batch)?;
    if inputs.is_empty() {
        anyhow::bail!("batch contains no symptoms");
    }

    let now = Utc::now();
    let mut symptoms = Vec::with_capacity(inputs.len());
    for input in inputs {
        let mut s = validate(input)?;
        s.logged_at = now;
        symptoms.push(s);
    }

    db.insert_symptoms(&symptoms)?;
    tracing::info!(count = symptoms.len(), "symptom batch logged");
    Ok(symptoms)
}

pub fn parse_batch(batch: &str) -> Result<Vec<SymptomInput>> {
    let trimmed = batch.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("invalid symptom batch JSON");
    }

    let re = Regex::new(r"^(?:(physical|mental):)?\s*([^=]+?)\s*=\s*(-?\d+)$")?;
    trimmed
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let caps = re
                .captures(part)
                .ok_or_else(|| anyhow::anyhow!("invalid batch entry: {} (expected Name=severity)", part))?;
            let symptom_type = match caps.get(1) {
                Some(t) => t.as_str().parse()?,
                None => SymptomType::Physical,
            };
            Ok(SymptomInput {
                symptom_type,
                symptom_name: caps[2].to_string(),
                severity: caps[3].parse()?,
                notes: None,
            })
        })
        .collect()
}
