use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::db::Database;
use crate::models::water::{DEFAULT_GOAL_GLASSES, MAX_GOAL_GLASSES, MIN_GOAL_GLASSES, WaterIntake};

/// The day's intake, creating an empty row with the default goal if needed.
pub fn intake_for(db: &Database, date: NaiveDate) -> Result<WaterIntake> {
    if let Some(w) = db.water_for_date(date)? {
        return Ok(w);
    }
    let w = WaterIntake::new(date, DEFAULT_GOAL_GLASSES);
    db.upsert_water(&w)?;
    Ok(w)
}

pub fn add_glass(db: &Database, date: NaiveDate) -> Result<WaterIntake> {
    let mut w = intake_for(db, date)?;
    w.glasses += 1;
    w.updated_at = Utc::now();
    db.upsert_water(&w)?;
    tracing::info!(date = %date, glasses = w.glasses, "water glass added");
    Ok(w)
}

/// Take back one glass. Fails when nothing was tracked that day; stops at 0.
pub fn remove_glass(db: &Database, date: NaiveDate) -> Result<WaterIntake> {
    let Some(mut w) = db.water_for_date(date)? else {
        anyhow::bail!("no water intake recorded for {}", date);
    };
    if w.glasses > 0 {
        w.glasses -= 1;
        w.updated_at = Utc::now();
        db.upsert_water(&w)?;
        tracing::info!(date = %date, glasses = w.glasses, "water glass removed");
    }
    Ok(w)
}

pub fn set_goal(db: &Database, date: NaiveDate, glasses: u32) -> Result<WaterIntake> {
    if !(MIN_GOAL_GLASSES..=MAX_GOAL_GLASSES).contains(&glasses) {
        anyhow::bail!(
            "water goal must be between {} and {} glasses, got {}",
            MIN_GOAL_GLASSES,
            MAX_GOAL_GLASSES,
            glasses
        );
    }
    let mut w = intake_for(db, date)?;
    w.goal = glasses;
    w.updated_at = Utc::now();
    db.upsert_water(&w)?;
    tracing::info!(date = %date, goal = glasses, "water goal set");
    Ok(w)
}

pub fn history(db: &Database, days: u32) -> Result<Vec<WaterIntake>> {
    db.water_history(days)
}
