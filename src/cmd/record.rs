use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use healthtracker::core::record::{self, HealthInput};
use healthtracker::db::Database;
use healthtracker::models::config::Config;
use healthtracker::models::health::{ActivityLevel, EmotionalState};
use healthtracker::output;
use healthtracker::output::human;

pub struct RecordArgs<'a> {
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub activity: Option<&'a str>,
    pub mood: Option<&'a str>,
    pub schedule: Option<String>,
    pub note: Option<String>,
}

pub fn run(args: RecordArgs, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let height_cm = match args.height_cm.or(config.profile.height_cm) {
        Some(h) => h,
        None => anyhow::bail!("height is required (pass it or run `config set height <cm>`)"),
    };

    let input = HealthInput {
        weight_kg: args.weight_kg,
        height_cm,
        activity_level: args
            .activity
            .map(str::parse::<ActivityLevel>)
            .transpose()?
            .unwrap_or_default(),
        emotional_state: args
            .mood
            .map(str::parse::<EmotionalState>)
            .transpose()?
            .unwrap_or_default(),
        daily_schedule: args.schedule,
        notes: args.note,
    };

    let db = Database::open(&Config::db_path())?;
    let recorded = record::record_health(&db, input, date)?;

    if human_flag {
        println!("Recorded: {}", human::format_record(&recorded.health_data));
    } else {
        let out = output::success("record", serde_json::to_value(&recorded)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_latest(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let latest = db.latest_health_record()?;

    if human_flag {
        match latest {
            Some(ref h) => println!("{}", human::format_record(h)),
            None => println!("No health records yet."),
        }
    } else {
        let out = output::success("latest", json!({ "health_data": latest }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
