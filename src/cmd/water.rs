use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

use healthtracker::core::water;
use healthtracker::db::Database;
use healthtracker::models::config::Config;
use healthtracker::models::water::{WaterIntake, WaterView};
use healthtracker::output;
use healthtracker::output::human;

fn day(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn print_intake(command: &str, w: WaterIntake, human_flag: bool) -> Result<()> {
    let view = WaterView::from(w);
    if human_flag {
        println!("{}", human::format_water(&view));
    } else {
        let out = output::success(command, json!({ "water": view }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_status(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let w = water::intake_for(&db, day(date))?;
    print_intake("water.status", w, human_flag)
}

pub fn run_add(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let w = water::add_glass(&db, day(date))?;
    print_intake("water.add", w, human_flag)
}

pub fn run_remove(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let w = water::remove_glass(&db, day(date))?;
    print_intake("water.remove", w, human_flag)
}

pub fn run_goal(glasses: u32, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let w = water::set_goal(&db, day(date), glasses)?;
    print_intake("water.goal", w, human_flag)
}

pub fn run_history(last: u32, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let days: Vec<WaterView> = water::history(&db, last)?
        .into_iter()
        .map(WaterView::from)
        .collect();

    if human_flag {
        println!("{}", human::format_water_history(&days));
    } else {
        let out = output::success("water.history", json!({ "history": days }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
