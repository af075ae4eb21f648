use anyhow::Result;

use healthtracker::core::dashboard;
use healthtracker::db::Database;
use healthtracker::models::config::Config;
use healthtracker::output;
use healthtracker::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let data = dashboard::compute(&db, &config)?;

    if human_flag {
        println!("{}", human::format_dashboard(&data));
    } else {
        let out = output::success("dashboard", serde_json::to_value(&data)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
