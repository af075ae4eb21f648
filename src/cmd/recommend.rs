use anyhow::Result;
use serde_json::json;

use healthtracker::core::context;
use healthtracker::core::recommend::{self, Axis};
use healthtracker::db::Database;
use healthtracker::models::config::Config;
use healthtracker::output;
use healthtracker::output::human;

pub fn run(axis: &str, human_flag: bool) -> Result<()> {
    let axis: Axis = axis.parse()?;
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let ctx = context::for_axis(&db, &config, axis)?;
    let recommendations = recommend::generate(axis, &ctx);

    if human_flag {
        println!("{}", human::format_recommendations(&recommendations));
    } else {
        let out = output::success(
            "recommend",
            json!({ "type": axis.as_str(), "recommendations": recommendations }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
