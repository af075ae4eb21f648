use anyhow::Result;

use healthtracker::core::progress::{self, GraphPeriod};
use healthtracker::db::Database;
use healthtracker::models::config::Config;
use healthtracker::output;
use healthtracker::output::human;

pub fn run(period: &str, human_flag: bool) -> Result<()> {
    let period: GraphPeriod = period.parse()?;
    let db = Database::open(&Config::db_path())?;
    let graph = progress::graph(&db, period)?;

    if human_flag {
        println!("{}", human::format_graph(&graph));
    } else {
        let out = output::success("graph", serde_json::to_value(&graph)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
