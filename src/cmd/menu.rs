use anyhow::Result;
use serde_json::json;

use healthtracker::core::{context, menu};
use healthtracker::db::Database;
use healthtracker::models::config::Config;
use healthtracker::output;
use healthtracker::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let ctx = context::for_menu(&db, &config)?;
    let daily = menu::compose_menu(&ctx);

    if human_flag {
        println!("{}", human::format_menu(&daily));
    } else {
        let out = output::success("menu", json!({ "menu": daily }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
