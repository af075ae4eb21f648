use anyhow::Result;
use serde_json::json;

use healthtracker::core::record::{self, SymptomInput};
use healthtracker::core::symptoms;
use healthtracker::db::Database;
use healthtracker::models::config::Config;
use healthtracker::output;
use healthtracker::output::human;

pub fn run_log(
    symptom_type: &str,
    name: String,
    severity: i64,
    note: Option<String>,
    human_flag: bool,
) -> Result<()> {
    let input = SymptomInput {
        symptom_type: symptom_type.parse()?,
        symptom_name: name,
        severity,
        notes: note,
    };
    let db = Database::open(&Config::db_path())?;
    let s = record::log_symptom(&db, input)?;

    if human_flag {
        println!("Logged: {}", human::format_symptom(&s));
    } else {
        let out = output::success("symptom.log", json!({ "symptom": s }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_batch(input: &str, human_flag: bool) -> Result<()> {
    let mut db = Database::open(&Config::db_path())?;
    let logged = record::log_symptom_batch(&mut db, input)?;

    if human_flag {
        println!("Logged {} symptoms:", logged.len());
        for s in &logged {
            println!("  {}", human::format_symptom(s));
        }
    } else {
        let out = output::success(
            "symptom.batch",
            json!({ "symptoms": logged, "count": logged.len() }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_list(human_flag: bool) -> Result<()> {
    let catalog = symptoms::catalog();
    if human_flag {
        println!("{}", human::format_catalog(&catalog));
    } else {
        let out = output::success("symptom.list", serde_json::to_value(&catalog)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_history(last: Option<u32>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let history = symptoms::history(&db, last.unwrap_or(config.limits.history))?;

    if human_flag {
        println!("{}", human::format_history(&history));
    } else {
        let out = output::success("symptom.history", serde_json::to_value(&history)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_stats(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let stats = symptoms::stats(&db)?;

    if human_flag {
        println!("{}", human::format_stats(&stats));
    } else {
        let out = output::success("symptom.stats", serde_json::to_value(&stats)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
