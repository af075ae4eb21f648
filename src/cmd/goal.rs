use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

use healthtracker::core::goal::{self, NewGoal};
use healthtracker::db::Database;
use healthtracker::models::config::Config;
use healthtracker::models::goal::{GoalType, GoalView};
use healthtracker::output;
use healthtracker::output::human;

pub struct AddArgs<'a> {
    pub title: String,
    pub goal_type: &'a str,
    pub target: f64,
    pub unit: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub description: Option<String>,
}

pub fn run_add(args: AddArgs, human_flag: bool) -> Result<()> {
    let input = NewGoal {
        title: args.title,
        description: args.description,
        goal_type: args.goal_type.parse::<GoalType>()?,
        target: args.target,
        unit: args.unit,
        deadline: args.deadline,
    };
    let db = Database::open(&Config::db_path())?;
    let g = goal::create_goal(&db, input)?;

    if human_flag {
        println!("Goal added: {} {} ({})", g.goal_type.icon(), g.title, g.id);
    } else {
        let out = output::success("goal.add", json!({ "goal": g }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_list(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let today = date.unwrap_or_else(|| Local::now().date_naive());
    let goals = goal::list_goals(&db, today)?;

    if human_flag {
        println!("{}", human::format_goal_table(&goals));
    } else {
        let out = output::success("goal.list", json!({ "goals": goals }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_progress(id: &str, current: f64, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let g = goal::update_progress(&db, id, current)?;
    let view = GoalView::new(g, Local::now().date_naive());

    if human_flag {
        println!("{}", human::format_goal(&view));
    } else {
        let out = output::success("goal.progress", json!({ "goal": view }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_toggle(id: &str, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let g = goal::toggle_complete(&db, id)?;
    let view = GoalView::new(g, Local::now().date_naive());

    if human_flag {
        println!("{}", human::format_goal(&view));
    } else {
        let out = output::success("goal.toggle", json!({ "goal": view }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_remove(id: &str, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    if !goal::delete_goal(&db, id)? {
        anyhow::bail!("goal not found: {}", id);
    }

    if human_flag {
        println!("Goal removed: {}", id);
    } else {
        let out = output::success("goal.remove", json!({ "removed": id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_stats(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let stats = goal::stats(&db)?;

    if human_flag {
        println!(
            "Goals: {} total, {} completed, {} in progress",
            stats.total, stats.completed, stats.in_progress
        );
    } else {
        let out = output::success("goal.stats", serde_json::to_value(&stats)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
