use anyhow::Result;
use serde_json::json;

use healthtracker::core::reminder::{self, ReminderUpdate};
use healthtracker::db::Database;
use healthtracker::models::config::Config;
use healthtracker::models::reminder::{ReminderType, ReminderView};
use healthtracker::output;
use healthtracker::output::human;

pub struct UpdateArgs<'a> {
    pub reminder_type: Option<&'a str>,
    pub label: Option<&'a str>,
    pub time: Option<&'a str>,
    pub active: Option<bool>,
}

fn print_one(command: &str, view: ReminderView, human_flag: bool) -> Result<()> {
    if human_flag {
        println!("{}", human::format_reminder(&view));
    } else {
        let out = output::success(command, json!({ "reminder": view }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_list(human_flag: bool) -> Result<()> {
    let mut db = Database::open(&Config::db_path())?;
    let reminders: Vec<ReminderView> = reminder::list(&mut db)?
        .into_iter()
        .map(ReminderView::from)
        .collect();

    if human_flag {
        println!("{}", human::format_reminder_table(&reminders));
    } else {
        let out = output::success("reminder.list", json!({ "reminders": reminders }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_add(reminder_type: &str, label: &str, time: &str, human_flag: bool) -> Result<()> {
    let reminder_type: ReminderType = reminder_type.parse()?;
    let mut db = Database::open(&Config::db_path())?;
    let r = reminder::create(&mut db, reminder_type, label, time)?;
    print_one("reminder.add", r.into(), human_flag)
}

pub fn run_update(id: &str, args: UpdateArgs, human_flag: bool) -> Result<()> {
    let changes = ReminderUpdate {
        reminder_type: args
            .reminder_type
            .map(str::parse::<ReminderType>)
            .transpose()?,
        label: args.label,
        time: args.time,
        is_active: args.active,
    };
    let db = Database::open(&Config::db_path())?;
    let r = reminder::update(&db, id, changes)?;
    print_one("reminder.update", r.into(), human_flag)
}

pub fn run_toggle(id: &str, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let r = reminder::toggle(&db, id)?;
    print_one("reminder.toggle", r.into(), human_flag)
}

pub fn run_remove(id: &str, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    if !reminder::delete(&db, id)? {
        anyhow::bail!("reminder not found: {}", id);
    }

    if human_flag {
        println!("Reminder removed: {}", id);
    } else {
        let out = output::success("reminder.remove", json!({ "removed": id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
