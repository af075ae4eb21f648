use anyhow::Result;
use std::io::{self, Write};

use healthtracker::db::Database;
use healthtracker::models::config::Config;
use healthtracker::models::health::ActivityLevel;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if !skip {
        println!("HealthTracker - Initial Setup\n");

        let name = prompt_string("Name (optional)")?;
        if !name.is_empty() {
            config.profile.name = Some(name);
        }
        config.profile.height_cm = Some(prompt_positive("Height (cm)")?);
        config.profile.activity_level = prompt_activity()?;
    }

    config.save()?;
    // Creates the database file and runs migrations.
    Database::open(&Config::db_path())?;

    if skip {
        println!("Config initialized with defaults at {:?}", Config::path());
    } else {
        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    }
    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn prompt_positive(label: &str) -> Result<f64> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<f64>() {
            Ok(v) if v > 0.0 => return Ok(v),
            _ => println!("Please enter a positive number."),
        }
    }
}

fn prompt_activity() -> Result<ActivityLevel> {
    loop {
        let s = prompt_string("Activity level (sedentary/light/moderate/active, or empty)")?;
        match s.parse() {
            Ok(level) => return Ok(level),
            Err(e) => println!("{}", e),
        }
    }
}
