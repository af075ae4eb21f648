mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, GoalAction, ReminderAction, SymptomAction, WaterAction};
use healthtracker::output;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HEALTHTRACKER_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Record {
            weight_kg,
            height_cm,
            activity,
            mood,
            schedule,
            note,
        } => cmd::record::run(
            cmd::record::RecordArgs {
                weight_kg,
                height_cm,
                activity: activity.as_deref(),
                mood: mood.as_deref(),
                schedule,
                note,
            },
            cli.date,
            cli.human,
        ),
        Commands::Latest => cmd::record::run_latest(cli.human),
        Commands::Graph { period } => cmd::graph::run(&period, cli.human),
        Commands::Symptom { action } => match action {
            SymptomAction::Log {
                r#type,
                name,
                severity,
                note,
            } => cmd::symptom::run_log(&r#type, name, severity, note, cli.human),
            SymptomAction::Batch { input } => cmd::symptom::run_batch(&input, cli.human),
            SymptomAction::List => cmd::symptom::run_list(cli.human),
            SymptomAction::History { last } => cmd::symptom::run_history(last, cli.human),
            SymptomAction::Stats => cmd::symptom::run_stats(cli.human),
        },
        Commands::Recommend { axis } => cmd::recommend::run(&axis, cli.human),
        Commands::Menu => cmd::menu::run(cli.human),
        Commands::Dashboard => cmd::dashboard::run(cli.human),
        Commands::Goal { action } => match action {
            GoalAction::Add {
                title,
                r#type,
                target,
                unit,
                deadline,
                description,
            } => cmd::goal::run_add(
                cmd::goal::AddArgs {
                    title,
                    goal_type: &r#type,
                    target,
                    unit,
                    deadline,
                    description,
                },
                cli.human,
            ),
            GoalAction::List => cmd::goal::run_list(cli.date, cli.human),
            GoalAction::Progress { id, current } => {
                cmd::goal::run_progress(&id, current, cli.human)
            }
            GoalAction::Toggle { id } => cmd::goal::run_toggle(&id, cli.human),
            GoalAction::Remove { id } => cmd::goal::run_remove(&id, cli.human),
            GoalAction::Stats => cmd::goal::run_stats(cli.human),
        },
        Commands::Water { action } => match action {
            WaterAction::Status => cmd::water::run_status(cli.date, cli.human),
            WaterAction::Add => cmd::water::run_add(cli.date, cli.human),
            WaterAction::Remove => cmd::water::run_remove(cli.date, cli.human),
            WaterAction::Goal { glasses } => cmd::water::run_goal(glasses, cli.date, cli.human),
            WaterAction::History { last } => cmd::water::run_history(last, cli.human),
        },
        Commands::Reminder { action } => match action {
            ReminderAction::List => cmd::reminder::run_list(cli.human),
            ReminderAction::Add {
                r#type,
                label,
                time,
            } => cmd::reminder::run_add(&r#type, &label, &time, cli.human),
            ReminderAction::Update {
                id,
                reminder_type,
                label,
                time,
                active,
            } => cmd::reminder::run_update(
                &id,
                cmd::reminder::UpdateArgs {
                    reminder_type: reminder_type.as_deref(),
                    label: label.as_deref(),
                    time: time.as_deref(),
                    active,
                },
                cli.human,
            ),
            ReminderAction::Toggle { id } => cmd::reminder::run_toggle(&id, cli.human),
            ReminderAction::Remove { id } => cmd::reminder::run_remove(&id, cli.human),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => cmd::completions::run(shell),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        let err = output::error("", "general_error", &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
