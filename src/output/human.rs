use colored::Colorize;
use comfy_table::Table;

use crate::core::dashboard::DashboardData;
use crate::core::progress::Graph;
use crate::core::recommend::Recommendations;
use crate::core::symptoms::{Catalog, History, Stats};
use crate::models::goal::GoalView;
use crate::models::health::{BmiCategory, HealthRecord};
use crate::models::recommendation::{
    DailyMenu, EmotionalRecommendation, ExerciseRecommendation, FoodRecommendation, MealPlan,
};
use crate::models::reminder::ReminderView;
use crate::models::symptom::Symptom;
use crate::models::water::WaterView;

fn heading(text: &str) -> String {
    format!("=== {} ===", text).bold().to_string()
}

fn colored_category(category: BmiCategory) -> String {
    match category {
        BmiCategory::Normal => category.as_str().green().to_string(),
        BmiCategory::Overweight | BmiCategory::Underweight => category.as_str().yellow().to_string(),
        BmiCategory::Obese => category.as_str().red().to_string(),
    }
}

fn bullets(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("  {}:\n", label));
    for item in items {
        out.push_str(&format!("    - {}\n", item));
    }
}

/// One-line summary of a health record.
pub fn format_record(h: &HealthRecord) -> String {
    let mut line = format!(
        "{} | {:.1} kg, {:.1} cm, BMI {:.1} ({})",
        h.recorded_at.format("%Y-%m-%d %H:%M"),
        h.weight_kg,
        h.height_cm,
        h.bmi,
        colored_category(h.bmi_category())
    );
    if h.activity_level.is_specified() {
        line.push_str(&format!(" | activity: {}", h.activity_level));
    }
    if !h.emotional_state.as_str().is_empty() {
        line.push_str(&format!(" | mood: {}", h.emotional_state));
    }
    if let Some(ref note) = h.notes {
        line.push_str(&format!("  # {}", note));
    }
    line
}

pub fn format_symptom(s: &Symptom) -> String {
    let mut line = format!(
        "{} | {} ({}) severity {}",
        s.logged_at.format("%Y-%m-%d %H:%M"),
        s.symptom_name,
        s.symptom_type,
        s.severity
    );
    if let Some(ref note) = s.notes {
        line.push_str(&format!("  # {}", note));
    }
    line
}

pub fn format_symptom_table(symptoms: &[Symptom]) -> String {
    if symptoms.is_empty() {
        return "No symptoms logged.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Logged", "Name", "Type", "Severity"]);
    for s in symptoms {
        table.add_row(vec![
            s.logged_at.format("%Y-%m-%d %H:%M").to_string(),
            s.symptom_name.clone(),
            s.symptom_type.to_string(),
            s.severity.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_history(h: &History) -> String {
    if h.symptoms.is_empty() {
        return "No symptoms logged.".to_string();
    }
    let mut out = String::new();
    // Newest day first.
    for (date, symptoms) in h.grouped.iter().rev() {
        out.push_str(&format!("{}\n", date.bold()));
        for s in symptoms {
            out.push_str(&format!(
                "  {} ({}) severity {}\n",
                s.symptom_name, s.symptom_type, s.severity
            ));
        }
    }
    out.trim_end().to_string()
}

pub fn format_stats(s: &Stats) -> String {
    let mut out = heading("Symptom Stats");
    out.push_str(&format!(
        "\nThis week: {} | Average severity: {:.1}\n",
        s.symptoms_this_week, s.average_severity
    ));
    if s.frequent_symptoms.is_empty() {
        out.push_str("No symptoms logged.");
        return out;
    }
    let mut table = Table::new();
    table.set_header(vec!["Symptom", "Count"]);
    for c in &s.frequent_symptoms {
        table.add_row(vec![c.symptom_name.clone(), c.count.to_string()]);
    }
    out.push_str(&table.to_string());
    out
}

pub fn format_catalog(c: &Catalog) -> String {
    format!(
        "{}\n  {}\n{}\n  {}",
        "Physical:".bold(),
        c.physical.join(", "),
        "Mental:".bold(),
        c.mental.join(", ")
    )
}

pub fn format_graph(g: &Graph) -> String {
    if g.points.is_empty() {
        return format!("No health records in the last {}.", g.period);
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Weight (kg)", "BMI", "Mood"]);
    for p in &g.points {
        table.add_row(vec![
            p.date.clone(),
            format!("{:.1}", p.weight),
            format!("{:.1}", p.bmi),
            p.emotional_state.to_string(),
        ]);
    }
    table.to_string()
}

fn format_food(items: &[FoodRecommendation]) -> String {
    let mut out = String::new();
    for r in items {
        out.push_str(&format!("{} [{}]\n", r.title.bold(), r.category));
        out.push_str(&format!("  {}\n", r.description));
        bullets(&mut out, "Eat", &r.foods);
        bullets(&mut out, "Avoid", &r.avoid);
        out.push_str(&format!("  {}\n\n", r.reason.italic()));
    }
    out
}

fn format_exercise(items: &[ExerciseRecommendation]) -> String {
    let mut out = String::new();
    for r in items {
        out.push_str(&format!("{} [{}]\n", r.title.bold(), r.category));
        out.push_str(&format!("  {}\n", r.description));
        out.push_str(&format!(
            "  {} | {} | {}\n",
            r.duration, r.frequency, r.intensity
        ));
        bullets(&mut out, "Exercises", &r.exercises);
        out.push_str(&format!("  {}\n\n", r.reason.italic()));
    }
    out
}

fn format_emotional(items: &[EmotionalRecommendation]) -> String {
    let mut out = String::new();
    for r in items {
        out.push_str(&format!("{} [{}]\n", r.title.bold(), r.emotional_state));
        out.push_str(&format!("  {}\n", r.description));
        bullets(&mut out, "Activities", &r.activities);
        bullets(&mut out, "Tips", &r.tips);
        out.push_str(&format!("  {}\n\n", r.reason.italic()));
    }
    out
}

pub fn format_recommendations(r: &Recommendations) -> String {
    if r.is_empty() {
        return "No recommendations.".to_string();
    }
    let out = match r {
        Recommendations::Food(items) => format_food(items),
        Recommendations::Exercise(items) => format_exercise(items),
        Recommendations::Emotional(items) => format_emotional(items),
    };
    out.trim_end().to_string()
}

fn format_meal(label: &str, m: &MealPlan) -> String {
    let mut out = format!("{} {}", label.cyan().bold(), m.title);
    if !m.calories.is_empty() {
        out.push_str(&format!(" ({})", m.calories));
    }
    out.push('\n');
    out.push_str(&format!("  {}\n", m.foods.join(", ")));
    if !m.recipe.is_empty() {
        out.push_str(&format!("  {}\n", m.recipe));
    }
    out
}

pub fn format_menu(m: &DailyMenu) -> String {
    let mut out = heading(&format!("Menu {}", m.date));
    out.push_str(&format!("\n{}\n\n", m.health_tip));
    out.push_str(&format_meal("Breakfast:", &m.breakfast));
    out.push_str(&format_meal("Lunch:", &m.lunch));
    out.push_str(&format_meal("Dinner:", &m.dinner));
    for s in &m.snacks {
        out.push_str(&format_meal("Snack:", s));
    }
    out.push_str(&format!("\nDrinks: {}\n", m.drinks.join(", ")));
    out.push_str(&format!("Fruits: {}\n", m.fruits.join(", ")));
    if !m.avoid_drinks.is_empty() {
        out.push_str(&format!("Avoid drinks: {}\n", m.avoid_drinks.join(", ")));
    }
    if !m.avoid_fruits.is_empty() {
        out.push_str(&format!("Avoid fruits: {}\n", m.avoid_fruits.join(", ")));
    }
    out.push_str(&format!("\nTotal: {}", m.total_calories.bold()));
    if !m.total_estimated_cost.is_empty() {
        out.push_str(&format!(" | {}", m.total_estimated_cost));
    }
    out
}

pub fn format_dashboard(d: &DashboardData) -> String {
    let mut out = heading("Health Dashboard");
    out.push('\n');
    match d.latest_health {
        Some(ref h) => out.push_str(&format!("Latest: {}\n", format_record(h))),
        None => out.push_str("No health records yet.\n"),
    }
    out.push_str(&format!(
        "Health score: {} | Records: {} | Recent symptoms: {}\n",
        d.health_score.to_string().bold(),
        d.total_records,
        d.recent_symptoms.len()
    ));
    for item in &d.recommendations {
        let marker = if item.priority == "high" {
            "!!".red().to_string()
        } else {
            "!".yellow().to_string()
        };
        out.push_str(&format!("{} {}: {}\n", marker, item.title, item.description));
    }
    if !d.recent_symptoms.is_empty() {
        out.push_str(&format_symptom_table(&d.recent_symptoms));
    }
    out.trim_end().to_string()
}

fn days_left_text(days_left: Option<i64>) -> String {
    match days_left {
        Some(0) => "due".to_string(),
        Some(n) => format!("{}d left", n),
        None => "-".to_string(),
    }
}

pub fn format_goal(g: &GoalView) -> String {
    let status = if g.goal.is_completed {
        "done".green().to_string()
    } else {
        format!("{:.0}%", g.progress)
    };
    format!(
        "{} {} | {}/{} {} | {} | {}",
        g.icon,
        g.goal.title.bold(),
        g.goal.current,
        g.goal.target,
        g.goal.unit.as_deref().unwrap_or(""),
        status,
        days_left_text(g.days_left)
    )
}

pub fn format_goal_table(goals: &[GoalView]) -> String {
    if goals.is_empty() {
        return "No goals yet.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["ID", "Goal", "Type", "Progress", "Deadline", "Done"]);
    for g in goals {
        table.add_row(vec![
            g.goal.id.clone(),
            format!("{} {}", g.icon, g.goal.title),
            g.goal.goal_type.to_string(),
            format!(
                "{}/{} {} ({:.0}%)",
                g.goal.current,
                g.goal.target,
                g.goal.unit.as_deref().unwrap_or(""),
                g.progress
            ),
            days_left_text(g.days_left),
            if g.goal.is_completed { "yes" } else { "no" }.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_water(w: &WaterView) -> String {
    let mut line = format!(
        "💧 {} | {}/{} glasses ({} ml, {:.0}%)",
        w.intake.date, w.intake.glasses, w.intake.goal, w.milliliters, w.percentage
    );
    if w.remaining == 0 {
        line.push_str(&format!(" | {}", "goal reached".green()));
    } else {
        line.push_str(&format!(" | {} to go", w.remaining));
    }
    line
}

pub fn format_water_history(days: &[WaterView]) -> String {
    if days.is_empty() {
        return "No water intake tracked yet.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Glasses", "Goal", "ml", "%"]);
    for w in days {
        table.add_row(vec![
            w.intake.date.to_string(),
            w.intake.glasses.to_string(),
            w.intake.goal.to_string(),
            w.milliliters.to_string(),
            format!("{:.0}", w.percentage),
        ]);
    }
    table.to_string()
}

pub fn format_reminder(r: &ReminderView) -> String {
    let state = if r.reminder.is_active {
        "on".green().to_string()
    } else {
        "off".dimmed().to_string()
    };
    format!(
        "{} {} {} [{}] ({})",
        r.reminder.time.bold(),
        r.icon,
        r.reminder.label,
        state,
        r.reminder.id
    )
}

pub fn format_reminder_table(reminders: &[ReminderView]) -> String {
    if reminders.is_empty() {
        return "No reminders.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Time", "Reminder", "Type", "Active", "ID"]);
    for r in reminders {
        table.add_row(vec![
            r.reminder.time.clone(),
            format!("{} {}", r.icon, r.reminder.label),
            r.reminder.reminder_type.to_string(),
            if r.reminder.is_active { "yes" } else { "no" }.to_string(),
            r.reminder.id.clone(),
        ]);
    }
    table.to_string()
}
