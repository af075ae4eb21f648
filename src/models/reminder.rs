use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    Water,
    Meal,
    Exercise,
    Meditation,
    Rest,
    Custom,
}

impl ReminderType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Meal => "meal",
            Self::Exercise => "exercise",
            Self::Meditation => "meditation",
            Self::Rest => "rest",
            Self::Custom => "custom",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Water => "💧",
            Self::Meal => "🍽️",
            Self::Exercise => "🏃",
            Self::Meditation => "🧘",
            Self::Rest => "😴",
            Self::Custom => "⏰",
        }
    }
}

impl std::fmt::Display for ReminderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "water" => Ok(Self::Water),
            "meal" => Ok(Self::Meal),
            "exercise" => Ok(Self::Exercise),
            "meditation" => Ok(Self::Meditation),
            "rest" => Ok(Self::Rest),
            "custom" => Ok(Self::Custom),
            _ => anyhow::bail!(
                "invalid reminder type: {} (expected water/meal/exercise/meditation/rest/custom)",
                s
            ),
        }
    }
}

/// Parse `HH:MM` (24h) and return it zero-padded, so stored times sort
/// lexicographically.
pub fn normalize_time(s: &str) -> anyhow::Result<String> {
    let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| anyhow::anyhow!("invalid time: {} (expected HH:MM)", s))?;
    Ok(t.format("%H:%M").to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub reminder_type: ReminderType,
    pub label: String,
    /// `HH:MM`, zero-padded.
    pub time: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(reminder_type: ReminderType, label: String, time: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            reminder_type,
            label,
            time,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderView {
    #[serde(flatten)]
    pub reminder: Reminder,
    pub icon: &'static str,
}

impl From<Reminder> for ReminderView {
    fn from(reminder: Reminder) -> Self {
        Self {
            icon: reminder.reminder_type.icon(),
            reminder,
        }
    }
}

/// Seeded the first time reminders are listed and none exist.
pub static DEFAULT_REMINDERS: &[(ReminderType, &str, &str)] = &[
    (ReminderType::Water, "Minum Air", "08:00"),
    (ReminderType::Meal, "Sarapan Sehat", "08:30"),
    (ReminderType::Exercise, "Olahraga Pagi", "07:00"),
    (ReminderType::Meditation, "Meditasi", "06:30"),
    (ReminderType::Water, "Minum Air", "12:00"),
    (ReminderType::Meal, "Makan Siang", "12:30"),
    (ReminderType::Rest, "Istirahat Siang", "14:00"),
    (ReminderType::Water, "Minum Air", "16:00"),
    (ReminderType::Meal, "Makan Malam", "19:00"),
    (ReminderType::Rest, "Persiapan Tidur", "21:00"),
];
