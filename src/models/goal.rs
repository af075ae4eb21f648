use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Weight,
    Exercise,
    Water,
    Sleep,
    Custom,
}

impl GoalType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Exercise => "exercise",
            Self::Water => "water",
            Self::Sleep => "sleep",
            Self::Custom => "custom",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Weight => "⚖️",
            Self::Exercise => "🏃",
            Self::Water => "💧",
            Self::Sleep => "😴",
            Self::Custom => "🎯",
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "weight" => Ok(Self::Weight),
            "exercise" => Ok(Self::Exercise),
            "water" => Ok(Self::Water),
            "sleep" => Ok(Self::Sleep),
            "custom" => Ok(Self::Custom),
            _ => anyhow::bail!(
                "invalid goal type: {} (expected weight/exercise/water/sleep/custom)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub goal_type: GoalType,
    pub target: f64,
    pub current: f64,
    pub unit: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(title: String, goal_type: GoalType, target: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description: None,
            goal_type,
            target,
            current: 0.0,
            unit: None,
            deadline: None,
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Percent of target reached, capped at 100. A zero target reads as 0.
    pub fn progress(&self) -> f64 {
        if self.target == 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).clamp(0.0, 100.0)
    }

    /// Whole days until the deadline as seen from `today`, never negative.
    /// `None` when the goal has no deadline.
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.deadline.map(|d| (d - today).num_days().max(0))
    }
}

/// A goal as listed: stored fields plus what is derived from them.
#[derive(Debug, Clone, Serialize)]
pub struct GoalView {
    #[serde(flatten)]
    pub goal: Goal,
    pub icon: &'static str,
    pub progress: f64,
    pub days_left: Option<i64>,
}

impl GoalView {
    pub fn new(goal: Goal, today: NaiveDate) -> Self {
        Self {
            icon: goal.goal_type.icon(),
            progress: goal.progress(),
            days_left: goal.days_left(today),
            goal,
        }
    }
}
