use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const GLASS_ML: u32 = 250;
pub const DEFAULT_GOAL_GLASSES: u32 = 8;
pub const MIN_GOAL_GLASSES: u32 = 1;
pub const MAX_GOAL_GLASSES: u32 = 20;

/// Glasses of water drunk on one calendar day. One row per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterIntake {
    pub date: NaiveDate,
    pub glasses: u32,
    pub goal: u32,
    pub updated_at: DateTime<Utc>,
}

impl WaterIntake {
    pub fn new(date: NaiveDate, goal: u32) -> Self {
        Self {
            date,
            glasses: 0,
            goal,
            updated_at: Utc::now(),
        }
    }

    pub fn milliliters(&self) -> u32 {
        self.glasses * GLASS_ML
    }

    /// Share of the goal reached, capped at 100. A zero goal reads as 0.
    pub fn percentage(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        (self.glasses as f64 / self.goal as f64 * 100.0).min(100.0)
    }

    pub fn remaining(&self) -> u32 {
        self.goal.saturating_sub(self.glasses)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WaterView {
    #[serde(flatten)]
    pub intake: WaterIntake,
    pub milliliters: u32,
    pub percentage: f64,
    pub remaining: u32,
}

impl From<WaterIntake> for WaterView {
    fn from(intake: WaterIntake) -> Self {
        Self {
            milliliters: intake.milliliters(),
            percentage: intake.percentage(),
            remaining: intake.remaining(),
            intake,
        }
    }
}
