use anyhow::Result;
use chrono::{Duration, Utc};
use serde::Serialize;
use std::str::FromStr;

use crate::db::Database;
use crate::models::health::EmotionalState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphPeriod {
    #[default]
    Week,
    Month,
    Year,
}

impl GraphPeriod {
    pub fn days(self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl FromStr for GraphPeriod {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => anyhow::bail!("invalid period: {} (expected week/month/year)", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphPoint {
    pub date: String,
    pub weight: f64,
    pub bmi: f64,
    pub emotional_state: EmotionalState,
}

#[derive(Debug, Serialize)]
pub struct Graph {
    pub period: &'static str,
    pub points: Vec<GraphPoint>,
}

/// Weight, BMI and mood for every record in the period, oldest first.
pub fn graph(db: &Database, period: GraphPeriod) -> Result<Graph> {
    let since = Utc::now() - Duration::days(period.days());
    let points = db
        .health_records_since(since)?
        .into_iter()
        .map(|h| GraphPoint {
            date: h.recorded_at.format("%Y-%m-%d").to_string(),
            weight: h.weight_kg,
            bmi: h.bmi,
            emotional_state: h.emotional_state,
        })
        .collect();
    Ok(Graph {
        period: period.as_str(),
        points,
    })
}
