use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use uuid::Uuid;

use crate::core::bmi;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    #[default]
    Unspecified,
}

impl ActivityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Unspecified => "",
        }
    }

    pub fn is_specified(self) -> bool {
        self != Self::Unspecified
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "" => Ok(Self::Unspecified),
            _ => anyhow::bail!(
                "invalid activity level: {} (expected sedentary/light/moderate/active)",
                s
            ),
        }
    }
}

impl Serialize for ActivityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EmotionalState {
    Stressed,
    Anxious,
    Sad,
    Happy,
    Neutral,
    #[default]
    Unspecified,
}

impl EmotionalState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stressed => "stressed",
            Self::Anxious => "anxious",
            Self::Sad => "sad",
            Self::Happy => "happy",
            Self::Neutral => "neutral",
            Self::Unspecified => "",
        }
    }
}

impl std::fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionalState {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "stressed" => Ok(Self::Stressed),
            "anxious" => Ok(Self::Anxious),
            "sad" => Ok(Self::Sad),
            "happy" => Ok(Self::Happy),
            "neutral" => Ok(Self::Neutral),
            "" => Ok(Self::Unspecified),
            _ => anyhow::bail!(
                "invalid emotional state: {} (expected stressed/anxious/sad/happy/neutral)",
                s
            ),
        }
    }
}

impl Serialize for EmotionalState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmotionalState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// BMI bands, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of a health record the recommendation engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HealthSnapshot {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub activity_level: ActivityLevel,
    pub emotional_state: EmotionalState,
}

impl HealthSnapshot {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
            bmi: bmi::calculate(weight_kg, height_cm),
            ..Self::default()
        }
    }

    pub fn bmi_category(&self) -> BmiCategory {
        bmi::classify(self.bmi)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: String,
    pub recorded_at: DateTime<Utc>,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub activity_level: ActivityLevel,
    pub emotional_state: EmotionalState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HealthRecord {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recorded_at: Utc::now(),
            weight_kg,
            height_cm,
            bmi: bmi::calculate(weight_kg, height_cm),
            activity_level: ActivityLevel::Unspecified,
            emotional_state: EmotionalState::Unspecified,
            daily_schedule: None,
            notes: None,
        }
    }

    pub fn snapshot(&self) -> HealthSnapshot {
        HealthSnapshot {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            bmi: self.bmi,
            activity_level: self.activity_level,
            emotional_state: self.emotional_state,
        }
    }

    pub fn bmi_category(&self) -> BmiCategory {
        bmi::classify(self.bmi)
    }
}
