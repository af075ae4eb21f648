use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::health::ActivityLevel;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub limits: Limits,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub height_cm: Option<f64>,
    /// Used by exercise advice when the latest record has no activity level.
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "default_recommendation_symptoms")]
    pub recommendation_symptoms: u32,
    #[serde(default = "default_emotional_symptoms")]
    pub emotional_symptoms: u32,
    #[serde(default = "default_history")]
    pub history: u32,
    #[serde(default = "default_dashboard_days")]
    pub dashboard_days: u32,
}

fn default_recommendation_symptoms() -> u32 {
    10
}
fn default_emotional_symptoms() -> u32 {
    5
}
fn default_history() -> u32 {
    50
}
fn default_dashboard_days() -> u32 {
    7
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            recommendation_symptoms: default_recommendation_symptoms(),
            emotional_symptoms: default_emotional_symptoms(),
            history: default_history(),
            dashboard_days: default_dashboard_days(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;

            // The mode passed to open() only applies to newly created files.
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `config set` key/value pair.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "name" => self.profile.name = Some(value.to_string()),
            "height" => {
                let h: f64 = value.parse()?;
                if !h.is_finite() || h <= 0.0 {
                    anyhow::bail!("height must be a positive number");
                }
                self.profile.height_cm = Some(h);
            }
            "activity_level" => self.profile.activity_level = value.parse()?,
            "limits.recommendation_symptoms" => {
                self.limits.recommendation_symptoms = parse_limit(value)?
            }
            "limits.emotional_symptoms" => self.limits.emotional_symptoms = parse_limit(value)?,
            "limits.history" => self.limits.history = parse_limit(value)?,
            "limits.dashboard_days" => self.limits.dashboard_days = parse_limit(value)?,
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("HEALTHTRACKER_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".healthtracker")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}

fn parse_limit(value: &str) -> anyhow::Result<u32> {
    let n: u32 = value.parse()?;
    if n == 0 {
        anyhow::bail!("limit must be at least 1");
    }
    Ok(n)
}
