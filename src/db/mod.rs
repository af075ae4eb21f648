mod goals;
mod health;
mod migrate;
mod reminders;
mod symptoms;
mod water;

pub use symptoms::SymptomCount;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

use crate::models::health::HealthRecord;
use crate::models::symptom::{Symptom, SymptomType};

/// Read side the recommendation commands need from storage.
pub trait HealthRepository {
    fn latest_health_snapshot(&self) -> Result<Option<HealthRecord>>;

    /// Most recent first, at most `limit` entries.
    fn recent_symptoms(&self, limit: u32, symptom_type: Option<SymptomType>)
    -> Result<Vec<Symptom>>;
}

pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            if !path.exists() {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .mode(0o600)
                    .open(path)?;
            } else {
                let mut perms = fs::metadata(path)?.permissions();
                if perms.mode() & 0o777 != 0o600 {
                    perms.set_mode(0o600);
                    fs::set_permissions(path, perms)?;
                }
            }
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        migrate::run(&db.conn)?;
        tracing::debug!(path = %path.display(), "database opened");
        Ok(db)
    }
}

impl HealthRepository for Database {
    fn latest_health_snapshot(&self) -> Result<Option<HealthRecord>> {
        self.latest_health_record()
    }

    fn recent_symptoms(
        &self,
        limit: u32,
        symptom_type: Option<SymptomType>,
    ) -> Result<Vec<Symptom>> {
        self.list_symptoms(limit, symptom_type)
    }
}
