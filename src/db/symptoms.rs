use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{Row, params};
use serde::Serialize;

use crate::models::symptom::{Symptom, SymptomType};

use super::Database;

struct SymptomRow {
    id: String,
    symptom_type: String,
    symptom_name: String,
    severity: i64,
    notes: Option<String>,
    logged_at: String,
}

impl SymptomRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            symptom_type: row.get(1)?,
            symptom_name: row.get(2)?,
            severity: row.get(3)?,
            notes: row.get(4)?,
            logged_at: row.get(5)?,
        })
    }
}

fn row_to_symptom(r: SymptomRow) -> Result<Symptom> {
    let logged_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&r.logged_at)?.with_timezone(&Utc);
    Ok(Symptom {
        id: r.id,
        symptom_type: r.symptom_type.parse()?,
        symptom_name: r.symptom_name,
        severity: u8::try_from(r.severity)?,
        notes: r.notes,
        logged_at,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomCount {
    pub symptom_name: String,
    pub count: u32,
}

impl Database {
    pub fn insert_symptom(&self, s: &Symptom) -> Result<()> {
        self.conn.execute(
            "INSERT INTO symptoms (id, symptom_type, symptom_name, severity, notes, logged_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                s.id,
                s.symptom_type.as_str(),
                s.symptom_name,
                s.severity as i64,
                s.notes,
                s.logged_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Insert all symptoms in one transaction; none are stored if any fails.
    pub fn insert_symptoms(&mut self, symptoms: &[Symptom]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for s in symptoms {
            tx.execute(
                "INSERT INTO symptoms (id, symptom_type, symptom_name, severity, notes, logged_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    s.id,
                    s.symptom_type.as_str(),
                    s.symptom_name,
                    s.severity as i64,
                    s.notes,
                    s.logged_at.to_rfc3339(),
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Most recent first, optionally restricted to one type.
    pub fn list_symptoms(
        &self,
        limit: u32,
        symptom_type: Option<SymptomType>,
    ) -> Result<Vec<Symptom>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, symptom_type, symptom_name, severity, notes, logged_at
             FROM symptoms
             WHERE (?1 IS NULL OR symptom_type = ?1)
             ORDER BY logged_at DESC LIMIT ?2",
        )?;
        let rows = stmt.query_map(
            params![symptom_type.map(|t| t.as_str()), limit as i64],
            SymptomRow::from_row,
        )?;

        let mut symptoms = Vec::new();
        for row in rows {
            symptoms.push(row_to_symptom(row?)?);
        }
        Ok(symptoms)
    }

    /// Symptoms logged strictly after `since`, most recent first.
    pub fn symptoms_since(&self, since: DateTime<Utc>) -> Result<Vec<Symptom>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, symptom_type, symptom_name, severity, notes, logged_at
             FROM symptoms WHERE logged_at > ?1 ORDER BY logged_at DESC",
        )?;
        let rows = stmt.query_map(params![since.to_rfc3339()], SymptomRow::from_row)?;

        let mut symptoms = Vec::new();
        for row in rows {
            symptoms.push(row_to_symptom(row?)?);
        }
        Ok(symptoms)
    }

    pub fn count_symptoms_since(&self, since: DateTime<Utc>) -> Result<u64> {
        let n: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM symptoms WHERE logged_at > ?1",
            params![since.to_rfc3339()],
            |row| row.get(0),
        )?;
        Ok(n as u64)
    }

    /// Names ranked by how often they were logged. Ties break by name.
    pub fn most_frequent_symptoms(&self, limit: u32) -> Result<Vec<SymptomCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT symptom_name, COUNT(*) AS n FROM symptoms
             GROUP BY symptom_name ORDER BY n DESC, symptom_name ASC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            let count: i64 = row.get(1)?;
            Ok(SymptomCount {
                symptom_name: row.get(0)?,
                count: count as u32,
            })
        })?;

        let mut counts = Vec::new();
        for row in rows {
            counts.push(row?);
        }
        Ok(counts)
    }

    /// Mean severity over every logged symptom, 0 when there are none.
    pub fn average_severity(&self) -> Result<f64> {
        let avg: f64 = self.conn.query_row(
            "SELECT COALESCE(AVG(severity), 0.0) FROM symptoms",
            [],
            |row| row.get(0),
        )?;
        Ok(avg)
    }
}
