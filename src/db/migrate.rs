use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS health_records (
            id              TEXT PRIMARY KEY,
            recorded_at     TEXT NOT NULL,
            weight_kg       REAL NOT NULL,
            height_cm       REAL NOT NULL,
            bmi             REAL NOT NULL,
            activity_level  TEXT NOT NULL DEFAULT '',
            emotional_state TEXT NOT NULL DEFAULT '',
            daily_schedule  TEXT,
            notes           TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_health_recorded_at ON health_records(recorded_at);

        CREATE TABLE IF NOT EXISTS symptoms (
            id           TEXT PRIMARY KEY,
            symptom_type TEXT NOT NULL,
            symptom_name TEXT NOT NULL,
            severity     INTEGER NOT NULL CHECK (severity BETWEEN 1 AND 10),
            notes        TEXT,
            logged_at    TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_symptoms_logged_at ON symptoms(logged_at);
        CREATE INDEX IF NOT EXISTS idx_symptoms_type_ts ON symptoms(symptom_type, logged_at);

        CREATE TABLE IF NOT EXISTS goals (
            id           TEXT PRIMARY KEY,
            title        TEXT NOT NULL,
            description  TEXT,
            goal_type    TEXT NOT NULL,
            target       REAL NOT NULL,
            current      REAL NOT NULL DEFAULT 0,
            unit         TEXT,
            deadline     TEXT,
            is_completed INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_goals_created_at ON goals(created_at);

        CREATE TABLE IF NOT EXISTS water_intake (
            date       TEXT PRIMARY KEY,
            glasses    INTEGER NOT NULL DEFAULT 0 CHECK (glasses >= 0),
            goal       INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS reminders (
            id            TEXT PRIMARY KEY,
            reminder_type TEXT NOT NULL,
            label         TEXT NOT NULL,
            time          TEXT NOT NULL,
            is_active     INTEGER NOT NULL DEFAULT 1,
            created_at    TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_reminders_time ON reminders(time);",
    )?;
    Ok(())
}
