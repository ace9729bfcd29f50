use std::time::Duration;

use rusqlite::{params, Connection, DatabaseName, OptionalExtension, Result, Row};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::ids::SetId;

pub const CURRENT_SCHEMA_VERSION: i64 = 2;

struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
    backfill: Option<fn(&Connection) -> Result<usize>>,
}

const MIGRATIONS: [Migration; 2] = [
    Migration {
        version: 1,
        name: "baseline_training_log_v1",
        sql: r#"
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS week (
    id TEXT PRIMARY KEY,
    week_number INTEGER NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS workout_day (
    id TEXT PRIMARY KEY,
    week_id TEXT NOT NULL REFERENCES week(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    day_type TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS workout (
    id TEXT PRIMARY KEY,
    day_id TEXT NOT NULL REFERENCES workout_day(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    notes TEXT,
    performed_on TEXT,
    legacy_weight TEXT,
    legacy_sets TEXT,
    legacy_reps TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS workout_set (
    id TEXT PRIMARY KEY,
    workout_id TEXT NOT NULL REFERENCES workout(id) ON DELETE CASCADE,
    weight TEXT NOT NULL,
    sets TEXT NOT NULL,
    reps TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS exercise_name (
    entry_key TEXT PRIMARY KEY,
    entry TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_workout_day_week_id ON workout_day(week_id);
CREATE INDEX IF NOT EXISTS idx_workout_day_id ON workout(day_id);
CREATE INDEX IF NOT EXISTS idx_workout_name ON workout(name);
CREATE INDEX IF NOT EXISTS idx_workout_set_workout_id ON workout_set(workout_id);
"#,
        backfill: None,
    },
    Migration {
        version: 2,
        name: "fold_legacy_workout_columns_v1",
        sql: "",
        backfill: Some(fold_legacy_workouts),
    },
];

pub fn open_connection(path: &str) -> Result<Connection> {
    let mut conn = Connection::open(path)?;
    configure_for_speed(&conn)?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let mut conn = Connection::open_in_memory()?;
    conn.pragma_update(None::<DatabaseName>, "foreign_keys", "ON")?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}

fn configure_for_speed(conn: &Connection) -> Result<()> {
    conn.pragma_update(None::<DatabaseName>, "journal_mode", "WAL")?;
    conn.pragma_update(None::<DatabaseName>, "synchronous", "NORMAL")?;
    conn.pragma_update(None::<DatabaseName>, "foreign_keys", "ON")?;
    conn.pragma_update(None::<DatabaseName>, "temp_store", "MEMORY")?;
    conn.pragma_update(None::<DatabaseName>, "busy_timeout", 5000i64)?;
    conn.busy_timeout(Duration::from_millis(5000))?;
    Ok(())
}

fn apply_migrations(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(
        r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL
);
"#,
    )?;

    for migration in MIGRATIONS {
        let already_applied: Option<i64> = tx
            .query_row(
                "SELECT version FROM schema_migrations WHERE version = ?1",
                params![migration.version],
                |row| row.get(0),
            )
            .optional()?;

        if already_applied.is_some() {
            continue;
        }

        if !migration.sql.trim().is_empty() {
            tx.execute_batch(migration.sql)?;
        }
        if let Some(backfill) = migration.backfill {
            let touched = backfill(&tx)?;
            log::info!("migration {} backfilled {} row(s)", migration.name, touched);
        }
        tx.execute(
            "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
            params![migration.version, migration.name, now_utc_rfc3339()],
        )?;
    }

    tx.execute(
        r#"
INSERT INTO meta (key, value)
VALUES ('schema_version', ?1)
ON CONFLICT(key) DO UPDATE SET value = excluded.value
"#,
        params![CURRENT_SCHEMA_VERSION.to_string()],
    )?;

    tx.commit()
}

pub fn now_utc_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .expect("RFC3339 formatting for UTC timestamp should never fail")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRecord {
    pub id: String,
    pub week_number: i64,
    pub start_date: String,
    pub end_date: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub id: String,
    pub week_id: String,
    pub name: String,
    pub day_type: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutRecord {
    pub id: String,
    pub day_id: String,
    pub name: String,
    pub notes: Option<String>,
    pub performed_on: Option<String>,
    pub legacy_weight: Option<String>,
    pub legacy_sets: Option<String>,
    pub legacy_reps: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRecord {
    pub id: String,
    pub workout_id: String,
    pub weight: String,
    pub sets: String,
    pub reps: String,
    pub created_at: String,
}

fn week_from_row(row: &Row<'_>) -> Result<WeekRecord> {
    Ok(WeekRecord {
        id: row.get(0)?,
        week_number: row.get(1)?,
        start_date: row.get(2)?,
        end_date: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn day_from_row(row: &Row<'_>) -> Result<DayRecord> {
    Ok(DayRecord {
        id: row.get(0)?,
        week_id: row.get(1)?,
        name: row.get(2)?,
        day_type: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn workout_from_row(row: &Row<'_>) -> Result<WorkoutRecord> {
    Ok(WorkoutRecord {
        id: row.get(0)?,
        day_id: row.get(1)?,
        name: row.get(2)?,
        notes: row.get(3)?,
        performed_on: row.get(4)?,
        legacy_weight: row.get(5)?,
        legacy_sets: row.get(6)?,
        legacy_reps: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn set_from_row(row: &Row<'_>) -> Result<SetRecord> {
    Ok(SetRecord {
        id: row.get(0)?,
        workout_id: row.get(1)?,
        weight: row.get(2)?,
        sets: row.get(3)?,
        reps: row.get(4)?,
        created_at: row.get(5)?,
    })
}

const WEEK_COLUMNS: &str = "id, week_number, start_date, end_date, created_at";
const DAY_COLUMNS: &str = "id, week_id, name, day_type, created_at";
const WORKOUT_COLUMNS: &str = concat!(
    "id, day_id, name, notes, performed_on, ",
    "legacy_weight, legacy_sets, legacy_reps, created_at"
);
const SET_COLUMNS: &str = "id, workout_id, weight, sets, reps, created_at";

pub fn insert_week(conn: &Connection, week: &WeekRecord) -> Result<()> {
    conn.execute(
        r#"
INSERT INTO week (id, week_number, start_date, end_date, created_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#,
        params![
            week.id,
            week.week_number,
            week.start_date,
            week.end_date,
            week.created_at
        ],
    )?;
    Ok(())
}

pub fn get_week(conn: &Connection, id: &str) -> Result<Option<WeekRecord>> {
    conn.query_row(
        &format!("SELECT {WEEK_COLUMNS} FROM week WHERE id = ?1"),
        params![id],
        week_from_row,
    )
    .optional()
}

pub fn list_weeks(conn: &Connection) -> Result<Vec<WeekRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {WEEK_COLUMNS} FROM week ORDER BY week_number ASC, rowid ASC"
    ))?;
    let rows = stmt.query_map([], week_from_row)?;
    rows.collect()
}

pub fn update_week(conn: &Connection, week: &WeekRecord) -> Result<usize> {
    conn.execute(
        "UPDATE week SET week_number = ?2, start_date = ?3, end_date = ?4 WHERE id = ?1",
        params![week.id, week.week_number, week.start_date, week.end_date],
    )
}

pub fn delete_week(conn: &Connection, id: &str) -> Result<usize> {
    conn.execute("DELETE FROM week WHERE id = ?1", params![id])
}

pub fn insert_day(conn: &Connection, day: &DayRecord) -> Result<()> {
    conn.execute(
        r#"
INSERT INTO workout_day (id, week_id, name, day_type, created_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#,
        params![day.id, day.week_id, day.name, day.day_type, day.created_at],
    )?;
    Ok(())
}

pub fn get_day(conn: &Connection, id: &str) -> Result<Option<DayRecord>> {
    conn.query_row(
        &format!("SELECT {DAY_COLUMNS} FROM workout_day WHERE id = ?1"),
        params![id],
        day_from_row,
    )
    .optional()
}

pub fn list_days_for_week(conn: &Connection, week_id: &str) -> Result<Vec<DayRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {DAY_COLUMNS} FROM workout_day WHERE week_id = ?1 ORDER BY rowid ASC"
    ))?;
    let rows = stmt.query_map(params![week_id], day_from_row)?;
    rows.collect()
}

pub fn update_day(conn: &Connection, day: &DayRecord) -> Result<usize> {
    conn.execute(
        "UPDATE workout_day SET name = ?2, day_type = ?3 WHERE id = ?1",
        params![day.id, day.name, day.day_type],
    )
}

pub fn delete_day(conn: &Connection, id: &str) -> Result<usize> {
    conn.execute("DELETE FROM workout_day WHERE id = ?1", params![id])
}

pub fn insert_workout(conn: &Connection, workout: &WorkoutRecord) -> Result<()> {
    conn.execute(
        r#"
INSERT INTO workout (
    id, day_id, name, notes, performed_on,
    legacy_weight, legacy_sets, legacy_reps, created_at
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#,
        params![
            workout.id,
            workout.day_id,
            workout.name,
            workout.notes,
            workout.performed_on,
            workout.legacy_weight,
            workout.legacy_sets,
            workout.legacy_reps,
            workout.created_at
        ],
    )?;
    Ok(())
}

pub fn get_workout(conn: &Connection, id: &str) -> Result<Option<WorkoutRecord>> {
    conn.query_row(
        &format!("SELECT {WORKOUT_COLUMNS} FROM workout WHERE id = ?1"),
        params![id],
        workout_from_row,
    )
    .optional()
}

pub fn list_workouts_for_day(conn: &Connection, day_id: &str) -> Result<Vec<WorkoutRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {WORKOUT_COLUMNS} FROM workout WHERE day_id = ?1 ORDER BY rowid ASC"
    ))?;
    let rows = stmt.query_map(params![day_id], workout_from_row)?;
    rows.collect()
}

pub fn list_workouts_named(conn: &Connection, name: &str) -> Result<Vec<WorkoutRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {WORKOUT_COLUMNS} FROM workout WHERE name = ?1 ORDER BY rowid ASC"
    ))?;
    let rows = stmt.query_map(params![name], workout_from_row)?;
    rows.collect()
}

pub fn list_workouts_newest_first(conn: &Connection) -> Result<Vec<WorkoutRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {WORKOUT_COLUMNS} FROM workout ORDER BY rowid DESC"
    ))?;
    let rows = stmt.query_map([], workout_from_row)?;
    rows.collect()
}

pub fn update_workout(conn: &Connection, workout: &WorkoutRecord) -> Result<usize> {
    conn.execute(
        "UPDATE workout SET name = ?2, notes = ?3 WHERE id = ?1",
        params![workout.id, workout.name, workout.notes],
    )
}

pub fn delete_workout(conn: &Connection, id: &str) -> Result<usize> {
    conn.execute("DELETE FROM workout WHERE id = ?1", params![id])
}

pub fn insert_set(conn: &Connection, set: &SetRecord) -> Result<()> {
    conn.execute(
        r#"
INSERT INTO workout_set (id, workout_id, weight, sets, reps, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#,
        params![
            set.id,
            set.workout_id,
            set.weight,
            set.sets,
            set.reps,
            set.created_at
        ],
    )?;
    Ok(())
}

pub fn get_set(conn: &Connection, id: &str) -> Result<Option<SetRecord>> {
    conn.query_row(
        &format!("SELECT {SET_COLUMNS} FROM workout_set WHERE id = ?1"),
        params![id],
        set_from_row,
    )
    .optional()
}

pub fn list_sets_for_workout(conn: &Connection, workout_id: &str) -> Result<Vec<SetRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SET_COLUMNS} FROM workout_set WHERE workout_id = ?1 ORDER BY rowid ASC"
    ))?;
    let rows = stmt.query_map(params![workout_id], set_from_row)?;
    rows.collect()
}

pub fn update_set(conn: &Connection, set: &SetRecord) -> Result<usize> {
    conn.execute(
        "UPDATE workout_set SET weight = ?2, sets = ?3, reps = ?4 WHERE id = ?1",
        params![set.id, set.weight, set.sets, set.reps],
    )
}

pub fn delete_set(conn: &Connection, id: &str) -> Result<usize> {
    conn.execute("DELETE FROM workout_set WHERE id = ?1", params![id])
}

/// Inserts unless an entry with the same key exists. Returns whether a row
/// was written.
pub fn insert_exercise_name_if_absent(conn: &Connection, key: &str, entry: &str) -> Result<bool> {
    let inserted = conn.execute(
        r#"
INSERT INTO exercise_name (entry_key, entry, created_at)
VALUES (?1, ?2, ?3)
ON CONFLICT(entry_key) DO NOTHING
"#,
        params![key, entry, now_utc_rfc3339()],
    )?;
    Ok(inserted == 1)
}

pub fn list_exercise_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT entry FROM exercise_name ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect()
}

pub fn delete_exercise_name(conn: &Connection, key: &str) -> Result<usize> {
    conn.execute(
        "DELETE FROM exercise_name WHERE entry_key = ?1",
        params![key],
    )
}

/// Ids in `table` equal to `raw` or ending with it, oldest first.
pub fn resolve_ids(conn: &Connection, table: &'static str, raw: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT id FROM {table} WHERE id = ?1 OR substr(id, -length(?1)) = ?1 ORDER BY rowid ASC"
    ))?;
    let rows = stmt.query_map(params![raw], |row| row.get(0))?;
    rows.collect()
}

pub fn id_exists(conn: &Connection, table: &'static str, id: &str) -> Result<bool> {
    conn.query_row(
        &format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?1)"),
        params![id],
        |row| row.get(0),
    )
}

/// Converts workouts still carrying legacy scalar columns into set rows.
/// A workout that already has sets only gets its legacy columns cleared.
pub fn fold_legacy_workouts(conn: &Connection) -> Result<usize> {
    let legacy: Vec<WorkoutRecord> = {
        let mut stmt = conn.prepare(&format!(
            r#"
SELECT {WORKOUT_COLUMNS} FROM workout
WHERE legacy_weight IS NOT NULL OR legacy_sets IS NOT NULL OR legacy_reps IS NOT NULL
ORDER BY rowid ASC
"#
        ))?;
        let rows = stmt.query_map([], workout_from_row)?;
        rows.collect::<Result<Vec<_>>>()?
    };

    let mut folded = 0usize;
    for workout in legacy {
        let has_sets: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM workout_set WHERE workout_id = ?1)",
            params![workout.id],
            |row| row.get(0),
        )?;
        if !has_sets {
            insert_set(
                conn,
                &SetRecord {
                    id: SetId::generate().to_string(),
                    workout_id: workout.id.clone(),
                    weight: workout.legacy_weight.clone().unwrap_or_default(),
                    sets: workout.legacy_sets.clone().unwrap_or_default(),
                    reps: workout.legacy_reps.clone().unwrap_or_default(),
                    created_at: now_utc_rfc3339(),
                },
            )?;
            folded += 1;
        }
        conn.execute(
            r#"
UPDATE workout
SET legacy_weight = NULL, legacy_sets = NULL, legacy_reps = NULL
WHERE id = ?1
"#,
            params![workout.id],
        )?;
    }
    Ok(folded)
}
