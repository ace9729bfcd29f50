use std::error::Error;
use std::fmt;

use log::{debug, error, info};
use rusqlite::Connection;
use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::config::{ConfigError, DEFAULT_SUGGESTION_LIMIT};
use crate::db::{self, DayRecord, SetRecord, WeekRecord, WorkoutRecord};
use crate::domain::calendar::{self, format_date, ParseDateError};
use crate::domain::exercise_name::{contains_ignoring_case, entry_key, normalize_entry};
use crate::domain::ids::{
    has_kind_prefix, DayId, EntityId, ParseIdError, SetId, WeekId, WorkoutId,
};
use crate::domain::metrics::{self, Metric, ParseMetricError};
use crate::domain::workload::{ScalarLoad, WorkoutLoad, WorkoutSet};

const REST_DAY_TYPE: &str = "Rest";
const IN_MEMORY_PATH: &str = ":memory:";

pub struct App {
    conn: Connection,
    suggestion_limit: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeekView {
    pub id: WeekId,
    pub week_number: i64,
    pub start_date: String,
    pub end_date: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeekDetail {
    #[serde(flatten)]
    pub week: WeekView,
    pub days: Vec<WorkoutDayView>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkoutDayView {
    pub id: DayId,
    pub week_id: WeekId,
    pub name: String,
    pub day_type: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayDetail {
    #[serde(flatten)]
    pub day: WorkoutDayView,
    pub workouts: Vec<WorkoutView>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkoutView {
    pub id: WorkoutId,
    pub day_id: DayId,
    pub name: String,
    pub notes: Option<String>,
    pub performed_on: Option<String>,
    pub created_at: String,
    pub load: WorkoutLoad,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct WorkoutMetrics {
    pub weight: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkoutDetail {
    #[serde(flatten)]
    pub workout: WorkoutView,
    pub metrics: WorkoutMetrics,
}

/// One sample of an exercise's progress series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressPoint {
    pub index: usize,
    pub workout_id: WorkoutId,
    pub value: f64,
}

#[derive(Debug, Clone, Default)]
pub struct WeekPatch {
    pub week_number: Option<i64>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Debug, Clone, Default)]
pub struct DayPatch {
    pub name: Option<String>,
    pub day_type: Option<String>,
}

/// `notes: Some("")` clears the notes.
#[derive(Debug, Clone, Default)]
pub struct WorkoutPatch {
    pub name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SetPatch {
    pub weight: Option<String>,
    pub sets: Option<String>,
    pub reps: Option<String>,
}

impl WeekPatch {
    fn has_changes(&self) -> bool {
        self.week_number.is_some() || self.start_date.is_some() || self.end_date.is_some()
    }
}

impl DayPatch {
    fn has_changes(&self) -> bool {
        self.name.is_some() || self.day_type.is_some()
    }
}

impl WorkoutPatch {
    fn has_changes(&self) -> bool {
        self.name.is_some() || self.notes.is_some()
    }
}

impl SetPatch {
    fn has_changes(&self) -> bool {
        self.weight.is_some() || self.sets.is_some() || self.reps.is_some()
    }
}

impl App {
    /// Opens (creating if needed) the log at `db_path`. `:memory:` opens a
    /// throwaway in-memory log.
    pub fn open(db_path: &str) -> Result<Self, AppError> {
        if db_path == IN_MEMORY_PATH {
            return Self::open_in_memory();
        }
        ensure_parent_dir(db_path)?;
        let conn = db::open_connection(db_path).storage("open database")?;
        debug!("opened training log at {}", db_path);
        Ok(Self {
            conn,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        })
    }

    pub fn open_in_memory() -> Result<Self, AppError> {
        let conn = db::open_in_memory().storage("open in-memory database")?;
        Ok(Self {
            conn,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        })
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit.max(1);
        self
    }

    pub fn close(self) -> Result<(), AppError> {
        self.conn
            .close()
            .map_err(|(_, err)| err)
            .storage("close database")
    }

    /// Resolves a full id or a unique trailing fragment of one.
    pub fn resolve<I: EntityId>(&self, raw: &str) -> Result<I, AppError> {
        let needle = raw.trim();
        if needle.is_empty() {
            return Err(AppError::InvalidArgument(format!(
                "{} id cannot be empty",
                I::KIND
            )));
        }
        if has_kind_prefix(needle) {
            let id: I = needle.parse()?;
            return if db::id_exists(&self.conn, I::TABLE, id.as_str()).storage("resolve id")? {
                Ok(id)
            } else {
                Err(AppError::not_found::<I>(id.as_str()))
            };
        }
        let mut matches = db::resolve_ids(&self.conn, I::TABLE, needle).storage("resolve id")?;
        match matches.len() {
            0 => Err(AppError::not_found::<I>(needle)),
            1 => Ok(I::from_raw(matches.remove(0))),
            count => Err(AppError::InvalidArgument(format!(
                "{} id '{}' is ambiguous ({} matches)",
                I::KIND,
                needle,
                count
            ))),
        }
    }

    // Weeks

    pub fn create_week(
        &self,
        week_number: i64,
        start_date: Date,
        end_date: Date,
    ) -> Result<WeekView, AppError> {
        ensure_date_order(start_date, end_date)?;
        let record = WeekRecord {
            id: WeekId::generate().to_string(),
            week_number,
            start_date: format_date(start_date),
            end_date: format_date(end_date),
            created_at: db::now_utc_rfc3339(),
        };
        db::insert_week(&self.conn, &record).storage("create week")?;
        info!("created week {} ({})", record.week_number, record.id);
        Ok(WeekView::from(record))
    }

    /// Creates the Sunday-to-Saturday week that contains `date`.
    pub fn create_week_containing(
        &self,
        week_number: i64,
        date: Date,
    ) -> Result<WeekView, AppError> {
        let (start, end) = calendar::week_bounds_containing(date).ok_or_else(|| {
            AppError::InvalidArgument(format!("no full week contains {}", format_date(date)))
        })?;
        self.create_week(week_number, start, end)
    }

    pub fn list_weeks(&self) -> Result<Vec<WeekView>, AppError> {
        let weeks = db::list_weeks(&self.conn).storage("list weeks")?;
        Ok(weeks.into_iter().map(WeekView::from).collect())
    }

    pub fn show_week(&self, id: &WeekId) -> Result<WeekDetail, AppError> {
        let week = self.require_week(id)?;
        let days = self.list_workout_days_ordered_by_weekday(id)?;
        Ok(WeekDetail {
            week: WeekView::from(week),
            days,
        })
    }

    pub fn update_week(&self, id: &WeekId, patch: WeekPatch) -> Result<WeekView, AppError> {
        if !patch.has_changes() {
            return Err(AppError::InvalidArgument(
                "week update requires at least one change".to_string(),
            ));
        }
        let mut record = self.require_week(id)?;
        let start = match patch.start_date {
            Some(date) => date,
            None => stored_date(&record.start_date)?,
        };
        let end = match patch.end_date {
            Some(date) => date,
            None => stored_date(&record.end_date)?,
        };
        ensure_date_order(start, end)?;

        if let Some(week_number) = patch.week_number {
            record.week_number = week_number;
        }
        record.start_date = format_date(start);
        record.end_date = format_date(end);
        db::update_week(&self.conn, &record).storage("update week")?;
        Ok(WeekView::from(record))
    }

    pub fn delete_week(&self, id: &WeekId) -> Result<(), AppError> {
        let removed = db::delete_week(&self.conn, id.as_str()).storage("delete week")?;
        if removed == 0 {
            return Err(AppError::not_found::<WeekId>(id.as_str()));
        }
        info!("deleted week {} with its days, workouts and sets", id);
        Ok(())
    }

    // Workout days

    pub fn create_workout_day(
        &self,
        week_id: &WeekId,
        name: &str,
        day_type: &str,
    ) -> Result<WorkoutDayView, AppError> {
        self.require_week(week_id)?;
        let record = DayRecord {
            id: DayId::generate().to_string(),
            week_id: week_id.to_string(),
            name: name.trim().to_string(),
            day_type: day_type_or_rest(day_type),
            created_at: db::now_utc_rfc3339(),
        };
        db::insert_day(&self.conn, &record).storage("create workout day")?;
        Ok(WorkoutDayView::from(record))
    }

    /// Days of a week in Sunday-first order. Names that are not weekdays sort
    /// with Sunday; ties keep insertion order.
    pub fn list_workout_days_ordered_by_weekday(
        &self,
        week_id: &WeekId,
    ) -> Result<Vec<WorkoutDayView>, AppError> {
        self.require_week(week_id)?;
        let records =
            db::list_days_for_week(&self.conn, week_id.as_str()).storage("list workout days")?;
        let mut days: Vec<WorkoutDayView> = records.into_iter().map(WorkoutDayView::from).collect();
        calendar::sort_by_weekday(&mut days, |day| day.name.as_str());
        Ok(days)
    }

    pub fn show_workout_day(&self, id: &DayId) -> Result<DayDetail, AppError> {
        let day = self.require_day(id)?;
        let workouts = self.list_workouts(id)?;
        Ok(DayDetail {
            day: WorkoutDayView::from(day),
            workouts,
        })
    }

    pub fn update_workout_day(
        &self,
        id: &DayId,
        patch: DayPatch,
    ) -> Result<WorkoutDayView, AppError> {
        if !patch.has_changes() {
            return Err(AppError::InvalidArgument(
                "workout day update requires at least one change".to_string(),
            ));
        }
        let mut record = self.require_day(id)?;
        if let Some(name) = patch.name {
            record.name = name.trim().to_string();
        }
        if let Some(day_type) = patch.day_type {
            record.day_type = day_type_or_rest(&day_type);
        }
        db::update_day(&self.conn, &record).storage("update workout day")?;
        Ok(WorkoutDayView::from(record))
    }

    pub fn delete_workout_day(&self, id: &DayId) -> Result<(), AppError> {
        let removed = db::delete_day(&self.conn, id.as_str()).storage("delete workout day")?;
        if removed == 0 {
            return Err(AppError::not_found::<DayId>(id.as_str()));
        }
        Ok(())
    }

    // Workouts

    /// Appends a workout to a day and records its name for autocomplete.
    pub fn create_workout(
        &self,
        day_id: &DayId,
        name: &str,
        notes: Option<&str>,
    ) -> Result<WorkoutView, AppError> {
        let name = normalize_entry(name).ok_or_else(|| {
            AppError::Validation("workout name cannot be blank".to_string())
        })?;
        self.require_day(day_id)?;

        let record = WorkoutRecord {
            id: WorkoutId::generate().to_string(),
            day_id: day_id.to_string(),
            name,
            notes: notes.and_then(normalize_entry),
            performed_on: Some(format_date(OffsetDateTime::now_utc().date())),
            legacy_weight: None,
            legacy_sets: None,
            legacy_reps: None,
            created_at: db::now_utc_rfc3339(),
        };

        let tx = self.conn.unchecked_transaction().storage("create workout")?;
        db::insert_workout(&tx, &record).storage("create workout")?;
        db::insert_exercise_name_if_absent(&tx, &entry_key(&record.name), &record.name)
            .storage("record exercise name")?;
        tx.commit().storage("create workout")?;

        self.workout_view(record)
    }

    pub fn list_workouts(&self, day_id: &DayId) -> Result<Vec<WorkoutView>, AppError> {
        self.require_day(day_id)?;
        let records =
            db::list_workouts_for_day(&self.conn, day_id.as_str()).storage("list workouts")?;
        records
            .into_iter()
            .map(|record| self.workout_view(record))
            .collect()
    }

    pub fn show_workout(&self, id: &WorkoutId) -> Result<WorkoutDetail, AppError> {
        let workout = self.load_workout(id)?;
        let metrics = WorkoutMetrics {
            weight: metrics::weight_metric(&workout.load),
            volume: metrics::volume_metric(&workout.load),
        };
        Ok(WorkoutDetail { workout, metrics })
    }

    pub fn update_workout(
        &self,
        id: &WorkoutId,
        patch: WorkoutPatch,
    ) -> Result<WorkoutView, AppError> {
        if !patch.has_changes() {
            return Err(AppError::InvalidArgument(
                "workout update requires at least one change".to_string(),
            ));
        }
        let mut record = self.require_workout(id)?;
        if let Some(name) = patch.name.as_deref() {
            record.name = normalize_entry(name).ok_or_else(|| {
                AppError::Validation("workout name cannot be blank".to_string())
            })?;
        }
        if let Some(notes) = patch.notes.as_deref() {
            record.notes = normalize_entry(notes);
        }

        let tx = self.conn.unchecked_transaction().storage("update workout")?;
        db::update_workout(&tx, &record).storage("update workout")?;
        if patch.name.is_some() {
            db::insert_exercise_name_if_absent(&tx, &entry_key(&record.name), &record.name)
                .storage("record exercise name")?;
        }
        tx.commit().storage("update workout")?;

        self.workout_view(record)
    }

    pub fn delete_workout(&self, id: &WorkoutId) -> Result<(), AppError> {
        let removed = db::delete_workout(&self.conn, id.as_str()).storage("delete workout")?;
        if removed == 0 {
            return Err(AppError::not_found::<WorkoutId>(id.as_str()));
        }
        Ok(())
    }

    /// Latest workout whose name contains `text`, ignoring case.
    pub fn most_recent_workout(&self, text: &str) -> Result<Option<WorkoutView>, AppError> {
        let needle = text.trim();
        if needle.is_empty() {
            return Ok(None);
        }
        let records =
            db::list_workouts_newest_first(&self.conn).storage("find most recent workout")?;
        match records
            .into_iter()
            .find(|record| contains_ignoring_case(&record.name, needle))
        {
            Some(record) => self.workout_view(record).map(Some),
            None => Ok(None),
        }
    }

    // Sets

    pub fn add_set(
        &self,
        workout_id: &WorkoutId,
        weight: &str,
        sets: &str,
        reps: &str,
    ) -> Result<WorkoutSet, AppError> {
        self.require_workout(workout_id)?;
        let record = SetRecord {
            id: SetId::generate().to_string(),
            workout_id: workout_id.to_string(),
            weight: weight.trim().to_string(),
            sets: sets.trim().to_string(),
            reps: reps.trim().to_string(),
            created_at: db::now_utc_rfc3339(),
        };
        db::insert_set(&self.conn, &record).storage("add set")?;
        Ok(WorkoutSet::from(record))
    }

    pub fn list_sets(&self, workout_id: &WorkoutId) -> Result<Vec<WorkoutSet>, AppError> {
        self.require_workout(workout_id)?;
        let records =
            db::list_sets_for_workout(&self.conn, workout_id.as_str()).storage("list sets")?;
        Ok(records.into_iter().map(WorkoutSet::from).collect())
    }

    pub fn update_set(&self, id: &SetId, patch: SetPatch) -> Result<WorkoutSet, AppError> {
        if !patch.has_changes() {
            return Err(AppError::InvalidArgument(
                "set update requires at least one change".to_string(),
            ));
        }
        let mut record = db::get_set(&self.conn, id.as_str())
            .storage("load set")?
            .ok_or_else(|| AppError::not_found::<SetId>(id.as_str()))?;
        if let Some(weight) = patch.weight {
            record.weight = weight.trim().to_string();
        }
        if let Some(sets) = patch.sets {
            record.sets = sets.trim().to_string();
        }
        if let Some(reps) = patch.reps {
            record.reps = reps.trim().to_string();
        }
        db::update_set(&self.conn, &record).storage("update set")?;
        Ok(WorkoutSet::from(record))
    }

    pub fn delete_set(&self, id: &SetId) -> Result<(), AppError> {
        let removed = db::delete_set(&self.conn, id.as_str()).storage("delete set")?;
        if removed == 0 {
            return Err(AppError::not_found::<SetId>(id.as_str()));
        }
        Ok(())
    }

    // Exercise-name registry

    /// Entries containing `prefix` ignoring case, in the order they were first
    /// recorded. A blank prefix suggests nothing.
    pub fn suggest_exercise_names(&self, prefix: &str) -> Result<Vec<String>, AppError> {
        let needle = prefix.trim();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let entries = db::list_exercise_names(&self.conn).storage("suggest exercise names")?;
        Ok(entries
            .into_iter()
            .filter(|entry| contains_ignoring_case(entry, needle))
            .take(self.suggestion_limit)
            .collect())
    }

    /// Returns whether the name was new.
    pub fn record_exercise_name_if_new(&self, name: &str) -> Result<bool, AppError> {
        let entry = normalize_entry(name)
            .ok_or_else(|| AppError::Validation("exercise name cannot be blank".to_string()))?;
        db::insert_exercise_name_if_absent(&self.conn, &entry_key(&entry), &entry)
            .storage("record exercise name")
    }

    /// Sorted registry entries, optionally narrowed to those containing
    /// `search` (case-sensitive).
    pub fn list_exercise_names(&self, search: Option<&str>) -> Result<Vec<String>, AppError> {
        let mut entries = db::list_exercise_names(&self.conn).storage("list exercise names")?;
        if let Some(search) = search.filter(|value| !value.is_empty()) {
            entries.retain(|entry| entry.contains(search));
        }
        entries.sort();
        Ok(entries)
    }

    pub fn remove_exercise_name(&self, name: &str) -> Result<(), AppError> {
        let key = entry_key(name);
        let removed =
            db::delete_exercise_name(&self.conn, &key).storage("remove exercise name")?;
        if removed == 0 {
            return Err(AppError::NotFound {
                kind: "exercise name",
                id: name.trim().to_string(),
            });
        }
        Ok(())
    }

    // Progress

    pub fn chartable_exercise_names(&self) -> Result<Vec<String>, AppError> {
        let mut names = db::list_exercise_names(&self.conn).storage("list exercise names")?;
        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Metric value of every workout named exactly `name`, oldest first.
    pub fn exercise_progress(
        &self,
        name: &str,
        metric: Metric,
    ) -> Result<Vec<ProgressPoint>, AppError> {
        let records = db::list_workouts_named(&self.conn, name).storage("load progress")?;
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| -> Result<ProgressPoint, AppError> {
                let workout = self.workout_view(record)?;
                Ok(ProgressPoint {
                    index,
                    value: metric.compute(&workout.load),
                    workout_id: workout.id,
                })
            })
            .collect()
    }

    /// Folds legacy scalar workouts into set rows. Safe to run repeatedly.
    pub fn migrate_legacy_workouts(&self) -> Result<usize, AppError> {
        let tx = self
            .conn
            .unchecked_transaction()
            .storage("migrate legacy workouts")?;
        let folded = db::fold_legacy_workouts(&tx).storage("migrate legacy workouts")?;
        tx.commit().storage("migrate legacy workouts")?;
        if folded > 0 {
            info!("folded {} legacy workout(s) into sets", folded);
        }
        Ok(folded)
    }

    fn require_week(&self, id: &WeekId) -> Result<WeekRecord, AppError> {
        db::get_week(&self.conn, id.as_str())
            .storage("load week")?
            .ok_or_else(|| AppError::not_found::<WeekId>(id.as_str()))
    }

    fn require_day(&self, id: &DayId) -> Result<DayRecord, AppError> {
        db::get_day(&self.conn, id.as_str())
            .storage("load workout day")?
            .ok_or_else(|| AppError::not_found::<DayId>(id.as_str()))
    }

    fn require_workout(&self, id: &WorkoutId) -> Result<WorkoutRecord, AppError> {
        db::get_workout(&self.conn, id.as_str())
            .storage("load workout")?
            .ok_or_else(|| AppError::not_found::<WorkoutId>(id.as_str()))
    }

    fn load_workout(&self, id: &WorkoutId) -> Result<WorkoutView, AppError> {
        let record = self.require_workout(id)?;
        self.workout_view(record)
    }

    fn workout_view(&self, record: WorkoutRecord) -> Result<WorkoutView, AppError> {
        let sets = db::list_sets_for_workout(&self.conn, &record.id)
            .storage("load workout sets")?
            .into_iter()
            .map(WorkoutSet::from)
            .collect();
        let legacy = ScalarLoad {
            weight: record.legacy_weight,
            sets: record.legacy_sets,
            reps: record.legacy_reps,
        };
        Ok(WorkoutView {
            id: WorkoutId::from_raw(record.id),
            day_id: DayId::from_raw(record.day_id),
            name: record.name,
            notes: record.notes,
            performed_on: record.performed_on,
            created_at: record.created_at,
            load: WorkoutLoad::from_parts(legacy, sets),
        })
    }
}

fn ensure_parent_dir(path: &str) -> Result<(), AppError> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn ensure_date_order(start: Date, end: Date) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::Validation(format!(
            "week end date {} is before start date {}",
            format_date(end),
            format_date(start)
        )));
    }
    Ok(())
}

fn stored_date(raw: &str) -> Result<Date, AppError> {
    calendar::parse_date(raw).map_err(AppError::from)
}

fn day_type_or_rest(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        REST_DAY_TYPE.to_string()
    } else {
        trimmed.to_string()
    }
}

trait StorageContext<T> {
    fn storage(self, operation: &'static str) -> Result<T, AppError>;
}

impl<T> StorageContext<T> for rusqlite::Result<T> {
    fn storage(self, operation: &'static str) -> Result<T, AppError> {
        self.map_err(|err| {
            error!("{} failed: {}", operation, err);
            AppError::Storage(err)
        })
    }
}

impl From<WeekRecord> for WeekView {
    fn from(value: WeekRecord) -> Self {
        Self {
            id: WeekId::from_raw(value.id),
            week_number: value.week_number,
            start_date: value.start_date,
            end_date: value.end_date,
            created_at: value.created_at,
        }
    }
}

impl From<DayRecord> for WorkoutDayView {
    fn from(value: DayRecord) -> Self {
        Self {
            id: DayId::from_raw(value.id),
            week_id: WeekId::from_raw(value.week_id),
            name: value.name,
            day_type: value.day_type,
            created_at: value.created_at,
        }
    }
}

impl From<SetRecord> for WorkoutSet {
    fn from(value: SetRecord) -> Self {
        Self {
            id: SetId::from_raw(value.id),
            workout_id: WorkoutId::from_raw(value.workout_id),
            weight: value.weight,
            sets: value.sets,
            reps: value.reps,
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Storage(rusqlite::Error),
    Config(ConfigError),
    Validation(String),
    InvalidArgument(String),
    NotFound { kind: &'static str, id: String },
}

impl AppError {
    fn not_found<I: EntityId>(id: &str) -> Self {
        AppError::NotFound {
            kind: I::KIND,
            id: id.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "I/O error: {}", err),
            AppError::Storage(err) => write!(f, "storage error: {}", err),
            AppError::Config(err) => write!(f, "{}", err),
            AppError::Validation(message) => write!(f, "{}", message),
            AppError::InvalidArgument(message) => write!(f, "{}", message),
            AppError::NotFound { kind, id } => write!(f, "{} '{}' not found", kind, id),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::Storage(err) => Some(err),
            AppError::Config(err) => Some(err),
            AppError::Validation(_) => None,
            AppError::InvalidArgument(_) => None,
            AppError::NotFound { .. } => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ParseDateError> for AppError {
    fn from(value: ParseDateError) -> Self {
        AppError::InvalidArgument(value.to_string())
    }
}

impl From<ParseIdError> for AppError {
    fn from(value: ParseIdError) -> Self {
        AppError::InvalidArgument(value.to_string())
    }
}

impl From<ParseMetricError> for AppError {
    fn from(value: ParseMetricError) -> Self {
        AppError::InvalidArgument(value.to_string())
    }
}

#[cfg(test)]
mod tests;
