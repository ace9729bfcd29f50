use super::{App, AppError, DayPatch, SetPatch, WeekPatch, WorkoutPatch};
use crate::domain::calendar::parse_date;
use crate::domain::ids::{DayId, EntityId, WeekId, WorkoutId};
use crate::domain::metrics::Metric;
use crate::domain::workload::WorkoutLoad;
use rusqlite::params;
use std::path::PathBuf;
use time::Date;
use uuid::Uuid;

fn unique_workspace() -> PathBuf {
    let root = std::env::temp_dir().join(format!("liftlog-app-test-{}", Uuid::now_v7()));
    std::fs::create_dir_all(&root).expect("temp workspace should be creatable");
    root
}

fn date(raw: &str) -> Date {
    parse_date(raw).expect("test date should parse")
}

fn app() -> App {
    App::open_in_memory().expect("in-memory app should open")
}

fn seeded_day(app: &App) -> (WeekId, DayId) {
    let week = app
        .create_week(1, date("2025-01-12"), date("2025-01-18"))
        .expect("week should be created");
    let day = app
        .create_workout_day(&week.id, "Monday", "Push")
        .expect("day should be created");
    (week.id, day.id)
}

fn workout_with_sets(app: &App, day: &DayId, name: &str, sets: &[(&str, &str, &str)]) -> WorkoutId {
    let workout = app
        .create_workout(day, name, None)
        .expect("workout should be created");
    for (weight, count, reps) in sets {
        app.add_set(&workout.id, weight, count, reps)
            .expect("set should be added");
    }
    workout.id
}

fn volume(app: &App, workout: &WorkoutId) -> f64 {
    app.show_workout(workout)
        .expect("workout should show")
        .metrics
        .volume
}

fn weight(app: &App, workout: &WorkoutId) -> f64 {
    app.show_workout(workout)
        .expect("workout should show")
        .metrics
        .weight
}

fn count_rows(app: &App, table: &str) -> i64 {
    app.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .expect("count should be readable")
}

#[test]
fn open_creates_parent_directories_and_persists_across_reopen() {
    let root = unique_workspace();
    let db_path = root.join("nested/dir/state.sqlite");
    let db_path = db_path.to_str().expect("utf8 path");

    let app = App::open(db_path).expect("app should open");
    let week = app
        .create_week(3, date("2025-01-12"), date("2025-01-18"))
        .expect("week should be created");
    app.close().expect("close should succeed");

    let reopened = App::open(db_path).expect("app should reopen");
    let weeks = reopened.list_weeks().expect("weeks should list");
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].id, week.id);
    assert_eq!(weeks[0].week_number, 3);
    drop(reopened);

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn create_week_rejects_end_before_start_without_writing() {
    let app = app();
    let result = app.create_week(1, date("2024-03-10"), date("2024-03-01"));
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(app.list_weeks().expect("weeks should list").is_empty());
}

#[test]
fn create_week_allows_single_day_week() {
    let app = app();
    let week = app
        .create_week(1, date("2024-03-10"), date("2024-03-10"))
        .expect("equal bounds should be accepted");
    assert_eq!(week.start_date, "2024-03-10");
    assert_eq!(week.end_date, "2024-03-10");
    assert!(week.id.as_str().starts_with("W-"));
}

#[test]
fn create_week_containing_uses_sunday_start() {
    let app = app();
    let week = app
        .create_week_containing(2, date("2025-01-15"))
        .expect("week should be created");
    assert_eq!(week.start_date, "2025-01-12");
    assert_eq!(week.end_date, "2025-01-18");
}

#[test]
fn list_weeks_orders_by_number_and_allows_duplicates() {
    let app = app();
    let second = app
        .create_week(2, date("2025-01-19"), date("2025-01-25"))
        .expect("week should be created");
    let first = app
        .create_week(1, date("2025-01-12"), date("2025-01-18"))
        .expect("week should be created");
    let duplicate = app
        .create_week(1, date("2025-02-02"), date("2025-02-08"))
        .expect("duplicate week numbers are allowed");

    let ids: Vec<WeekId> = app
        .list_weeks()
        .expect("weeks should list")
        .into_iter()
        .map(|week| week.id)
        .collect();
    assert_eq!(ids, vec![first.id, duplicate.id, second.id]);
}

#[test]
fn days_are_listed_in_weekday_order() {
    let app = app();
    let week = app
        .create_week(1, date("2025-01-12"), date("2025-01-18"))
        .expect("week should be created");
    app.create_workout_day(&week.id, "Wednesday", "Legs")
        .expect("day should be created");
    app.create_workout_day(&week.id, "Monday", "Push")
        .expect("day should be created");

    let names: Vec<String> = app
        .list_workout_days_ordered_by_weekday(&week.id)
        .expect("days should list")
        .into_iter()
        .map(|day| day.name)
        .collect();
    assert_eq!(names, vec!["Monday", "Wednesday"]);
}

#[test]
fn unknown_day_names_tie_with_sunday_and_keep_insertion_order() {
    let app = app();
    let week = app
        .create_week(1, date("2025-01-12"), date("2025-01-18"))
        .expect("week should be created");
    for name in ["Tuesday", "Funday", "Sunday", "monday", "Tuesday"] {
        app.create_workout_day(&week.id, name, "")
            .expect("day should be created");
    }

    let first = app
        .list_workout_days_ordered_by_weekday(&week.id)
        .expect("days should list");
    let names: Vec<&str> = first.iter().map(|day| day.name.as_str()).collect();
    assert_eq!(names, vec!["Funday", "Sunday", "monday", "Tuesday", "Tuesday"]);

    let again = app
        .list_workout_days_ordered_by_weekday(&week.id)
        .expect("days should list");
    assert_eq!(first, again);
}

#[test]
fn blank_day_type_is_stored_as_rest() {
    let app = app();
    let (week_id, _) = seeded_day(&app);
    let day = app
        .create_workout_day(&week_id, "Sunday", "   ")
        .expect("day should be created");
    assert_eq!(day.day_type, "Rest");

    let edited = app
        .update_workout_day(
            &day.id,
            DayPatch {
                day_type: Some(String::new()),
                name: Some("Saturday".to_string()),
            },
        )
        .expect("day should update");
    assert_eq!(edited.day_type, "Rest");
    assert_eq!(edited.name, "Saturday");
}

#[test]
fn children_require_existing_parents() {
    let app = app();
    let missing_week = WeekId::generate();
    assert!(matches!(
        app.create_workout_day(&missing_week, "Monday", "Push"),
        Err(AppError::NotFound { kind: "week", .. })
    ));
    let missing_day = DayId::generate();
    assert!(matches!(
        app.create_workout(&missing_day, "Bench Press", None),
        Err(AppError::NotFound { kind: "workout day", .. })
    ));
    let missing_workout = WorkoutId::generate();
    assert!(matches!(
        app.add_set(&missing_workout, "100", "3", "10"),
        Err(AppError::NotFound { kind: "workout", .. })
    ));
}

#[test]
fn volume_and_weight_follow_set_rows() {
    let app = app();
    let (_, day) = seeded_day(&app);
    let workout = workout_with_sets(
        &app,
        &day,
        "Bench Press",
        &[("100", "3", "10"), ("120", "1", "5")],
    );

    assert_eq!(volume(&app, &workout), 3600.0);
    assert_eq!(weight(&app, &workout), 110.0);

    let detail = app.show_workout(&workout).expect("workout should show");
    assert_eq!(detail.metrics.volume, 3600.0);
    assert_eq!(detail.metrics.weight, 110.0);
}

#[test]
fn volume_with_repeated_sets_matches_formula() {
    let app = app();
    let (_, day) = seeded_day(&app);
    let workout = workout_with_sets(
        &app,
        &day,
        "Row",
        &[("100", "3", "10"), ("100", "1", "8")],
    );
    assert_eq!(volume(&app, &workout), 3800.0);
}

#[test]
fn non_numeric_quantities_count_as_zero() {
    let app = app();
    let (_, day) = seeded_day(&app);
    let workout = workout_with_sets(&app, &day, "Curl", &[("abc", "3", "10"), ("20", "2", "")]);
    assert_eq!(volume(&app, &workout), 0.0);
    assert_eq!(weight(&app, &workout), 10.0);

    let empty = app
        .create_workout(&day, "Plank", None)
        .expect("workout should be created");
    assert_eq!(weight(&app, &empty.id), 0.0);
    assert_eq!(volume(&app, &empty.id), 0.0);
}

#[test]
fn create_workout_validates_name_and_records_it_once() {
    let app = app();
    let (_, day) = seeded_day(&app);
    assert!(matches!(
        app.create_workout(&day, "   ", None),
        Err(AppError::Validation(_))
    ));

    let created = app
        .create_workout(&day, "  Bench Press ", Some("  "))
        .expect("workout should be created");
    assert_eq!(created.name, "Bench Press");
    assert_eq!(created.notes, None);
    assert!(created.performed_on.is_some());
    assert_eq!(created.load, WorkoutLoad::SetBased { sets: Vec::new() });

    app.create_workout(&day, "bench press", None)
        .expect("second workout should be created");
    assert_eq!(
        app.list_exercise_names(None).expect("names should list"),
        vec!["Bench Press".to_string()]
    );
}

#[test]
fn recording_exercise_names_is_case_insensitive() {
    let app = app();
    assert!(app
        .record_exercise_name_if_new("Bench Press")
        .expect("record should succeed"));
    assert!(!app
        .record_exercise_name_if_new("bench press")
        .expect("record should succeed"));
    assert!(!app
        .record_exercise_name_if_new("  BENCH PRESS  ")
        .expect("record should succeed"));
    assert_eq!(
        app.list_exercise_names(None).expect("names should list"),
        vec!["Bench Press".to_string()]
    );
    assert!(matches!(
        app.record_exercise_name_if_new(" "),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn suggestions_match_substrings_ignoring_case() {
    let app = app();
    for name in ["Back Squat", "Bench Press", "Front Squat"] {
        app.record_exercise_name_if_new(name)
            .expect("record should succeed");
    }
    assert_eq!(
        app.suggest_exercise_names("squat").expect("suggest"),
        vec!["Back Squat".to_string(), "Front Squat".to_string()]
    );
    assert!(app.suggest_exercise_names("  ").expect("suggest").is_empty());
    assert!(app.suggest_exercise_names("deadlift").expect("suggest").is_empty());
}

#[test]
fn suggestions_respect_limit() {
    let app = app().with_suggestion_limit(2);
    for index in 0..5 {
        app.record_exercise_name_if_new(&format!("Press {index}"))
            .expect("record should succeed");
    }
    assert_eq!(
        app.suggest_exercise_names("press").expect("suggest"),
        vec!["Press 0".to_string(), "Press 1".to_string()]
    );

    let default_limit = self::app();
    for index in 0..15 {
        default_limit
            .record_exercise_name_if_new(&format!("Squat {index}"))
            .expect("record should succeed");
    }
    assert_eq!(
        default_limit.suggest_exercise_names("SQUAT").expect("suggest").len(),
        10
    );
}

#[test]
fn list_and_remove_exercise_names() {
    let app = app();
    for name in ["Row", "Bench Press", "Overhead Press"] {
        app.record_exercise_name_if_new(name)
            .expect("record should succeed");
    }
    assert_eq!(
        app.list_exercise_names(None).expect("names should list"),
        vec!["Bench Press", "Overhead Press", "Row"]
    );
    assert_eq!(
        app.list_exercise_names(Some("Press")).expect("names should list"),
        vec!["Bench Press", "Overhead Press"]
    );
    assert!(app
        .list_exercise_names(Some("press"))
        .expect("names should list")
        .is_empty());

    app.remove_exercise_name("bench PRESS")
        .expect("remove should succeed");
    assert_eq!(
        app.list_exercise_names(None).expect("names should list"),
        vec!["Overhead Press", "Row"]
    );
    assert!(matches!(
        app.remove_exercise_name("Deadlift"),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn most_recent_workout_prefers_latest_insert() {
    let app = app();
    let (_, day) = seeded_day(&app);
    app.create_workout(&day, "Bench Press", None)
        .expect("workout should be created");
    let latest = app
        .create_workout(&day, "Incline Bench", None)
        .expect("workout should be created");
    app.create_workout(&day, "Squat", None)
        .expect("workout should be created");

    let found = app
        .most_recent_workout("BENCH")
        .expect("lookup should succeed")
        .expect("a workout should match");
    assert_eq!(found.id, latest.id);
    assert!(app
        .most_recent_workout("deadlift")
        .expect("lookup should succeed")
        .is_none());
    assert!(app
        .most_recent_workout("")
        .expect("lookup should succeed")
        .is_none());
}

#[test]
fn deleting_week_removes_whole_subtree() {
    let app = app();
    let (week_id, day) = seeded_day(&app);
    let other_week = app
        .create_week(2, date("2025-01-19"), date("2025-01-25"))
        .expect("week should be created");
    workout_with_sets(&app, &day, "Bench Press", &[("100", "3", "10")]);
    workout_with_sets(&app, &day, "Squat", &[("140", "5", "5"), ("150", "3", "3")]);

    app.delete_week(&week_id).expect("delete should succeed");

    assert_eq!(count_rows(&app, "workout_day"), 0);
    assert_eq!(count_rows(&app, "workout"), 0);
    assert_eq!(count_rows(&app, "workout_set"), 0);
    let remaining = app.list_weeks().expect("weeks should list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other_week.id);
    assert_eq!(
        app.list_exercise_names(None).expect("registry survives"),
        vec!["Bench Press", "Squat"]
    );
}

#[test]
fn deleting_day_workout_and_set_cascade_locally() {
    let app = app();
    let (week_id, day) = seeded_day(&app);
    let workout = workout_with_sets(&app, &day, "Row", &[("60", "3", "12"), ("70", "3", "10")]);

    let sets = app.list_sets(&workout).expect("sets should list");
    app.delete_set(&sets[0].id).expect("set delete");
    assert_eq!(app.list_sets(&workout).expect("sets should list").len(), 1);

    app.delete_workout(&workout).expect("workout delete");
    assert_eq!(count_rows(&app, "workout_set"), 0);

    app.delete_workout_day(&day).expect("day delete");
    assert!(app
        .list_workout_days_ordered_by_weekday(&week_id)
        .expect("days should list")
        .is_empty());

    assert!(matches!(
        app.delete_workout_day(&day),
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        app.delete_week(&WeekId::generate()),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn show_week_and_day_include_children() {
    let app = app();
    let (week_id, day) = seeded_day(&app);
    app.create_workout_day(&week_id, "Sunday", "Rest")
        .expect("day should be created");
    workout_with_sets(&app, &day, "Bench Press", &[("100", "3", "10")]);

    let week = app.show_week(&week_id).expect("week should show");
    let day_names: Vec<&str> = week.days.iter().map(|day| day.name.as_str()).collect();
    assert_eq!(day_names, vec!["Sunday", "Monday"]);

    let detail = app.show_workout_day(&day).expect("day should show");
    assert_eq!(detail.workouts.len(), 1);
    match &detail.workouts[0].load {
        WorkoutLoad::SetBased { sets } => assert_eq!(sets.len(), 1),
        other => panic!("unexpected load {other:?}"),
    }
}

#[test]
fn update_week_revalidates_merged_dates() {
    let app = app();
    let week = app
        .create_week(1, date("2025-01-12"), date("2025-01-18"))
        .expect("week should be created");

    let bad = app.update_week(
        &week.id,
        WeekPatch {
            start_date: Some(date("2025-01-20")),
            ..WeekPatch::default()
        },
    );
    assert!(matches!(bad, Err(AppError::Validation(_))));
    let unchanged = app.show_week(&week.id).expect("week should show");
    assert_eq!(unchanged.week.start_date, "2025-01-12");

    let updated = app
        .update_week(
            &week.id,
            WeekPatch {
                week_number: Some(7),
                end_date: Some(date("2025-01-25")),
                ..WeekPatch::default()
            },
        )
        .expect("week should update");
    assert_eq!(updated.week_number, 7);
    assert_eq!(updated.start_date, "2025-01-12");
    assert_eq!(updated.end_date, "2025-01-25");

    assert!(matches!(
        app.update_week(&week.id, WeekPatch::default()),
        Err(AppError::InvalidArgument(_))
    ));
}

#[test]
fn update_workout_renames_and_records_new_name() {
    let app = app();
    let (_, day) = seeded_day(&app);
    let workout = app
        .create_workout(&day, "Bench", Some("felt heavy"))
        .expect("workout should be created");

    let updated = app
        .update_workout(
            &workout.id,
            WorkoutPatch {
                name: Some("Paused Bench".to_string()),
                notes: Some(String::new()),
            },
        )
        .expect("workout should update");
    assert_eq!(updated.name, "Paused Bench");
    assert_eq!(updated.notes, None);
    assert_eq!(
        app.list_exercise_names(None).expect("names should list"),
        vec!["Bench", "Paused Bench"]
    );

    assert!(matches!(
        app.update_workout(
            &workout.id,
            WorkoutPatch {
                name: Some(" ".to_string()),
                notes: None,
            }
        ),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        app.update_workout(&workout.id, WorkoutPatch::default()),
        Err(AppError::InvalidArgument(_))
    ));
}

#[test]
fn update_set_changes_only_given_fields() {
    let app = app();
    let (_, day) = seeded_day(&app);
    let workout = workout_with_sets(&app, &day, "Press", &[("50", "3", "8")]);
    let set = app.list_sets(&workout).expect("sets should list").remove(0);

    let updated = app
        .update_set(
            &set.id,
            SetPatch {
                reps: Some("10".to_string()),
                ..SetPatch::default()
            },
        )
        .expect("set should update");
    assert_eq!(updated.weight, "50");
    assert_eq!(updated.sets, "3");
    assert_eq!(updated.reps, "10");
    assert_eq!(volume(&app, &workout), 1500.0);

    assert!(matches!(
        app.update_set(&set.id, SetPatch::default()),
        Err(AppError::InvalidArgument(_))
    ));
}

#[test]
fn exercise_progress_uses_exact_names_in_insert_order() {
    let app = app();
    let (_, day) = seeded_day(&app);
    let first = workout_with_sets(&app, &day, "Squat", &[("100", "5", "5")]);
    workout_with_sets(&app, &day, "Front Squat", &[("80", "5", "5")]);
    let second = workout_with_sets(&app, &day, "Squat", &[("110", "5", "5"), ("120", "3", "3")]);

    let weights = app
        .exercise_progress("Squat", Metric::Weight)
        .expect("progress should load");
    assert_eq!(weights.len(), 2);
    assert_eq!(weights[0].index, 0);
    assert_eq!(weights[0].workout_id, first);
    assert_eq!(weights[0].value, 100.0);
    assert_eq!(weights[1].workout_id, second);
    assert_eq!(weights[1].value, 115.0);

    let volumes = app
        .exercise_progress("Squat", Metric::Volume)
        .expect("progress should load");
    assert_eq!(volumes[1].value, 110.0 * 25.0 + 120.0 * 9.0);

    assert!(app
        .exercise_progress("squat", Metric::Weight)
        .expect("progress should load")
        .is_empty());
    assert_eq!(
        app.chartable_exercise_names().expect("names should list"),
        vec!["Front Squat", "Squat"]
    );
}

#[test]
fn legacy_scalar_workouts_read_and_migrate_with_equal_metrics() {
    let app = app();
    let (_, day) = seeded_day(&app);
    let workout = app
        .create_workout(&day, "Deadlift", None)
        .expect("workout should be created");
    app.conn
        .execute(
            "UPDATE workout SET legacy_weight = ?2, legacy_sets = ?3, legacy_reps = ?4 WHERE id = ?1",
            params![workout.id.as_str(), "135", "5", "5"],
        )
        .expect("legacy columns should be writable");

    let legacy = app.show_workout(&workout.id).expect("workout should show");
    assert!(legacy.workout.load.is_legacy());
    assert_eq!(legacy.metrics.weight, 135.0);
    assert_eq!(legacy.metrics.volume, 3375.0);

    assert_eq!(app.migrate_legacy_workouts().expect("migrate"), 1);
    assert_eq!(app.migrate_legacy_workouts().expect("migrate again"), 0);

    let migrated = app.show_workout(&workout.id).expect("workout should show");
    assert!(!migrated.workout.load.is_legacy());
    assert_eq!(migrated.metrics, legacy.metrics);
    let sets = app.list_sets(&workout.id).expect("sets should list");
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].weight, "135");
}

#[test]
fn resolve_accepts_full_ids_and_unique_suffixes() {
    let app = app();
    let (week_id, _) = seeded_day(&app);
    let full: WeekId = app.resolve(week_id.as_str()).expect("full id resolves");
    assert_eq!(full, week_id);

    let suffix = &week_id.as_str()[week_id.as_str().len() - 8..];
    let short: WeekId = app.resolve(suffix).expect("suffix resolves");
    assert_eq!(short, week_id);

    assert!(matches!(
        app.resolve::<WeekId>("does-not-exist"),
        Err(AppError::NotFound { kind: "week", .. })
    ));
    assert!(matches!(
        app.resolve::<WeekId>(" "),
        Err(AppError::InvalidArgument(_))
    ));
}

#[test]
fn storage_errors_surface_instead_of_being_swallowed() {
    let app = app();
    let (week_id, _) = seeded_day(&app);
    app.conn
        .execute_batch("DROP TABLE exercise_name;")
        .expect("table should drop");
    assert!(matches!(
        app.suggest_exercise_names("press"),
        Err(AppError::Storage(_))
    ));
    assert!(matches!(
        app.record_exercise_name_if_new("Press"),
        Err(AppError::Storage(_))
    ));
    assert_eq!(app.list_weeks().expect("weeks still list")[0].id, week_id);
}

#[test]
fn create_workout_commits_nothing_when_name_recording_fails() {
    let app = app();
    let (_, day) = seeded_day(&app);
    app.conn
        .execute_batch("DROP TABLE exercise_name;")
        .expect("table should drop");

    assert!(matches!(
        app.create_workout(&day, "Deadlift", None),
        Err(AppError::Storage(_))
    ));
    assert_eq!(count_rows(&app, "workout"), 0);
}

#[test]
fn renaming_workout_commits_nothing_when_name_recording_fails() {
    let app = app();
    let (_, day) = seeded_day(&app);
    let workout = workout_with_sets(&app, &day, "Bench Press", &[("100", "3", "10")]);
    app.conn
        .execute_batch("DROP TABLE exercise_name;")
        .expect("table should drop");

    let result = app.update_workout(
        &workout,
        WorkoutPatch {
            name: Some("Incline Press".to_string()),
            notes: Some("slow negatives".to_string()),
        },
    );
    assert!(matches!(result, Err(AppError::Storage(_))));

    let stored = app.show_workout(&workout).expect("workout should show");
    assert_eq!(stored.workout.name, "Bench Press");
    assert_eq!(stored.workout.notes, None);
}

#[test]
fn resolve_validates_whole_ids_before_lookup() {
    let app = app();
    let (week_id, day_id) = seeded_day(&app);

    assert!(matches!(
        app.resolve::<WeekId>("W-not-a-uuid"),
        Err(AppError::InvalidArgument(_))
    ));
    assert!(matches!(
        app.resolve::<WeekId>(day_id.as_str()),
        Err(AppError::InvalidArgument(_))
    ));
    assert!(matches!(
        app.resolve::<WeekId>(WeekId::generate().as_str()),
        Err(AppError::NotFound { kind: "week", .. })
    ));
    let resolved: WeekId = app
        .resolve(&format!("  {}  ", week_id))
        .expect("padded id resolves");
    assert_eq!(resolved, week_id);
}
