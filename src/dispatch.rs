use std::str::FromStr;

use time::OffsetDateTime;

use crate::app::{App, AppError, DayPatch, SetPatch, WeekPatch, WeekView, WorkoutPatch};
use crate::cli::{
    DayArgs, DaySubcommands, NamesArgs, NamesSubcommands, ProgressArgs, SetArgs, SetSubcommands,
    WeekArgs, WeekNewArgs, WeekSubcommands, WorkoutArgs, WorkoutSubcommands,
};
use crate::domain::calendar::parse_date;
use crate::domain::ids::{display_id, DayId, EntityId, SetId, WeekId, WorkoutId};
use crate::domain::metrics::Metric;
use crate::print_json;
use crate::ui::{self, Palette};

pub fn run_week_command(app: &App, args: WeekArgs) -> Result<(), AppError> {
    match args.command {
        WeekSubcommands::New(new) => {
            let week = create_week(app, new)?;
            println!(
                "created {} week {} ({} .. {})",
                Palette::auto().id(display_id(week.id.as_str())),
                week.week_number,
                week.start_date,
                week.end_date
            );
        }
        WeekSubcommands::Ls(ls) => {
            let weeks = app.list_weeks()?;
            if ls.json {
                print_json(&weeks);
            } else {
                ui::print_week_list(&weeks);
            }
        }
        WeekSubcommands::Show(show) => {
            let id: WeekId = app.resolve(&show.id)?;
            let detail = app.show_week(&id)?;
            if show.json {
                print_json(&detail);
            } else {
                ui::print_week_detail(&detail);
            }
        }
        WeekSubcommands::Edit(edit) => {
            let id: WeekId = app.resolve(&edit.id)?;
            let patch = WeekPatch {
                week_number: edit.number,
                start_date: edit.start.as_deref().map(parse_date).transpose()?,
                end_date: edit.end.as_deref().map(parse_date).transpose()?,
            };
            let week = app.update_week(&id, patch)?;
            println!(
                "updated {} week {} ({} .. {})",
                display_id(week.id.as_str()),
                week.week_number,
                week.start_date,
                week.end_date
            );
        }
        WeekSubcommands::Rm(rm) => {
            let id: WeekId = app.resolve(&rm.id)?;
            app.delete_week(&id)?;
            println!("deleted week {}", display_id(id.as_str()));
        }
    }
    Ok(())
}

fn create_week(app: &App, args: WeekNewArgs) -> Result<WeekView, AppError> {
    match (args.start.as_deref(), args.end.as_deref()) {
        (Some(start), Some(end)) => {
            app.create_week(args.number, parse_date(start)?, parse_date(end)?)
        }
        _ => {
            let anchor = match args.containing.as_deref() {
                Some(raw) => parse_date(raw)?,
                None => OffsetDateTime::now_utc().date(),
            };
            app.create_week_containing(args.number, anchor)
        }
    }
}

pub fn run_day_command(app: &App, args: DayArgs) -> Result<(), AppError> {
    match args.command {
        DaySubcommands::Add(add) => {
            let week: WeekId = app.resolve(&add.week)?;
            let day = app.create_workout_day(&week, &add.name, &add.day_type)?;
            println!(
                "created {} {} [{}]",
                Palette::auto().id(display_id(day.id.as_str())),
                day.name,
                day.day_type
            );
        }
        DaySubcommands::Ls(ls) => {
            let week: WeekId = app.resolve(&ls.week)?;
            let days = app.list_workout_days_ordered_by_weekday(&week)?;
            if ls.json {
                print_json(&days);
            } else {
                ui::print_day_list(&days);
            }
        }
        DaySubcommands::Show(show) => {
            let id: DayId = app.resolve(&show.id)?;
            let detail = app.show_workout_day(&id)?;
            if show.json {
                print_json(&detail);
            } else {
                ui::print_day_detail(&detail);
            }
        }
        DaySubcommands::Edit(edit) => {
            let id: DayId = app.resolve(&edit.id)?;
            let day = app.update_workout_day(
                &id,
                DayPatch {
                    name: edit.name,
                    day_type: edit.day_type,
                },
            )?;
            println!(
                "updated {} {} [{}]",
                display_id(day.id.as_str()),
                day.name,
                day.day_type
            );
        }
        DaySubcommands::Rm(rm) => {
            let id: DayId = app.resolve(&rm.id)?;
            app.delete_workout_day(&id)?;
            println!("deleted day {}", display_id(id.as_str()));
        }
    }
    Ok(())
}

pub fn run_workout_command(app: &App, args: WorkoutArgs) -> Result<(), AppError> {
    match args.command {
        WorkoutSubcommands::Add(add) => {
            let day: DayId = app.resolve(&add.day)?;
            let workout = app.create_workout(&day, &add.name, add.notes.as_deref())?;
            println!(
                "created {} {}",
                Palette::auto().id(display_id(workout.id.as_str())),
                workout.name
            );
        }
        WorkoutSubcommands::Ls(ls) => {
            let day: DayId = app.resolve(&ls.day)?;
            let workouts = app.list_workouts(&day)?;
            if ls.json {
                print_json(&workouts);
            } else {
                ui::print_workout_list(&workouts);
            }
        }
        WorkoutSubcommands::Show(show) => {
            let id: WorkoutId = app.resolve(&show.id)?;
            let detail = app.show_workout(&id)?;
            if show.json {
                print_json(&detail);
            } else {
                ui::print_workout_detail(&detail);
            }
        }
        WorkoutSubcommands::Edit(edit) => {
            let id: WorkoutId = app.resolve(&edit.id)?;
            let workout = app.update_workout(
                &id,
                WorkoutPatch {
                    name: edit.name,
                    notes: edit.notes,
                },
            )?;
            println!("updated {} {}", display_id(workout.id.as_str()), workout.name);
        }
        WorkoutSubcommands::Rm(rm) => {
            let id: WorkoutId = app.resolve(&rm.id)?;
            app.delete_workout(&id)?;
            println!("deleted workout {}", display_id(id.as_str()));
        }
        WorkoutSubcommands::Last(last) => match app.most_recent_workout(&last.text)? {
            Some(workout) => {
                let detail = app.show_workout(&workout.id)?;
                if last.json {
                    print_json(&detail);
                } else {
                    ui::print_workout_detail(&detail);
                }
            }
            None if last.json => print_json(&serde_json::Value::Null),
            None => println!("no workout matches '{}'", last.text),
        },
    }
    Ok(())
}

pub fn run_set_command(app: &App, args: SetArgs) -> Result<(), AppError> {
    match args.command {
        SetSubcommands::Add(add) => {
            let workout: WorkoutId = app.resolve(&add.workout)?;
            let set = app.add_set(&workout, &add.weight, &add.sets, &add.reps)?;
            ui::print_set(&set);
        }
        SetSubcommands::Ls(ls) => {
            let workout: WorkoutId = app.resolve(&ls.workout)?;
            let sets = app.list_sets(&workout)?;
            if ls.json {
                print_json(&sets);
            } else {
                ui::print_set_list(&sets);
            }
        }
        SetSubcommands::Edit(edit) => {
            let id: SetId = app.resolve(&edit.id)?;
            let set = app.update_set(
                &id,
                SetPatch {
                    weight: edit.weight,
                    sets: edit.sets,
                    reps: edit.reps,
                },
            )?;
            ui::print_set(&set);
        }
        SetSubcommands::Rm(rm) => {
            let id: SetId = app.resolve(&rm.id)?;
            app.delete_set(&id)?;
            println!("deleted set {}", display_id(id.as_str()));
        }
    }
    Ok(())
}

pub fn run_progress_command(app: &App, args: ProgressArgs) -> Result<(), AppError> {
    let Some(name) = args.name else {
        let names = app.chartable_exercise_names()?;
        if args.json {
            print_json(&names);
        } else {
            ui::print_names("Chartable exercises", &names);
        }
        return Ok(());
    };
    let metric = Metric::from_str(&args.metric)?;
    let points = app.exercise_progress(&name, metric)?;
    if args.json {
        print_json(&points);
    } else {
        ui::print_progress(&name, metric, &points);
    }
    Ok(())
}

pub fn run_names_command(app: &App, args: NamesArgs) -> Result<(), AppError> {
    match args.command {
        NamesSubcommands::Ls(ls) => {
            let names = app.list_exercise_names(ls.search.as_deref())?;
            if ls.json {
                print_json(&names);
            } else {
                ui::print_names("Exercise names", &names);
            }
        }
        NamesSubcommands::Suggest(suggest) => {
            let names = app.suggest_exercise_names(&suggest.text)?;
            if suggest.json {
                print_json(&names);
            } else {
                ui::print_names("Suggestions", &names);
            }
        }
        NamesSubcommands::Add(add) => {
            if app.record_exercise_name_if_new(&add.name)? {
                println!("remembered '{}'", add.name.trim());
            } else {
                println!("'{}' is already known", add.name.trim());
            }
        }
        NamesSubcommands::Rm(rm) => {
            app.remove_exercise_name(&rm.name)?;
            println!("forgot '{}'", rm.name.trim());
        }
    }
    Ok(())
}
