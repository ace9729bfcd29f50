use std::io::{self, IsTerminal};

use crate::app::{
    DayDetail, ProgressPoint, WeekDetail, WeekView, WorkoutDayView, WorkoutDetail, WorkoutView,
};
use crate::domain::calendar::{self, parse_date};
use crate::domain::ids::{display_id, EntityId};
use crate::domain::metrics::Metric;
use crate::domain::workload::{ScalarLoad, WorkoutLoad, WorkoutSet};

pub fn print_week_list(weeks: &[WeekView]) {
    let palette = Palette::auto();
    println!("{}", palette.heading("Weeks"));
    if weeks.is_empty() {
        println!("{}", palette.dim("no weeks logged"));
        return;
    }
    for week in weeks {
        println!("{}", format_week_row(week, &palette));
    }
    println!("{}", palette.dim(&format!("{} week(s)", weeks.len())));
}

pub fn print_week_detail(detail: &WeekDetail) {
    let palette = Palette::auto();
    println!("{}", format_week_row(&detail.week, &palette));
    if let Some(planned) = planned_weekdays(&detail.week.start_date) {
        println!("{}", palette.dim(&format!("days: {planned}")));
    }
    print_day_rows(&detail.days, &palette);
}

pub fn print_day_list(days: &[WorkoutDayView]) {
    let palette = Palette::auto();
    print_day_rows(days, &palette);
}

pub fn print_day_detail(detail: &DayDetail) {
    let palette = Palette::auto();
    println!("{}", format_day_row(&detail.day, &palette));
    print_workout_rows(&detail.workouts, &palette);
}

pub fn print_workout_list(workouts: &[WorkoutView]) {
    let palette = Palette::auto();
    print_workout_rows(workouts, &palette);
}

pub fn print_workout_detail(detail: &WorkoutDetail) {
    let palette = Palette::auto();
    let workout = &detail.workout;
    println!("{}", format_workout_row(workout, &palette));
    if let Some(notes) = workout.notes.as_deref() {
        println!("  {}", palette.dim(notes));
    }
    match &workout.load {
        WorkoutLoad::Scalar(scalar) => {
            println!("  {}", format_scalar(scalar));
        }
        WorkoutLoad::SetBased { sets } if sets.is_empty() => {
            println!("  {}", palette.dim("no sets recorded"));
        }
        WorkoutLoad::SetBased { sets } => {
            for set in sets {
                println!("  {}", format_set_row(set, &palette));
            }
        }
    }
    println!(
        "  {} {}  {} {}",
        palette.label("weight"),
        format_number(detail.metrics.weight),
        palette.label("volume"),
        format_number(detail.metrics.volume)
    );
}

pub fn print_set(set: &WorkoutSet) {
    let palette = Palette::auto();
    println!("{}", format_set_row(set, &palette));
}

pub fn print_set_list(sets: &[WorkoutSet]) {
    let palette = Palette::auto();
    if sets.is_empty() {
        println!("{}", palette.dim("no sets recorded"));
        return;
    }
    for set in sets {
        println!("{}", format_set_row(set, &palette));
    }
}

pub fn print_progress(name: &str, metric: Metric, points: &[ProgressPoint]) {
    let palette = Palette::auto();
    println!("{}", palette.heading(&format!("{name} ({metric})")));
    if points.is_empty() {
        println!("{}", palette.dim("no workouts with this exact name"));
        return;
    }
    for point in points {
        println!(
            "{:>3} {} {}",
            point.index,
            palette.id(display_id(point.workout_id.as_str())),
            format_number(point.value)
        );
    }
}

pub fn print_names(heading: &str, names: &[String]) {
    let palette = Palette::auto();
    println!("{}", palette.heading(heading));
    if names.is_empty() {
        println!("{}", palette.dim("no names matched"));
        return;
    }
    for name in names {
        println!("{name}");
    }
}

fn print_day_rows(days: &[WorkoutDayView], palette: &Palette) {
    if days.is_empty() {
        println!("{}", palette.dim("no days planned"));
        return;
    }
    for day in days {
        println!("{}", format_day_row(day, palette));
    }
}

fn print_workout_rows(workouts: &[WorkoutView], palette: &Palette) {
    if workouts.is_empty() {
        println!("{}", palette.dim("no workouts logged"));
        return;
    }
    for workout in workouts {
        println!("{}", format_workout_row(workout, palette));
    }
}

fn format_week_row(week: &WeekView, palette: &Palette) -> String {
    format!(
        "{} {} {}",
        palette.id(display_id(week.id.as_str())),
        palette.label(&format!("week {}", week.week_number)),
        palette.dim(&format!("{} .. {}", week.start_date, week.end_date))
    )
}

fn format_day_row(day: &WorkoutDayView, palette: &Palette) -> String {
    format!(
        "{} {} {}",
        palette.id(display_id(day.id.as_str())),
        day.name,
        palette.tag(&format!("[{}]", day.day_type))
    )
}

fn format_workout_row(workout: &WorkoutView, palette: &Palette) -> String {
    let mut line = format!(
        "{} {}",
        palette.id(display_id(workout.id.as_str())),
        workout.name
    );
    let summary = match &workout.load {
        WorkoutLoad::Scalar(scalar) => format_scalar(scalar),
        WorkoutLoad::SetBased { sets } => format!("{} set row(s)", sets.len()),
    };
    line.push(' ');
    line.push_str(&palette.dim(&summary));
    if workout.load.is_legacy() {
        line.push(' ');
        line.push_str(&palette.tag("(legacy)"));
    }
    if let Some(date) = workout.performed_on.as_deref() {
        line.push(' ');
        line.push_str(&palette.dim(date));
    }
    line
}

fn format_set_row(set: &WorkoutSet, palette: &Palette) -> String {
    format!(
        "{} {} x {} @ {}",
        palette.id(display_id(set.id.as_str())),
        or_dash(&set.sets),
        or_dash(&set.reps),
        or_dash(&set.weight)
    )
}

fn format_scalar(scalar: &ScalarLoad) -> String {
    format!(
        "{} x {} @ {}",
        or_dash(scalar.sets.as_deref().unwrap_or_default()),
        or_dash(scalar.reps.as_deref().unwrap_or_default()),
        or_dash(scalar.weight.as_deref().unwrap_or_default())
    )
}

fn planned_weekdays(start_date: &str) -> Option<String> {
    let start = parse_date(start_date).ok()?;
    Some(calendar::weekday_names_from(start).join(" "))
}

fn or_dash(raw: &str) -> &str {
    if raw.trim().is_empty() {
        "-"
    } else {
        raw
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn auto() -> Self {
        let enabled = std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();
        Self { enabled }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint("1;36", text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }

    pub fn id(&self, text: &str) -> String {
        self.paint("1;94", text)
    }

    fn label(&self, text: &str) -> String {
        self.paint("33", text)
    }

    fn tag(&self, text: &str) -> String {
        self.paint("35", text)
    }
}
