use clap::{Args, Subcommand};

#[derive(Debug, Args)]
#[command(about = "Week commands.", long_about = "Create, list, show, edit or delete weeks.")]
pub struct WeekArgs {
    #[command(subcommand)]
    pub command: WeekSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum WeekSubcommands {
    #[command(about = "Create a week from explicit dates or the week containing a date.")]
    New(WeekNewArgs),
    #[command(about = "List weeks ordered by week number.")]
    Ls(JsonArgs),
    #[command(about = "Show a week with its days in weekday order.")]
    Show(IdJsonArgs),
    #[command(about = "Edit week number or dates.")]
    Edit(WeekEditArgs),
    #[command(about = "Delete a week with all of its days, workouts and sets.")]
    Rm(IdArgs),
}

#[derive(Debug, Args)]
pub struct WeekNewArgs {
    #[arg(help = "Week number (not required to be unique).")]
    pub number: i64,

    #[arg(
        long,
        requires = "end",
        conflicts_with = "containing",
        help = "First day of the week (YYYY-MM-DD)."
    )]
    pub start: Option<String>,

    #[arg(long, requires = "start", help = "Last day of the week (YYYY-MM-DD).")]
    pub end: Option<String>,

    #[arg(
        long,
        help = "Any date in the week; bounds become the surrounding Sunday..Saturday. Defaults to today."
    )]
    pub containing: Option<String>,
}

#[derive(Debug, Args)]
pub struct WeekEditArgs {
    #[arg(help = "Week id or a unique trailing fragment of it.")]
    pub id: String,

    #[arg(short = 'n', long, help = "New week number.")]
    pub number: Option<i64>,

    #[arg(long, help = "New start date (YYYY-MM-DD).")]
    pub start: Option<String>,

    #[arg(long, help = "New end date (YYYY-MM-DD).")]
    pub end: Option<String>,
}

#[derive(Debug, Args)]
#[command(about = "Day commands.", long_about = "Plan and edit the workout days of a week.")]
pub struct DayArgs {
    #[command(subcommand)]
    pub command: DaySubcommands,
}

#[derive(Debug, Subcommand)]
pub enum DaySubcommands {
    #[command(about = "Add a day to a week.")]
    Add(DayAddArgs),
    #[command(about = "List a week's days, Sunday first.")]
    Ls(WeekScopedArgs),
    #[command(about = "Show a day with its workouts.")]
    Show(IdJsonArgs),
    #[command(about = "Rename a day or change its type.")]
    Edit(DayEditArgs),
    #[command(about = "Delete a day with its workouts and sets.")]
    Rm(IdArgs),
}

#[derive(Debug, Args)]
pub struct DayAddArgs {
    #[arg(help = "Week id or a unique trailing fragment of it.")]
    pub week: String,

    #[arg(help = "Weekday name, for example Monday.")]
    pub name: String,

    #[arg(
        short = 't',
        long = "type",
        default_value = "",
        help = "Day type such as Push or Legs. Blank means Rest."
    )]
    pub day_type: String,
}

#[derive(Debug, Args)]
pub struct DayEditArgs {
    #[arg(help = "Day id or a unique trailing fragment of it.")]
    pub id: String,

    #[arg(long, help = "New weekday name.")]
    pub name: Option<String>,

    #[arg(short = 't', long = "type", help = "New day type. Blank means Rest.")]
    pub day_type: Option<String>,
}

#[derive(Debug, Args)]
pub struct WeekScopedArgs {
    #[arg(help = "Week id or a unique trailing fragment of it.")]
    pub week: String,

    #[arg(long, help = "Render JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
#[command(about = "Workout commands.", long_about = "Log, inspect and edit workouts.")]
pub struct WorkoutArgs {
    #[command(subcommand)]
    pub command: WorkoutSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum WorkoutSubcommands {
    #[command(about = "Add a workout to a day.")]
    Add(WorkoutAddArgs),
    #[command(about = "List a day's workouts.")]
    Ls(DayScopedArgs),
    #[command(about = "Show a workout with its sets and metrics.")]
    Show(IdJsonArgs),
    #[command(about = "Rename a workout or change its notes.")]
    Edit(WorkoutEditArgs),
    #[command(about = "Delete a workout with its sets.")]
    Rm(IdArgs),
    #[command(about = "Show the most recent workout whose name contains TEXT.")]
    Last(WorkoutLastArgs),
}

#[derive(Debug, Args)]
pub struct WorkoutAddArgs {
    #[arg(help = "Day id or a unique trailing fragment of it.")]
    pub day: String,

    #[arg(help = "Exercise name.")]
    pub name: String,

    #[arg(short = 'n', long, help = "Optional notes.")]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct WorkoutEditArgs {
    #[arg(help = "Workout id or a unique trailing fragment of it.")]
    pub id: String,

    #[arg(long, help = "New exercise name.")]
    pub name: Option<String>,

    #[arg(short = 'n', long, help = "New notes. Empty clears them.")]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct WorkoutLastArgs {
    #[arg(help = "Text to look for in workout names, ignoring case.")]
    pub text: String,

    #[arg(long, help = "Render JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct DayScopedArgs {
    #[arg(help = "Day id or a unique trailing fragment of it.")]
    pub day: String,

    #[arg(long, help = "Render JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
#[command(about = "Set commands.", long_about = "Add, edit or delete set rows of a workout.")]
pub struct SetArgs {
    #[command(subcommand)]
    pub command: SetSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum SetSubcommands {
    #[command(about = "Append a set row to a workout.")]
    Add(SetAddArgs),
    #[command(about = "List a workout's set rows in entry order.")]
    Ls(WorkoutScopedArgs),
    #[command(about = "Change fields of a set row.")]
    Edit(SetEditArgs),
    #[command(about = "Delete a set row.")]
    Rm(IdArgs),
}

#[derive(Debug, Args)]
pub struct WorkoutScopedArgs {
    #[arg(help = "Workout id or a unique trailing fragment of it.")]
    pub workout: String,

    #[arg(long, help = "Render JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SetAddArgs {
    #[arg(help = "Workout id or a unique trailing fragment of it.")]
    pub workout: String,

    #[arg(short = 'w', long, default_value = "", help = "Weight lifted.")]
    pub weight: String,

    #[arg(short = 's', long, default_value = "", help = "Number of sets.")]
    pub sets: String,

    #[arg(short = 'r', long, default_value = "", help = "Repetitions per set.")]
    pub reps: String,
}

#[derive(Debug, Args)]
pub struct SetEditArgs {
    #[arg(help = "Set id or a unique trailing fragment of it.")]
    pub id: String,

    #[arg(short = 'w', long, help = "New weight.")]
    pub weight: Option<String>,

    #[arg(short = 's', long, help = "New number of sets.")]
    pub sets: Option<String>,

    #[arg(short = 'r', long, help = "New repetitions.")]
    pub reps: Option<String>,
}

#[derive(Debug, Args)]
#[command(
    about = "Exercise name commands.",
    long_about = "List, suggest, add or remove remembered exercise names."
)]
pub struct NamesArgs {
    #[command(subcommand)]
    pub command: NamesSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum NamesSubcommands {
    #[command(about = "List remembered names, sorted.")]
    Ls(NamesListArgs),
    #[command(about = "Suggest names containing TEXT, ignoring case.")]
    Suggest(NamesSuggestArgs),
    #[command(about = "Remember a name unless it is already known (ignoring case).")]
    Add(NameArgs),
    #[command(about = "Forget a remembered name.")]
    Rm(NameArgs),
}

#[derive(Debug, Args)]
pub struct NamesListArgs {
    #[arg(short = 's', long, help = "Only names containing this text (case-sensitive).")]
    pub search: Option<String>,

    #[arg(long, help = "Render JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct NamesSuggestArgs {
    #[arg(help = "Partial exercise name.")]
    pub text: String,

    #[arg(long, help = "Render JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(help = "Exercise name.")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    #[arg(help = "Id or a unique trailing fragment of it.")]
    pub id: String,
}

#[derive(Debug, Args)]
pub struct IdJsonArgs {
    #[arg(help = "Id or a unique trailing fragment of it.")]
    pub id: String,

    #[arg(long, help = "Render JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct JsonArgs {
    #[arg(long, help = "Render JSON output.")]
    pub json: bool,
}
