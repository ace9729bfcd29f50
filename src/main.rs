mod app;
mod cli;
mod cli_ops;
mod completions;
mod config;
mod db;
mod dispatch;
mod domain;
mod logging;
mod ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn print_json(value: &impl serde::Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("json serialization should work")
    );
}

fn run() -> Result<(), app::AppError> {
    use clap::Parser;
    use cli::Commands;

    let cli = cli::Cli::parse();
    if let Commands::Completions(args) = &cli.command {
        return completions::run_completions_command(args.shell.as_deref(), args.install);
    }

    let file_config = config::FileConfig::load(cli.config.as_deref())?;
    let settings = config::Settings::resolve(file_config, cli.db, cli.log_level);
    logging::init_logger(&settings.log_level);
    log::debug!("resolved settings: {:?}", settings);

    let app = app::App::open(&settings.db_path)?.with_suggestion_limit(settings.suggestion_limit);

    match cli.command {
        Commands::Week(args) => dispatch::run_week_command(&app, args)?,
        Commands::Day(args) => dispatch::run_day_command(&app, args)?,
        Commands::Workout(args) => dispatch::run_workout_command(&app, args)?,
        Commands::Set(args) => dispatch::run_set_command(&app, args)?,
        Commands::Progress(args) => dispatch::run_progress_command(&app, args)?,
        Commands::Names(args) => dispatch::run_names_command(&app, args)?,
        Commands::MigrateLegacy => {
            let folded = app.migrate_legacy_workouts()?;
            println!("migrated {} legacy workout(s)", folded);
        }
        Commands::Completions(_) => {
            unreachable!("completions are handled before app initialization")
        }
    }

    app.close()
}
