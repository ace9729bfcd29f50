use std::io::Write;

use log::LevelFilter;

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    let lvl = match level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => return None,
    };
    Some(lvl)
}

/// Installs the stderr logger. Plain level names set the global level; any
/// other value is treated as an env_logger filter directive such as
/// `liftlog::app=debug`.
pub fn init_logger(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder
        .format(move |buf, record| {
            writeln!(
                buf,
                "{}: {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);

    match parse_level(level) {
        Some(lvl) => {
            builder.filter_level(lvl);
        }
        None => {
            builder.parse_filters(level);
        }
    }

    let _ = builder.try_init();
}
