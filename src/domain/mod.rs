pub mod calendar;
pub mod exercise_name;
pub mod ids;
pub mod metrics;
pub mod workload;
