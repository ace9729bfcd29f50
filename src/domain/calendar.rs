use std::error::Error;
use std::fmt;

use time::format_description::well_known::Iso8601;
use time::{Date, Duration};

pub const CANONICAL_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Position of `name` in the Sunday-first week. Matching is exact; names that
/// are not weekdays land on 0 alongside Sunday.
pub fn weekday_index(name: &str) -> usize {
    CANONICAL_WEEKDAYS
        .iter()
        .position(|day| *day == name)
        .unwrap_or(0)
}

/// Stable sort, so entries sharing an index keep their incoming order.
pub fn sort_by_weekday<T, F>(items: &mut [T], name: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_key(|item| weekday_index(name(item)));
}

pub fn weekday_name(date: Date) -> &'static str {
    CANONICAL_WEEKDAYS[usize::from(date.weekday().number_days_from_sunday())]
}

/// Sunday..Saturday bounds of the week containing `date`.
pub fn week_bounds_containing(date: Date) -> Option<(Date, Date)> {
    let offset = i64::from(date.weekday().number_days_from_sunday());
    let start = date.checked_sub(Duration::days(offset))?;
    let end = start.checked_add(Duration::days(6))?;
    Some((start, end))
}

pub fn weekday_names_from(start: Date) -> Vec<&'static str> {
    (0..7)
        .filter_map(|offset| start.checked_add(Duration::days(offset)))
        .map(weekday_name)
        .collect()
}

pub fn parse_date(raw: &str) -> Result<Date, ParseDateError> {
    Date::parse(raw.trim(), &Iso8601::PARSING).map_err(|_| ParseDateError {
        value: raw.to_string(),
    })
}

pub fn format_date(date: Date) -> String {
    date.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateError {
    value: String,
}

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date '{}': expected YYYY-MM-DD", self.value)
    }
}

impl Error for ParseDateError {}
