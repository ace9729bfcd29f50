use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

/// Identifier shared by every persisted entity: `<prefix>-<uuid v7>`.
pub trait EntityId: Sized + Clone + fmt::Display + FromStr<Err = ParseIdError> {
    const PREFIX: &'static str;
    const KIND: &'static str;
    const TABLE: &'static str;

    fn from_raw(raw: String) -> Self;
    fn as_str(&self) -> &str;
}

macro_rules! entity_id {
    ($name:ident, $prefix:literal, $kind:literal, $table:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::now_v7()))
            }
        }

        impl EntityId for $name {
            const PREFIX: &'static str = $prefix;
            const KIND: &'static str = $kind;
            const TABLE: &'static str = $table;

            fn from_raw(raw: String) -> Self {
                Self(raw)
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                parse_prefixed::<$name>(value)
            }
        }
    };
}

entity_id!(WeekId, "W", "week", "week");
entity_id!(DayId, "D", "workout day", "workout_day");
entity_id!(WorkoutId, "X", "workout", "workout");
entity_id!(SetId, "S", "workout set", "workout_set");

fn parse_prefixed<I: EntityId>(value: &str) -> Result<I, ParseIdError> {
    let trimmed = value.trim();
    let valid = trimmed
        .split_once('-')
        .is_some_and(|(prefix, rest)| prefix == I::PREFIX && Uuid::parse_str(rest).is_ok());
    if valid {
        Ok(I::from_raw(trimmed.to_string()))
    } else {
        Err(ParseIdError {
            kind: I::KIND,
            value: value.to_string(),
        })
    }
}

/// True when `value` is written as a whole id (`W-…`) rather than a trailing
/// fragment. Uuid text is lowercase hex, so an uppercase head marks a prefix.
pub fn has_kind_prefix(value: &str) -> bool {
    value
        .split_once('-')
        .is_some_and(|(head, _)| !head.is_empty() && head.chars().all(|c| c.is_ascii_uppercase()))
}

/// Short form shown in list output: the trailing 8 hex characters.
pub fn display_id(id: &str) -> &str {
    let hex_start = id.len().saturating_sub(8);
    id.get(hex_start..).unwrap_or(id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
    value: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} id '{}'", self.kind, self.value)
    }
}

impl Error for ParseIdError {}
