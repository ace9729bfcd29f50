use std::error::Error;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use super::workload::{ScalarLoad, WorkoutLoad};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Weight,
    Volume,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Weight, Metric::Volume];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Weight => "weight",
            Metric::Volume => "volume",
        }
    }

    pub fn compute(self, load: &WorkoutLoad) -> f64 {
        match self {
            Metric::Weight => weight_metric(load),
            Metric::Volume => volume_metric(load),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weight" | "w" => Ok(Metric::Weight),
            "volume" | "v" => Ok(Metric::Volume),
            _ => Err(ParseMetricError {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMetricError {
    value: String,
}

impl fmt::Display for ParseMetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid metric '{}': expected one of {}",
            self.value,
            Metric::ALL
                .iter()
                .map(|metric| metric.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl Error for ParseMetricError {}

/// Free-text quantity as entered in a form. Anything that is not a finite
/// number counts as zero.
pub fn parse_quantity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(_) | Err(_) => {
            if !raw.trim().is_empty() {
                debug!("treating non-numeric quantity '{raw}' as 0");
            }
            0.0
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        debug!("metric overflowed to {value}; reporting 0");
        0.0
    }
}

fn parse_optional(raw: Option<&str>) -> f64 {
    raw.map(parse_quantity).unwrap_or(0.0)
}

/// Mean weight across sets, or the scalar weight for legacy workouts.
/// A result too large to represent counts as zero.
pub fn weight_metric(load: &WorkoutLoad) -> f64 {
    let weight = match load {
        WorkoutLoad::Scalar(scalar) => parse_optional(scalar.weight.as_deref()),
        WorkoutLoad::SetBased { sets } if sets.is_empty() => 0.0,
        WorkoutLoad::SetBased { sets } => {
            let total: f64 = sets.iter().map(|set| parse_quantity(&set.weight)).sum();
            total / sets.len() as f64
        }
    };
    finite_or_zero(weight)
}

/// Sum of sets x reps x weight. A result too large to represent counts as zero.
pub fn volume_metric(load: &WorkoutLoad) -> f64 {
    let volume = match load {
        WorkoutLoad::Scalar(scalar) => scalar_volume(scalar),
        WorkoutLoad::SetBased { sets } => sets
            .iter()
            .map(|set| {
                parse_quantity(&set.sets) * parse_quantity(&set.reps) * parse_quantity(&set.weight)
            })
            .sum(),
    };
    finite_or_zero(volume)
}

fn scalar_volume(scalar: &ScalarLoad) -> f64 {
    parse_optional(scalar.sets.as_deref())
        * parse_optional(scalar.reps.as_deref())
        * parse_optional(scalar.weight.as_deref())
}
