use crate::forge::GenerationError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Knobs for the fixed starting planets. One planet per player, all drawn
/// from the same ranges so no spawn is favored.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingConfig {
    pub players: usize,
    pub size_range: RangeInclusive<f64>,
    pub metal_density_range: RangeInclusive<f64>,
}

impl Default for StartingConfig {
    fn default() -> Self {
        Self {
            players: 2,
            size_range: 400.0..=400.0,
            metal_density_range: 100.0..=100.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub system_count: usize,
    /// Additional resource planets per system, drawn uniformly.
    pub planet_count_range: RangeInclusive<usize>,
    pub planet_size_range: RangeInclusive<f64>,
    pub metal_density_range: RangeInclusive<f64>,
    pub starting: StartingConfig,
    /// When set, systems are named "{base} {n}" instead of procedurally.
    pub name_base: Option<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            system_count: 5,
            planet_count_range: 1..=5,
            planet_size_range: 200.0..=400.0,
            metal_density_range: 45.0..=55.0,
            starting: StartingConfig::default(),
            name_base: None,
        }
    }
}

impl BatchConfig {
    /// Rejects any configuration that could not produce a full batch. Runs
    /// before generation so a bad config never yields partial output.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.system_count < 1 {
            return Err(invalid("system_count must be at least 1"));
        }
        if self.starting.players < 1 {
            return Err(invalid("starting.players must be at least 1"));
        }
        check_count_range("planet_count_range", &self.planet_count_range)?;
        check_stat_range("planet_size_range", &self.planet_size_range)?;
        check_stat_range("metal_density_range", &self.metal_density_range)?;
        check_stat_range("starting.size_range", &self.starting.size_range)?;
        check_stat_range(
            "starting.metal_density_range",
            &self.starting.metal_density_range,
        )?;
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> GenerationError {
    GenerationError::InvalidConfiguration(message.into())
}

fn check_count_range(field: &str, range: &RangeInclusive<usize>) -> Result<(), GenerationError> {
    if range.is_empty() {
        return Err(invalid(format!(
            "{} is empty ({}..={})",
            field,
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

fn check_stat_range(field: &str, range: &RangeInclusive<f64>) -> Result<(), GenerationError> {
    // is_empty also catches NaN bounds, which never compare ordered.
    if range.is_empty() {
        return Err(invalid(format!(
            "{} is empty ({}..={})",
            field,
            range.start(),
            range.end()
        )));
    }
    if *range.start() < 0.0 {
        return Err(invalid(format!("{} must be non-negative", field)));
    }
    Ok(())
}
