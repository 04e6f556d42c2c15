use std::io::{self, Write};

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::domain::inventory::{InventoryInputs, InventoryPlan, OrderPlan};

#[derive(Error, Debug)]
pub enum ForecastYamlError {
    #[error("invalid start date: {0} (expected YYYY-MM-DD)")]
    InvalidStartDate(String),
    #[error("day {0} cannot be placed on the calendar")]
    DateOutOfRange(f64),
    #[error("failed to serialize forecast: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("i/o error: {0}")]
    Write(#[from] io::Error),
}

#[derive(Serialize)]
struct ForecastDocument<'a> {
    inputs: &'a InventoryInputs,
    plan: &'a OrderPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    reorder_marker: MarkerRecord,
    forecast: Vec<PointRecord>,
}

#[derive(Serialize)]
struct MarkerRecord {
    day: f64,
    inventory: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    before_start: bool,
}

#[derive(Serialize)]
struct PointRecord {
    day: f64,
    inventory: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
}

pub fn parse_start_date(value: &str) -> Result<NaiveDate, ForecastYamlError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ForecastYamlError::InvalidStartDate(value.to_string()))
}

/// Writes the plan and its forecast as YAML. With a `start_date`, every point
/// and the reorder marker also carry a calendar date.
pub fn serialize_forecast_to_yaml<W: Write>(
    writer: &mut W,
    plan: &InventoryPlan,
    start_date: Option<NaiveDate>,
) -> Result<(), ForecastYamlError> {
    let forecast = plan
        .forecast
        .points
        .iter()
        .map(|point| -> Result<PointRecord, ForecastYamlError> {
            Ok(PointRecord {
                day: point.day,
                inventory: point.inventory,
                date: date_for_day(start_date, point.day)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let marker = &plan.reorder_marker;
    let document = ForecastDocument {
        inputs: &plan.inputs,
        plan: &plan.order,
        start_date: start_date.map(format_date),
        reorder_marker: MarkerRecord {
            day: marker.day,
            inventory: marker.inventory,
            date: date_for_day(start_date, marker.day)?,
            before_start: marker.is_before_start(),
        },
        forecast,
    };

    let yaml = serde_yaml::to_string(&document)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}

// Fractional days fall on the calendar day they start in.
fn date_for_day(
    start_date: Option<NaiveDate>,
    day: f64,
) -> Result<Option<String>, ForecastYamlError> {
    let Some(start_date) = start_date else {
        return Ok(None);
    };
    let offset = day.floor();
    if !offset.is_finite() || offset.abs() > i32::MAX as f64 {
        return Err(ForecastYamlError::DateOutOfRange(day));
    }
    let date = Duration::try_days(offset as i64)
        .and_then(|delta| start_date.checked_add_signed(delta))
        .ok_or(ForecastYamlError::DateOutOfRange(day))?;
    Ok(Some(format_date(date)))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
