//! Economic Order Quantity calculations.
//!
//! Every function here is pure. Inputs are checked up front and any value that
//! would divide by zero, loop forever or produce `NaN` is rejected with an
//! [`InvalidInputError`].

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::inventory::{
    ForecastPoint, InventoryForecast, InventoryInputs, InventoryPlan, OrderPlan, ReorderMarker,
};

/// Demand is spread over a 365 day year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Upper bound on replenishment cycles in a single forecast.
pub const MAX_FORECAST_CYCLES: u64 = 1_000_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} must be a finite number (got {value})")]
    NotFinite { name: &'static str, value: f64 },
    #[error("{name} must be greater than zero")]
    ZeroDivisor { name: &'static str },
    #[error("computed {name} is too large to represent")]
    OutOfRange { name: &'static str },
    #[error(
        "forecast horizon of {horizon_days} days needs {cycles} order cycles (limit {limit})",
        limit = MAX_FORECAST_CYCLES
    )]
    ForecastTooLong { horizon_days: f64, cycles: f64 },
}

/// `ceil(sqrt(2 * D * S / H))`.
///
/// # Errors
/// Fails when an input is negative or not finite, or when `unit_holding_cost`
/// is zero.
pub fn compute_order_size(
    annual_demand: f64,
    order_cost: f64,
    unit_holding_cost: f64,
) -> Result<u64, InvalidInputError> {
    let annual_demand = require_non_negative("annual_demand", annual_demand)?;
    let order_cost = require_non_negative("order_cost", order_cost)?;
    let unit_holding_cost = require_positive("unit_holding_cost", unit_holding_cost)?;

    let order_size = ((2.0 * annual_demand * order_cost) / unit_holding_cost).sqrt();
    ceil_to_u64("order_size", order_size)
}

/// Returns `(daily_demand, reorder_point)`. The daily demand is not rounded
/// because the order lifetime is derived from it.
pub fn compute_reorder_point(
    annual_demand: f64,
    lead_time_days: f64,
) -> Result<(f64, u64), InvalidInputError> {
    let annual_demand = require_non_negative("annual_demand", annual_demand)?;
    let lead_time_days = require_non_negative("lead_time_days", lead_time_days)?;

    let daily_demand = annual_demand / DAYS_PER_YEAR;
    let reorder_point = ceil_to_u64("reorder_point", daily_demand * lead_time_days)?;
    Ok((daily_demand, reorder_point))
}

/// Days until one order is used up, rounded up.
pub fn compute_order_lifetime(daily_demand: f64, order_size: u64) -> Result<u64, InvalidInputError> {
    let daily_demand = require_positive("daily_demand", daily_demand)?;
    ceil_to_u64("order_lifetime_days", order_size as f64 / daily_demand)
}

/// Builds the sawtooth of on-hand inventory.
///
/// The day sequence starts at `[0, L]` and, while the last day is short of the
/// horizon, repeats the last day and extends it by one more lifetime. The
/// inventory sequence alternates `order_size` and `0` to match. The final day
/// can overshoot the horizon by up to one cycle.
///
/// # Errors
/// - `order_lifetime_days` is zero.
/// - `forecast_horizon_days` is negative or not finite.
/// - The horizon needs more than [`MAX_FORECAST_CYCLES`] cycles.
pub fn build_inventory_forecast(
    forecast_horizon_days: f64,
    order_size: u64,
    order_lifetime_days: u64,
) -> Result<InventoryForecast, InvalidInputError> {
    let horizon = require_non_negative("forecast_horizon_days", forecast_horizon_days)?;
    if order_lifetime_days == 0 {
        return Err(InvalidInputError::ZeroDivisor {
            name: "order_lifetime_days",
        });
    }
    let lifetime = order_lifetime_days as f64;

    let cycles = (horizon / lifetime).ceil().max(1.0);
    if cycles > MAX_FORECAST_CYCLES as f64 {
        return Err(InvalidInputError::ForecastTooLong {
            horizon_days: horizon,
            cycles,
        });
    }

    let mut days = Vec::with_capacity(2 * cycles as usize);
    days.push(0.0);
    days.push(lifetime);
    let mut last = lifetime;
    while last < horizon {
        days.push(last);
        last += lifetime;
        days.push(last);
    }

    let full = order_size as f64;
    let mut inventory = Vec::with_capacity(days.len());
    inventory.push(full);
    inventory.push(0.0);
    while inventory.len() < days.len() {
        inventory.push(full);
        inventory.push(0.0);
    }

    let points = days
        .into_iter()
        .zip(inventory)
        .map(|(day, inventory)| ForecastPoint { day, inventory })
        .collect();
    Ok(InventoryForecast { points })
}

/// Marks the first-cycle day on which the reorder point is reached.
///
/// The day is not clamped. A lead time longer than the order lifetime yields a
/// negative day; see [`ReorderMarker::is_before_start`].
pub fn build_reorder_marker(
    reorder_point: u64,
    lead_time_days: f64,
    order_lifetime_days: u64,
) -> Result<ReorderMarker, InvalidInputError> {
    let lead_time_days = require_non_negative("lead_time_days", lead_time_days)?;
    Ok(ReorderMarker {
        day: order_lifetime_days as f64 - lead_time_days,
        inventory: reorder_point as f64,
    })
}

/// Runs every calculation in order and bundles the results.
pub fn plan_inventory(inputs: &InventoryInputs) -> Result<InventoryPlan, InvalidInputError> {
    let order_size = compute_order_size(
        inputs.annual_demand,
        inputs.order_cost,
        inputs.unit_holding_cost,
    )?;
    let (daily_demand, reorder_point) =
        compute_reorder_point(inputs.annual_demand, inputs.lead_time_days)?;
    let order_lifetime_days = compute_order_lifetime(daily_demand, order_size)?;
    debug!(
        order_size,
        daily_demand, reorder_point, order_lifetime_days, "computed order plan"
    );

    let forecast = build_inventory_forecast(
        inputs.forecast_horizon_days,
        order_size,
        order_lifetime_days,
    )?;
    let reorder_marker =
        build_reorder_marker(reorder_point, inputs.lead_time_days, order_lifetime_days)?;
    if reorder_marker.is_before_start() {
        warn!(
            lead_time_days = inputs.lead_time_days,
            order_lifetime_days,
            marker_day = reorder_marker.day,
            "lead time exceeds the order cycle; reorder marker falls before day 0"
        );
    }
    debug!(points = forecast.len(), last_day = ?forecast.last_day(), "built inventory forecast");

    Ok(InventoryPlan {
        inputs: *inputs,
        order: OrderPlan {
            order_size,
            daily_demand,
            reorder_point,
            order_lifetime_days,
        },
        forecast,
        reorder_marker,
    })
}

fn require_non_negative(name: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::NotFinite { name, value });
    }
    if value < 0.0 {
        return Err(InvalidInputError::Negative { name, value });
    }
    Ok(value)
}

fn require_positive(name: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    let value = require_non_negative(name, value)?;
    if value == 0.0 {
        return Err(InvalidInputError::ZeroDivisor { name });
    }
    Ok(value)
}

fn ceil_to_u64(name: &'static str, value: f64) -> Result<u64, InvalidInputError> {
    let rounded = value.ceil();
    // u64::MAX rounds up to 2^64 as f64, so anything at or above it overflows.
    if !rounded.is_finite() || rounded >= u64::MAX as f64 {
        return Err(InvalidInputError::OutOfRange { name });
    }
    Ok(rounded as u64)
}
