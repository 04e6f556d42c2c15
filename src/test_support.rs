use chrono::NaiveDate;

use crate::domain::inventory::InventoryInputs;

/// Demand of 1000 units a year, $10 per order, $2.50 holding cost, one week
/// of lead time and a 180 day horizon.
pub fn sample_inputs() -> InventoryInputs {
    InventoryInputs {
        annual_demand: 1000.0,
        order_cost: 10.0,
        unit_holding_cost: 2.5,
        lead_time_days: 7.0,
        forecast_horizon_days: 180.0,
    }
}

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
