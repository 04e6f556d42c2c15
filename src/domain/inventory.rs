use serde::{Deserialize, Serialize};

/// The five scalars a plan is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryInputs {
    /// Units per year.
    pub annual_demand: f64,
    /// Cost of placing one order.
    pub order_cost: f64,
    /// Cost of holding one unit for a year.
    pub unit_holding_cost: f64,
    pub lead_time_days: f64,
    pub forecast_horizon_days: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderPlan {
    pub order_size: u64,
    pub daily_demand: f64,
    pub reorder_point: u64,
    pub order_lifetime_days: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub day: f64,
    pub inventory: f64,
}

/// Sawtooth of on-hand inventory. Only the endpoints of each replenishment
/// cycle are stored; consumers interpolate linearly between points.
///
/// The last point may lie past the requested horizon by up to one cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryForecast {
    pub points: Vec<ForecastPoint>,
}

impl InventoryForecast {
    pub fn days(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.day).collect()
    }

    pub fn inventory(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.inventory).collect()
    }

    pub fn last_day(&self) -> Option<f64> {
        self.points.last().map(|point| point.day)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Point within the first cycle at which inventory reaches the reorder point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReorderMarker {
    pub day: f64,
    pub inventory: f64,
}

impl ReorderMarker {
    /// True when the lead time is longer than one order cycle, which puts the
    /// marker before the start of the forecast.
    pub fn is_before_start(&self) -> bool {
        self.day < 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryPlan {
    pub inputs: InventoryInputs,
    pub order: OrderPlan,
    pub forecast: InventoryForecast,
    pub reorder_marker: ReorderMarker,
}
