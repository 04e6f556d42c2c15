use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::inventory::InventoryInputs;

/// Forecast horizon used when neither the file nor the command line sets one.
pub const DEFAULT_FORECAST_HORIZON_DAYS: f64 = 180.0;

#[derive(Error, Debug)]
pub enum InputsYamlError {
    #[error("failed to read inputs file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse inputs yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("missing input: {0}")]
    MissingInput(&'static str),
}

/// Inputs as they appear in a YAML file. Every key is optional so that the
/// command line can fill in or override values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialInputs {
    pub annual_demand: Option<f64>,
    pub order_cost: Option<f64>,
    pub unit_holding_cost: Option<f64>,
    pub lead_time_days: Option<f64>,
    pub forecast_horizon_days: Option<f64>,
}

impl PartialInputs {
    /// Values set in `overrides` win over values in `self`.
    pub fn merge(self, overrides: PartialInputs) -> PartialInputs {
        PartialInputs {
            annual_demand: overrides.annual_demand.or(self.annual_demand),
            order_cost: overrides.order_cost.or(self.order_cost),
            unit_holding_cost: overrides.unit_holding_cost.or(self.unit_holding_cost),
            lead_time_days: overrides.lead_time_days.or(self.lead_time_days),
            forecast_horizon_days: overrides
                .forecast_horizon_days
                .or(self.forecast_horizon_days),
        }
    }

    pub fn resolve(self) -> Result<InventoryInputs, InputsYamlError> {
        Ok(InventoryInputs {
            annual_demand: self
                .annual_demand
                .ok_or(InputsYamlError::MissingInput("annual_demand"))?,
            order_cost: self
                .order_cost
                .ok_or(InputsYamlError::MissingInput("order_cost"))?,
            unit_holding_cost: self
                .unit_holding_cost
                .ok_or(InputsYamlError::MissingInput("unit_holding_cost"))?,
            lead_time_days: self
                .lead_time_days
                .ok_or(InputsYamlError::MissingInput("lead_time_days"))?,
            forecast_horizon_days: self
                .forecast_horizon_days
                .unwrap_or(DEFAULT_FORECAST_HORIZON_DAYS),
        })
    }
}

pub fn load_inputs_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<PartialInputs, InputsYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| InputsYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_inputs_from_yaml_str(&contents)
}

pub fn deserialize_inputs_from_yaml_str(input: &str) -> Result<PartialInputs, InputsYamlError> {
    if input.trim().is_empty() {
        return Ok(PartialInputs::default());
    }
    Ok(serde_yaml::from_str(input)?)
}
