use std::io;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use thiserror::Error;

use crate::domain::inventory::InventoryInputs;
use crate::services::eoq::InvalidInputError;
use crate::services::forecast_yaml::ForecastYamlError;
use crate::services::inputs_yaml::{InputsYamlError, PartialInputs, load_inputs_from_yaml_file};
use crate::services::inventory_plot::InventoryPlotError;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute order size, reorder point and order lifetime
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,
        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Write the inventory forecast as YAML, with a PNG chart next to it
    Forecast {
        #[command(flatten)]
        inputs: InputArgs,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Calendar date of day 0 (YYYY-MM-DD)
        #[arg(short, long)]
        start_date: Option<String>,
        /// Skip writing the PNG chart
        #[arg(long)]
        no_chart: bool,
    },
    /// Plot the inventory forecast into a PNG chart
    Plot {
        #[command(flatten)]
        inputs: InputArgs,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Inputs shared by every computing command. Flags override the inputs file.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// YAML file with the planning inputs
    #[arg(short, long)]
    pub input: Option<String>,
    /// Demand in units per year
    #[arg(short = 'd', long)]
    pub annual_demand: Option<f64>,
    /// Cost of placing one order
    #[arg(short = 'c', long)]
    pub order_cost: Option<f64>,
    /// Cost of holding one unit for a year
    #[arg(short = 'k', long = "holding-cost")]
    pub unit_holding_cost: Option<f64>,
    /// Days between placing an order and receiving it
    #[arg(short = 'l', long = "lead-time")]
    pub lead_time_days: Option<f64>,
    /// Number of days to forecast [default: 180]
    #[arg(short = 'H', long = "horizon")]
    pub forecast_horizon_days: Option<f64>,
}

impl InputArgs {
    pub fn resolve(&self) -> Result<InventoryInputs, InputsYamlError> {
        let from_file = match &self.input {
            Some(path) => load_inputs_from_yaml_file(path)?,
            None => PartialInputs::default(),
        };
        from_file
            .merge(PartialInputs {
                annual_demand: self.annual_demand,
                order_cost: self.order_cost,
                unit_holding_cost: self.unit_holding_cost,
                lead_time_days: self.lead_time_days,
                forecast_horizon_days: self.forecast_horizon_days,
            })
            .resolve()
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Yaml,
    Json,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to read inputs: {0}")]
    Inputs(#[from] InputsYamlError),
    #[error("failed to compute inventory plan: {0}")]
    Plan(#[from] InvalidInputError),
    #[error("failed to read start date: {0}")]
    StartDate(ForecastYamlError),
    #[error("failed to write forecast: {0}")]
    Forecast(#[from] ForecastYamlError),
    #[error("failed to plot inventory: {0}")]
    Plot(#[from] InventoryPlotError),
    #[error("failed to format report: {0}")]
    Report(String),
    #[error("failed to write {path}: {source}")]
    WriteFile { path: String, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_defaults_to_text_report() {
        let args = CliArgs::parse_from(["eoq", "calculate", "-d", "1000", "-c", "10", "-k", "2.5", "-l", "7"]);

        if let Commands::Calculate { inputs, format } = args.command {
            assert_eq!(format, ReportFormat::Text);
            assert_eq!(inputs.annual_demand, Some(1000.0));
            assert_eq!(inputs.forecast_horizon_days, None);
        } else {
            panic!("expected calculate command");
        }
    }

    #[test]
    fn input_args_resolve_defaults_horizon() {
        let args = InputArgs {
            annual_demand: Some(1000.0),
            order_cost: Some(10.0),
            unit_holding_cost: Some(2.5),
            lead_time_days: Some(7.0),
            ..InputArgs::default()
        };

        let inputs = args.resolve().unwrap();
        assert_eq!(inputs.forecast_horizon_days, 180.0);
    }

    #[test]
    fn input_args_resolve_reports_missing_holding_cost() {
        let args = InputArgs {
            annual_demand: Some(1000.0),
            order_cost: Some(10.0),
            lead_time_days: Some(7.0),
            ..InputArgs::default()
        };

        let error = args.resolve().unwrap_err();
        assert!(matches!(error, InputsYamlError::MissingInput("unit_holding_cost")));
    }

    #[test]
    fn command_error_names_each_failure_once() {
        let write = CommandError::Forecast(ForecastYamlError::Write(io::Error::other("disk full")));
        assert_eq!(write.to_string(), "failed to write forecast: i/o error: disk full");

        let start_date =
            CommandError::StartDate(ForecastYamlError::InvalidStartDate("tomorrow".to_string()));
        assert_eq!(
            start_date.to_string(),
            "failed to read start date: invalid start date: tomorrow (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn forecast_parses_long_flags() {
        let args = CliArgs::parse_from([
            "eoq",
            "forecast",
            "--annual-demand",
            "1000",
            "--order-cost",
            "10",
            "--holding-cost",
            "2.5",
            "--lead-time",
            "7",
            "--horizon",
            "90",
            "-o",
            "forecast.yaml",
            "-s",
            "2026-01-01",
            "--no-chart",
        ]);

        if let Commands::Forecast {
            inputs,
            output,
            start_date,
            no_chart,
        } = args.command
        {
            assert_eq!(inputs.forecast_horizon_days, Some(90.0));
            assert_eq!(output, "forecast.yaml");
            assert_eq!(start_date.as_deref(), Some("2026-01-01"));
            assert!(no_chart);
        } else {
            panic!("expected forecast command");
        }
    }
}
