use tracing::info;

use crate::commands::base_commands::{CommandError, Commands};
use crate::services::eoq::plan_inventory;
use crate::services::forecast_yaml::{parse_start_date, serialize_forecast_to_yaml};
use crate::services::inventory_plot::write_inventory_chart_png;

pub fn forecast_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Forecast {
        inputs,
        output,
        start_date,
        no_chart,
    } = cmd
    {
        let start_date = start_date
            .as_deref()
            .map(parse_start_date)
            .transpose()
            .map_err(CommandError::StartDate)?;
        let inputs = inputs.resolve()?;
        let plan = plan_inventory(&inputs)?;

        let mut buffer = Vec::new();
        serialize_forecast_to_yaml(&mut buffer, &plan, start_date)?;
        std::fs::write(&output, buffer).map_err(|source| CommandError::WriteFile {
            path: output.clone(),
            source,
        })?;
        info!(path = %output, points = plan.forecast.len(), "wrote inventory forecast");
        println!("Forecast written to {output}");

        if !no_chart {
            let chart_path = format!("{output}.png");
            write_inventory_chart_png(&chart_path, &plan.forecast, &plan.reorder_marker)?;
            info!(path = %chart_path, "wrote inventory chart");
            println!("Forecast chart written to {chart_path}");
        }
    }
    Ok(())
}
