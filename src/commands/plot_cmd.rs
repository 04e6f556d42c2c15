use tracing::info;

use crate::commands::base_commands::{CommandError, Commands};
use crate::services::eoq::plan_inventory;
use crate::services::inventory_plot::write_inventory_chart_png;

pub fn plot_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Plot { inputs, output } = cmd {
        let inputs = inputs.resolve()?;
        let plan = plan_inventory(&inputs)?;
        write_inventory_chart_png(&output, &plan.forecast, &plan.reorder_marker)?;
        info!(path = %output, "wrote inventory chart");
        println!("Inventory chart written to {output}");
    }
    Ok(())
}
