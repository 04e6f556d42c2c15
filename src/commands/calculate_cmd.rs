use crate::commands::base_commands::{CommandError, Commands};
use crate::commands::report_format::format_plan;
use crate::services::eoq::plan_inventory;

pub fn calculate_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Calculate { inputs, format } = cmd {
        let inputs = inputs.resolve()?;
        let plan = plan_inventory(&inputs)?;
        println!("{}", format_plan(&plan, format)?);
    }
    Ok(())
}
