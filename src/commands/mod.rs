pub mod base_commands;
pub mod calculate_cmd;
pub mod forecast_cmd;
pub mod plot_cmd;
pub mod report_format;
