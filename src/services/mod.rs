pub mod eoq;
pub mod forecast_yaml;
pub mod inputs_yaml;
pub mod inventory_plot;
