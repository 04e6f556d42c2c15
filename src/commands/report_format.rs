use serde::Serialize;

use crate::commands::base_commands::{CommandError, ReportFormat};
use crate::domain::inventory::{InventoryInputs, InventoryPlan, OrderPlan, ReorderMarker};

#[derive(Serialize)]
struct PlanReport<'a> {
    inputs: &'a InventoryInputs,
    plan: &'a OrderPlan,
    reorder_marker: &'a ReorderMarker,
    reorder_before_start: bool,
}

pub fn format_plan(plan: &InventoryPlan, format: ReportFormat) -> Result<String, CommandError> {
    match format {
        ReportFormat::Text => Ok(format_plan_report(plan)),
        ReportFormat::Yaml => serde_yaml::to_string(&plan_report(plan))
            .map_err(|e| CommandError::Report(e.to_string())),
        ReportFormat::Json => serde_json::to_string_pretty(&plan_report(plan))
            .map_err(|e| CommandError::Report(e.to_string())),
    }
}

fn plan_report(plan: &InventoryPlan) -> PlanReport<'_> {
    PlanReport {
        inputs: &plan.inputs,
        plan: &plan.order,
        reorder_marker: &plan.reorder_marker,
        reorder_before_start: plan.reorder_marker.is_before_start(),
    }
}

pub fn format_plan_report(plan: &InventoryPlan) -> String {
    let inputs = &plan.inputs;
    let order = &plan.order;

    let mut lines = Vec::new();
    lines.push("EOQ Report".to_string());
    lines.push(format!("Annual demand: {:.2} units/year", inputs.annual_demand));
    lines.push(format!("Order cost: {:.2}", inputs.order_cost));
    lines.push(format!(
        "Unit holding cost: {:.2} per unit/year",
        inputs.unit_holding_cost
    ));
    lines.push(format!("Lead time: {:.2} days", inputs.lead_time_days));
    lines.push(format!(
        "Forecast horizon: {:.2} days",
        inputs.forecast_horizon_days
    ));
    lines.push(String::new());
    lines.push(format!("Order size: {} units", order.order_size));
    lines.push(format!("Daily demand: {:.2} units/day", order.daily_demand));
    lines.push(format!("Reorder point: {} units", order.reorder_point));
    lines.push(format!("Order lifetime: {} days", order.order_lifetime_days));
    lines.push(String::new());
    lines.push(format!(
        "- Each time inventory reaches {} units, place a new order for {} units.",
        order.reorder_point, order.order_size
    ));
    lines.push(format!(
        "- Inventory runs out approximately every {} days.",
        order.order_lifetime_days
    ));
    if plan.reorder_marker.is_before_start() {
        lines.push(format!(
            "Warning: lead time ({:.2} days) exceeds the order lifetime ({} days); the first reorder falls {:.2} days before day 0.",
            inputs.lead_time_days,
            order.order_lifetime_days,
            -plan.reorder_marker.day
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::eoq::plan_inventory;
    use crate::test_support::sample_inputs;

    #[test]
    fn format_plan_report_includes_plan_and_guidance() {
        let plan = plan_inventory(&sample_inputs()).unwrap();
        let output = format_plan_report(&plan);

        assert!(output.contains("EOQ Report"));
        assert!(output.contains("Annual demand: 1000.00 units/year"));
        assert!(output.contains("Order size: 90 units"));
        assert!(output.contains("Daily demand: 2.74 units/day"));
        assert!(output.contains("Reorder point: 20 units"));
        assert!(output.contains("Order lifetime: 33 days"));
        assert!(output.contains("place a new order for 90 units"));
        assert!(output.contains("every 33 days"));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn format_plan_report_warns_when_lead_time_exceeds_cycle() {
        let mut inputs = sample_inputs();
        inputs.lead_time_days = 40.0;
        let plan = plan_inventory(&inputs).unwrap();

        let output = format_plan_report(&plan);
        assert!(output.contains("Warning: lead time (40.00 days)"));
        assert!(output.contains("7.00 days before day 0"));
    }

    #[test]
    fn format_plan_as_json_and_yaml() {
        let plan = plan_inventory(&sample_inputs()).unwrap();

        let json = format_plan(&plan, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["plan"]["order_size"], 90);
        assert_eq!(value["plan"]["reorder_point"], 20);
        assert_eq!(value["reorder_before_start"], false);

        let yaml = format_plan(&plan, ReportFormat::Yaml).unwrap();
        assert!(yaml.contains("order_lifetime_days: 33"));
        assert!(yaml.contains("reorder_marker:"));
    }
}
